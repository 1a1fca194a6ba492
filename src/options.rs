use serde::Deserialize;

/// Which files the filesystem locator hands to the module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchPattern {
    /// Glob matched against file names below each search root.
    pub fn_glob: String,
    /// Substring that must appear in the (decompressed) file contents.
    pub contents: Option<String>,
    /// Files larger than this many bytes are skipped.
    pub max_filesize: u64,
}

impl Default for SearchPattern {
    fn default() -> Self {
        Self {
            fn_glob: "*.json".to_string(),
            contents: Some("rfq_reads".to_string()),
            max_filesize: 50 * 1024 * 1024,
        }
    }
}

/// Serialization used for the parsed-data dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Tsv,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModuleOptions {
    pub search: SearchPattern,
    pub data_file_name: String,
    pub data_format: DataFormat,
    pub log_target: String,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            search: SearchPattern::default(),
            data_file_name: "multiqc_repaq".to_string(),
            data_format: DataFormat::Json,
            log_target: "repaq".to_string(),
        }
    }
}

impl ModuleOptions {
    /// Parse host configuration; absent keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
