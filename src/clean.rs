use crate::error::FileContext;
use std::path::{Component, Path};

/// Turns a report's file name into the sample name shown in tables.
pub trait SampleNameCleaner {
    fn clean_s_name(&self, filename: &str, ctx: &FileContext) -> String;
}

/// Extension-truncating cleaner.
///
/// The directory part is dropped, then the name is cut at the first
/// occurrence of each configured extension, in order. With `prepend_dirs`
/// the directory the report was found in (relative to its search root) is
/// kept as a `dir | name` prefix.
#[derive(Debug, Clone)]
pub struct DefaultCleaner {
    pub extensions: Vec<String>,
    pub prepend_dirs: bool,
}

impl Default for DefaultCleaner {
    fn default() -> Self {
        Self {
            extensions: [".gz", ".json", ".rfq", ".fastq", ".fq", "_repaq"]
                .into_iter()
                .map(String::from)
                .collect(),
            prepend_dirs: false,
        }
    }
}

impl SampleNameCleaner for DefaultCleaner {
    fn clean_s_name(&self, filename: &str, ctx: &FileContext) -> String {
        let path = Path::new(filename);
        let base = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(filename);

        let mut name = base;
        for ext in self.extensions.iter().filter(|e| !e.is_empty()) {
            if let Some(idx) = name.find(ext.as_str()) {
                name = &name[..idx];
            }
        }
        // Never hand back an empty sample name.
        let name = if name.is_empty() { base } else { name };

        if !self.prepend_dirs {
            return name.to_string();
        }

        let prefix = ctx
            .root
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" | ");
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix} | {name}")
        }
    }
}
