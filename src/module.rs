use crate::aggregate::collect_samples;
use crate::clean::SampleNameCleaner;
use crate::columns::{detailed_columns, general_stats_columns, stats_table_config};
use crate::error::ModuleError;
use crate::host::{DataFileWriter, GeneralStats, RenderedTable, TableRenderer};
use crate::locator::ReportLocator;
use crate::logging::ModuleLog;
use crate::options::ModuleOptions;

/// Static identity registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub anchor: &'static str,
    pub href: &'static str,
    pub info: &'static str,
    pub extra: &'static str,
}

pub const REPAQ_INFO: ModuleInfo = ModuleInfo {
    name: "repaq",
    anchor: "repaq",
    href: "https://github.com/OpenGene/repaq",
    info: "A tool for lossless compression of FASTQ files with quality control",
    extra: "repaq performs lossless compression of FASTQ files and provides quality control \
            metrics including read counts, base counts, and compression results.",
};

/// One report section contributed by the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub anchor: String,
    pub description: String,
    pub table: RenderedTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOutput {
    pub info: ModuleInfo,
    pub sample_count: usize,
    /// Files rejected during parsing.
    pub warnings: usize,
    pub sections: Vec<Section>,
}

/// The collaborators a run talks to.
pub struct HostContext<'a> {
    pub locator: &'a dyn ReportLocator,
    pub cleaner: &'a dyn SampleNameCleaner,
    pub writer: &'a mut dyn DataFileWriter,
    pub general_stats: &'a mut dyn GeneralStats,
    pub renderer: &'a dyn TableRenderer,
}

#[derive(Debug, Clone, Default)]
pub struct RepaqModule {
    opts: ModuleOptions,
}

impl RepaqModule {
    pub fn new(opts: ModuleOptions) -> Self {
        Self { opts }
    }

    pub fn info(&self) -> &'static ModuleInfo {
        &REPAQ_INFO
    }

    /// Locate, parse and aggregate reports, then hand the results to the
    /// host's writer, general-stats table and renderer.
    ///
    /// Returns [`ModuleError::NoSamplesFound`] without touching any output
    /// collaborator when no report survived validation.
    pub fn run(&self, host: HostContext<'_>) -> Result<ModuleOutput, ModuleError> {
        let mut log = ModuleLog::new(self.opts.log_target.as_str());
        let info = *self.info();

        let files = host.locator.find_log_files(info.anchor)?;
        let samples = collect_samples(files, host.cleaner, &mut log);

        // Ignore if module was called with no usable files
        if samples.is_empty() {
            log.debug("no valid repaq reports, skipping module");
            return Err(ModuleError::NoSamplesFound);
        }
        log.info(&format!("Found {} repaq reports", samples.len()));

        host.writer
            .write_data_file(&samples, &self.opts.data_file_name)?;

        host.general_stats
            .add_columns(info.anchor, &samples, &general_stats_columns());

        let table = host
            .renderer
            .render(&samples, &detailed_columns(), &stats_table_config());

        Ok(ModuleOutput {
            info,
            sample_count: samples.len(),
            warnings: log.warnings(),
            sections: vec![Section {
                name: "Summary Statistics".to_string(),
                anchor: "repaq-stats".to_string(),
                description: "Statistics from repaq compression and QC analysis".to_string(),
                table,
            }],
        })
    }
}
