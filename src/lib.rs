//! Summary tables for repaq QC reports.
//!
//! - Finds repaq JSON reports (plain and `.gz`) below one or more roots.
//! - Validates each report against the required field set; bad files are
//!   logged and skipped, never fatal.
//! - One row per sample, last report wins on a duplicate sample name.
//! - Emits general-stats columns and a detailed per-sample table through
//!   pluggable host interfaces; plain default implementations included.

pub mod aggregate;
pub mod clean;
pub mod columns;
pub mod error;
pub mod host;
pub mod locator;
pub mod logging;
pub mod module;
pub mod options;
pub mod reader;
pub mod record;
mod util;

pub use crate::aggregate::{SampleMap, collect_samples};
pub use crate::clean::{DefaultCleaner, SampleNameCleaner};
pub use crate::columns::{
    ColorScale, ColumnDef, NumberFormat, TableConfig, detailed_columns, general_stats_columns,
    pass_fail, stats_table_config,
};
pub use crate::error::{FileContext, ModuleError, ParseError};
pub use crate::host::{
    DataFileWriter, GeneralStats, GeneralStatsTable, JsonDataWriter, PlainTableRenderer,
    RenderedTable, TableRenderer,
};
pub use crate::locator::{FsLocator, MemoryLocator, ReportFile, ReportLocator};
pub use crate::logging::ModuleLog;
pub use crate::module::{HostContext, ModuleInfo, ModuleOutput, RepaqModule, Section};
pub use crate::options::{DataFormat, ModuleOptions, SearchPattern};
pub use crate::reader::{decode_report, parse_record};
pub use crate::record::{FieldValue, REQUIRED_FIELDS, RepaqRecord};
