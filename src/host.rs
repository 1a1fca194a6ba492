//! Interfaces to the surrounding report, plus plain default implementations.

use crate::aggregate::SampleMap;
use crate::columns::{ColumnDef, NumberFormat, TableConfig, format_thousands};
use crate::error::ModuleError;
use crate::options::DataFormat;
use crate::record::{FieldValue, RepaqRecord};

use indexmap::IndexMap;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Persists the parsed data next to the report.
pub trait DataFileWriter {
    fn write_data_file(&mut self, data: &SampleMap, name: &str) -> Result<(), ModuleError>;
}

/// Cross-module summary table.
pub trait GeneralStats {
    fn add_columns(&mut self, namespace: &str, data: &SampleMap, columns: &[ColumnDef]);
}

/// Builds a displayable table from samples and column metadata.
pub trait TableRenderer {
    fn render(
        &self,
        data: &SampleMap,
        columns: &[ColumnDef],
        config: &TableConfig,
    ) -> RenderedTable;
}

/// Apply a column's value map and number format to one field.
pub fn render_cell(column: &ColumnDef, value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(s) => match column.value_map {
            Some(map) => map(s).to_string(),
            None => s.to_string(),
        },
        FieldValue::Count(n) => match column.format {
            NumberFormat::Thousands => format_thousands(n),
            NumberFormat::Text => n.to_string(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub sample: String,
    /// One entry per column; `None` when the sample lacks the field.
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub id: String,
    pub title: String,
    pub namespace: String,
    pub col1_header: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl RenderedTable {
    /// Cell lookup by sample name and column title.
    pub fn cell(&self, sample: &str, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == header)?;
        let row = self.rows.iter().find(|r| r.sample == sample)?;
        row.cells.get(col)?.as_deref()
    }

    /// Tab-separated dump; cells holding tabs, quotes or newlines are quoted.
    pub fn to_tsv(&self) -> io::Result<String> {
        let mut wtr = tsv_writer(Vec::new());
        let headers = self.headers.iter().map(String::as_str);
        wtr.write_record(std::iter::once(self.col1_header.as_str()).chain(headers))?;
        for row in &self.rows {
            let cells = row.cells.iter().map(|c| c.as_deref().unwrap_or(""));
            wtr.write_record(std::iter::once(row.sample.as_str()).chain(cells))?;
        }
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(bytes).map_err(io::Error::other)
    }
}

/// Formats every cell as text, keeping sample order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTableRenderer;

impl TableRenderer for PlainTableRenderer {
    fn render(
        &self,
        data: &SampleMap,
        columns: &[ColumnDef],
        config: &TableConfig,
    ) -> RenderedTable {
        let rows = data
            .iter()
            .map(|(s_name, record)| TableRow {
                sample: s_name.to_string(),
                cells: columns
                    .iter()
                    .map(|c| record.field(c.key).map(|v| render_cell(c, v)))
                    .collect(),
            })
            .collect();
        RenderedTable {
            id: config.id.to_string(),
            title: config.title.to_string(),
            namespace: config.namespace.to_string(),
            col1_header: config.col1_header.to_string(),
            headers: columns.iter().map(|c| c.title.to_string()).collect(),
            rows,
        }
    }
}

/// Raw value kept alongside the display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Count(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub raw: CellValue,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralStatsHeader {
    /// `<namespace>-<key>`, unique across modules.
    pub id: String,
    pub namespace: String,
    pub title: String,
    pub description: String,
    pub shared_key: Option<String>,
}

/// In-memory general statistics table that several modules can add to.
#[derive(Debug, Clone, Default)]
pub struct GeneralStatsTable {
    pub headers: Vec<GeneralStatsHeader>,
    pub rows: IndexMap<String, IndexMap<String, Cell>>,
}

impl GeneralStatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell lookup by sample and column id (`<namespace>-<key>`).
    pub fn cell(&self, sample: &str, id: &str) -> Option<&Cell> {
        self.rows.get(sample)?.get(id)
    }

    /// Column ids sharing a scale key.
    pub fn shared(&self, shared_key: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|h| h.shared_key.as_deref() == Some(shared_key))
            .map(|h| h.id.as_str())
            .collect()
    }
}

impl GeneralStats for GeneralStatsTable {
    fn add_columns(&mut self, namespace: &str, data: &SampleMap, columns: &[ColumnDef]) {
        for c in columns {
            let id = format!("{namespace}-{}", c.key);
            if self.headers.iter().any(|h| h.id == id) {
                continue;
            }
            self.headers.push(GeneralStatsHeader {
                id,
                namespace: namespace.to_string(),
                title: c.title.to_string(),
                description: c.description.to_string(),
                shared_key: c.shared_key.map(str::to_string),
            });
        }

        for (s_name, record) in data.iter() {
            let row = self.rows.entry(s_name.to_string()).or_default();
            for c in columns {
                let Some(value) = record.field(c.key) else {
                    continue;
                };
                let raw = match value {
                    FieldValue::Text(s) => CellValue::Text(s.to_string()),
                    FieldValue::Count(n) => CellValue::Count(n),
                };
                row.insert(
                    format!("{namespace}-{}", c.key),
                    Cell {
                        raw,
                        display: render_cell(c, value),
                    },
                );
            }
        }
    }
}

/// Writes `<out_dir>/<name>.json` or `<out_dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct JsonDataWriter {
    out_dir: PathBuf,
    format: DataFormat,
    written: Vec<PathBuf>,
}

impl JsonDataWriter {
    pub fn new<P: AsRef<Path>>(out_dir: P, format: DataFormat) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            format,
            written: Vec::new(),
        }
    }

    /// Files produced so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_to(&self, path: &Path, data: &SampleMap) -> io::Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let mut w = BufWriter::new(File::create(path)?);
        match self.format {
            DataFormat::Json => {
                serde_json::to_writer_pretty(&mut w, data).map_err(io::Error::other)?;
                writeln!(w)?;
            }
            DataFormat::Tsv => write_tsv(&mut w, data)?,
        }
        w.flush()
    }
}

impl DataFileWriter for JsonDataWriter {
    fn write_data_file(&mut self, data: &SampleMap, name: &str) -> Result<(), ModuleError> {
        let ext = match self.format {
            DataFormat::Json => "json",
            DataFormat::Tsv => "txt",
        };
        let path = self.out_dir.join(format!("{name}.{ext}"));
        self.write_to(&path, data)
            .map_err(|source| ModuleError::DataFile {
                path: path.clone(),
                source,
            })?;
        self.written.push(path);
        Ok(())
    }
}

fn tsv_writer<W: Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::default()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(w)
}

/// One line of the parsed-data dump.
#[derive(Serialize)]
struct DataRow<'a> {
    #[serde(rename = "Sample")]
    sample: &'a str,
    result: &'a str,
    msg: &'a str,
    fastq_reads: u64,
    rfq_reads: u64,
    fastq_bases: u64,
    rfq_bases: u64,
}

impl<'a> DataRow<'a> {
    fn new(sample: &'a str, r: &'a RepaqRecord) -> Self {
        Self {
            sample,
            result: &r.result,
            msg: r.msg.as_deref().unwrap_or(""),
            fastq_reads: r.fastq_reads,
            rfq_reads: r.rfq_reads,
            fastq_bases: r.fastq_bases,
            rfq_bases: r.rfq_bases,
        }
    }
}

fn write_tsv<W: Write>(w: &mut W, data: &SampleMap) -> io::Result<()> {
    let mut wtr = tsv_writer(w);
    for (s_name, r) in data.iter() {
        wtr.serialize(DataRow::new(s_name, r))?;
    }
    wtr.flush()
}
