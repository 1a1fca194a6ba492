//! Column metadata for the two repaq tables.
//!
//! Everything here is static description; interpretation (formatting,
//! value mapping, colouring) is up to the table layer.

/// Colour scale hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    RdYlGn,
    Blues,
    Greens,
}

impl ColorScale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RdYlGn => "RdYlGn",
            Self::Blues => "Blues",
            Self::Greens => "Greens",
        }
    }
}

/// How a cell value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// As-is.
    Text,
    /// Whole number with `,` thousands separators (`{:,.0f}`).
    Thousands,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub scale: Option<ColorScale>,
    pub format: NumberFormat,
    /// Columns from different modules with the same shared key use one scale.
    pub shared_key: Option<&'static str>,
    /// Maps a raw enumerated value to its display label.
    pub value_map: Option<fn(&str) -> &'static str>,
}

impl ColumnDef {
    const fn new(key: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            key,
            title,
            description,
            scale: None,
            format: NumberFormat::Text,
            shared_key: None,
            value_map: None,
        }
    }

    const fn scale(mut self, scale: ColorScale) -> Self {
        self.scale = Some(scale);
        self
    }

    const fn thousands(mut self) -> Self {
        self.format = NumberFormat::Thousands;
        self
    }

    const fn shared(mut self, key: &'static str) -> Self {
        self.shared_key = Some(key);
        self
    }

    const fn mapped(mut self, f: fn(&str) -> &'static str) -> Self {
        self.value_map = Some(f);
        self
    }
}

/// Identity and labels of the detailed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub namespace: &'static str,
    pub id: &'static str,
    pub title: &'static str,
    pub col1_header: &'static str,
}

/// `passed` is the only status repaq uses for success.
pub fn pass_fail(status: &str) -> &'static str {
    if status == "passed" { "PASS" } else { "FAIL" }
}

pub fn general_stats_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("result", "Result", "Compression result status")
            .scale(ColorScale::RdYlGn)
            .mapped(pass_fail),
        ColumnDef::new("fastq_reads", "Reads", "Number of reads in input FASTQ")
            .scale(ColorScale::Blues)
            .thousands()
            .shared("read_count"),
        ColumnDef::new("fastq_bases", "Bases", "Number of bases in input FASTQ")
            .scale(ColorScale::Greens)
            .thousands()
            .shared("base_count"),
    ]
}

pub fn detailed_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("result", "Result", "Compression result status").scale(ColorScale::RdYlGn),
        ColumnDef::new("msg", "Message", "Status message"),
        ColumnDef::new("fastq_reads", "Input Reads", "Number of reads in input FASTQ file")
            .scale(ColorScale::Blues)
            .thousands(),
        ColumnDef::new("rfq_reads", "Output Reads", "Number of reads in output RFQ file")
            .scale(ColorScale::Blues)
            .thousands(),
        ColumnDef::new("fastq_bases", "Input Bases", "Number of bases in input FASTQ file")
            .scale(ColorScale::Greens)
            .thousands(),
        ColumnDef::new("rfq_bases", "Output Bases", "Number of bases in output RFQ file")
            .scale(ColorScale::Greens)
            .thousands(),
    ]
}

pub fn stats_table_config() -> TableConfig {
    TableConfig {
        namespace: "repaq",
        id: "repaq_stats_table",
        title: "repaq: Summary Statistics",
        col1_header: "Sample Name",
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
