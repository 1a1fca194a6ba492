use serde::{Deserialize, Serialize};

/// Keys a report must carry to be accepted.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "result",
    "fastq_reads",
    "rfq_reads",
    "fastq_bases",
    "rfq_bases",
];

/// One decoded repaq report. Unknown keys in the input are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaqRecord {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub fastq_reads: u64,
    pub rfq_reads: u64,
    pub fastq_bases: u64,
    pub rfq_bases: u64,
}

/// A cell value as seen by the table layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u64),
}

impl RepaqRecord {
    #[inline]
    pub fn passed(&self) -> bool {
        self.result == "passed"
    }

    /// Look a field up by its report key.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "result" => Some(FieldValue::Text(&self.result)),
            "msg" => self.msg.as_deref().map(FieldValue::Text),
            "fastq_reads" => Some(FieldValue::Count(self.fastq_reads)),
            "rfq_reads" => Some(FieldValue::Count(self.rfq_reads)),
            "fastq_bases" => Some(FieldValue::Count(self.fastq_bases)),
            "rfq_bases" => Some(FieldValue::Count(self.rfq_bases)),
            _ => None,
        }
    }
}
