use crate::clean::SampleNameCleaner;
use crate::error::ParseError;
use crate::locator::ReportFile;
use crate::logging::ModuleLog;
use crate::record::{REQUIRED_FIELDS, RepaqRecord};

use serde_json::{Map, Value};
use std::io::Read;

/// Decode and validate one repaq JSON report.
///
/// The top-level value must be an object carrying every key in
/// [`REQUIRED_FIELDS`]; all missing keys are reported at once. Extra keys are
/// ignored.
pub fn parse_record<R: Read>(mut reader: R) -> Result<RepaqRecord, ParseError> {
    let mut buf = Vec::with_capacity(1024);
    reader.read_to_end(&mut buf).map_err(ParseError::io_err)?;
    let value: Value = serde_json::from_slice(&buf).map_err(ParseError::json_err)?;

    let Value::Object(map) = value else {
        return Err(ParseError::NotAnObject);
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingFields { missing });
    }

    record_from_map(map)
}

fn record_from_map(mut map: Map<String, Value>) -> Result<RepaqRecord, ParseError> {
    let msg = match map.remove("msg") {
        None | Some(Value::Null) => None,
        Some(v) => Some(take_field::<String>("msg", v)?),
    };
    Ok(RepaqRecord {
        result: take_field("result", map.remove("result").unwrap_or_default())?,
        msg,
        fastq_reads: take_field("fastq_reads", map.remove("fastq_reads").unwrap_or_default())?,
        rfq_reads: take_field("rfq_reads", map.remove("rfq_reads").unwrap_or_default())?,
        fastq_bases: take_field("fastq_bases", map.remove("fastq_bases").unwrap_or_default())?,
        rfq_bases: take_field("rfq_bases", map.remove("rfq_bases").unwrap_or_default())?,
    })
}

fn take_field<T: serde::de::DeserializeOwned>(
    field: &'static str,
    value: Value,
) -> Result<T, ParseError> {
    serde_json::from_value(value).map_err(|source| ParseError::InvalidField { field, source })
}

/// Decode one located report into `(sample_name, record)`.
///
/// Failures are logged as a single warning naming the file and yield `None`;
/// the caller just moves on to the next file.
pub fn decode_report(
    file: ReportFile,
    cleaner: &dyn SampleNameCleaner,
    log: &mut ModuleLog,
) -> Option<(String, RepaqRecord)> {
    let ReportFile { ctx, reader } = file;
    match parse_record(reader) {
        Ok(record) => {
            let s_name = cleaner.clean_s_name(&ctx.filename, &ctx);
            Some((s_name, record))
        }
        Err(err @ ParseError::MissingFields { .. }) => {
            log.warn(&format!(
                "Missing required fields in repaq JSON: {} ({err})",
                ctx.filename
            ));
            None
        }
        Err(err) => {
            log.warn(&format!(
                "Could not parse repaq JSON: {} ({err})",
                ctx.filename
            ));
            None
        }
    }
}
