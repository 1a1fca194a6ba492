use crate::clean::SampleNameCleaner;
use crate::locator::ReportFile;
use crate::logging::ModuleLog;
use crate::reader::decode_report;
use crate::record::RepaqRecord;

use indexmap::IndexMap;
use serde::Serialize;

/// Parsed reports keyed by sample name, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleMap {
    samples: IndexMap<String, RepaqRecord>,
}

impl SampleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; an existing entry for the same sample is replaced
    /// in place and returned.
    pub fn insert(&mut self, s_name: String, record: RepaqRecord) -> Option<RepaqRecord> {
        self.samples.insert(s_name, record)
    }

    pub fn get(&self, s_name: &str) -> Option<&RepaqRecord> {
        self.samples.get(s_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RepaqRecord)> {
        self.samples.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn sample_names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SampleMap {
    type Item = (&'a String, &'a RepaqRecord);
    type IntoIter = indexmap::map::Iter<'a, String, RepaqRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Decode every located file and gather the accepted ones.
///
/// Later files win when two resolve to the same sample name.
pub fn collect_samples<I>(
    files: I,
    cleaner: &dyn SampleNameCleaner,
    log: &mut ModuleLog,
) -> SampleMap
where
    I: IntoIterator<Item = ReportFile>,
{
    let mut samples = SampleMap::new();
    for f in files {
        let Some((s_name, record)) = decode_report(f, cleaner, log) else {
            continue;
        };
        let key = s_name.clone();
        if samples.insert(s_name, record).is_some() {
            log.debug(&format!("Duplicate sample name found! Overwriting: {key}"));
        }
    }
    samples
}
