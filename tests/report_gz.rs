use repaq_qc_summary::{FsLocator, ReportLocator, SearchPattern, parse_record};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[cfg(feature = "gzip")]
#[test]
fn gzip_report_is_found_and_parsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.json.gz");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        write!(
            enc,
            r#"{{"result":"passed","fastq_reads":3,"rfq_reads":3,"fastq_bases":300,"rfq_bases":250}}"#
        )
        .unwrap();
        enc.finish().unwrap();
    }

    let search = SearchPattern {
        fn_glob: "*.json*".to_string(),
        ..Default::default()
    };
    let files = FsLocator::new([dir.path()], search)
        .find_log_files("repaq")
        .unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename(), "sample.json.gz");

    let file = files.into_iter().next().unwrap();
    let rec = parse_record(file.reader).unwrap();
    assert_eq!(rec.rfq_bases, 250);
}

#[test]
fn oversized_report_is_skipped() {
    let dir = tempdir().unwrap();
    let body = format!(
        r#"{{"result":"passed","fastq_reads":1,"rfq_reads":1,"fastq_bases":1,"rfq_bases":1,"pad":"{}"}}"#,
        "x".repeat(4096)
    );
    fs::write(dir.path().join("big.json"), body).unwrap();

    let search = SearchPattern {
        max_filesize: 1024,
        ..Default::default()
    };
    let files = FsLocator::new([dir.path()], search)
        .find_log_files("repaq")
        .unwrap();
    assert!(files.is_empty());
}

const SMALL: &str =
    r#"{"result":"passed","fastq_reads":1,"rfq_reads":1,"fastq_bases":1,"rfq_bases":1}"#;

#[test]
fn unlimited_filesize_reads_reports() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("s.json"), SMALL).unwrap();

    let search = SearchPattern {
        max_filesize: u64::MAX,
        ..Default::default()
    };
    let files = FsLocator::new([dir.path()], search)
        .find_log_files("repaq")
        .unwrap();
    assert_eq!(files.len(), 1);
    let file = files.into_iter().next().unwrap();
    assert_eq!(parse_record(file.reader).unwrap().fastq_bases, 1);
}

#[test]
fn zero_filesize_limit_skips_everything() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("s.json"), SMALL).unwrap();
    fs::write(dir.path().join("empty.json"), "").unwrap();

    let search = SearchPattern {
        max_filesize: 0,
        contents: None,
        ..Default::default()
    };
    let files = FsLocator::new([dir.path()], search)
        .find_log_files("repaq")
        .unwrap();
    // only the empty file fits in a zero-byte limit
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename(), "empty.json");
}
