use repaq_qc_summary::{DefaultCleaner, ModuleLog, ReportFile, collect_samples};

fn report(result: &str, reads: u64) -> String {
    format!(
        r#"{{"result":"{result}","msg":"","fastq_reads":{reads},"rfq_reads":{reads},"fastq_bases":{b},"rfq_bases":{b}}}"#,
        b = reads * 50
    )
}

#[test]
fn duplicate_sample_keeps_last_file() {
    let files = vec![
        ReportFile::from_bytes("s1.json", report("passed", 10)),
        ReportFile::from_bytes("s1.json.gz", report("failed", 20)),
    ];
    let mut log = ModuleLog::new("repaq");
    let samples = collect_samples(files, &DefaultCleaner::default(), &mut log);

    assert_eq!(samples.len(), 1);
    let rec = samples.get("s1").unwrap();
    assert_eq!(rec.result, "failed");
    assert_eq!(rec.fastq_reads, 20);
    assert_eq!(log.warnings(), 0);
    assert_eq!(log.debugs(), 1);
}

#[test]
fn rejected_files_do_not_count() {
    let files = vec![
        ReportFile::from_bytes("a.json", report("passed", 1)),
        ReportFile::from_bytes("b.json", "nope"),
        ReportFile::from_bytes("c.json", r#"{"result":"failed","fastq_reads":10}"#),
        ReportFile::from_bytes("d.json", report("passed", 2)),
    ];
    let mut log = ModuleLog::new("repaq");
    let samples = collect_samples(files, &DefaultCleaner::default(), &mut log);

    assert_eq!(samples.len(), 2);
    assert_eq!(samples.sample_names().collect::<Vec<_>>(), vec!["a", "d"]);
    assert!(samples.get("c").is_none());
    assert_eq!(log.warnings(), 2);
    assert_eq!(log.debugs(), 0);
}

#[test]
fn overwrite_keeps_first_seen_position() {
    let files = vec![
        ReportFile::from_bytes("x.json", report("passed", 1)),
        ReportFile::from_bytes("y.json", report("passed", 2)),
        ReportFile::from_bytes("x.json", report("passed", 3)),
    ];
    let mut log = ModuleLog::new("repaq");
    let samples = collect_samples(files, &DefaultCleaner::default(), &mut log);

    let order: Vec<(&str, u64)> = samples.iter().map(|(k, v)| (k, v.fastq_reads)).collect();
    assert_eq!(order, vec![("x", 3), ("y", 2)]);
    assert_eq!(log.debugs(), 1);
}

#[test]
fn no_valid_files_gives_empty_map() {
    let files = vec![ReportFile::from_bytes("a.json", "[]")];
    let mut log = ModuleLog::new("repaq");
    let samples = collect_samples(files, &DefaultCleaner::default(), &mut log);
    assert!(samples.is_empty());
    assert_eq!(log.warnings(), 1);
}
