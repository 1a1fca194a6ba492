use criterion::{Criterion, criterion_group, criterion_main};
use repaq_qc_summary::{DefaultCleaner, ModuleLog, ReportFile, collect_samples};

fn bench_parse(c: &mut Criterion) {
    let reports: Vec<(String, String)> = (0..2000)
        .map(|i| {
            (
                format!("sample{i}.rfq.json"),
                format!(
                    r#"{{"result":"passed","msg":"","fastq_reads":{i},"rfq_reads":{i},"fastq_bases":{b},"rfq_bases":{b}}}"#,
                    b = i * 150
                ),
            )
        })
        .collect();
    let cleaner = DefaultCleaner::default();

    c.bench_function("collect_2000_reports", |b| {
        b.iter(|| {
            let files = reports
                .iter()
                .map(|(name, body)| ReportFile::from_bytes(name.clone(), body.clone()));
            let mut log = ModuleLog::new("repaq");
            collect_samples(files, &cleaner, &mut log).len()
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
