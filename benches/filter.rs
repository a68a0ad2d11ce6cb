/* std use */
use std::io::Write;

/* crate use */
use rand::Rng;
use rand::SeedableRng;

/* utils function */
fn generate_fastq(seed: u64, nb_seq: usize, length: usize) -> tempfile::NamedTempFile {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut file = tempfile::NamedTempFile::new().unwrap();

    let dna = [b'A', b'C', b'T', b'G'];
    let qual = (0..94).collect::<Vec<u8>>();

    for i in 0..nb_seq {
        let dna_seq = (0..length)
            .map(|_| dna[rng.gen_range(0..4)] as char)
            .collect::<String>();
        let qual_seq = (0..length)
            .map(|_| (qual[rng.gen_range(0..94)] + 33) as char)
            .collect::<String>();

        writeln!(file, "@{}\n{}\n+{}\n{}", i, dna_seq, i, qual_seq).unwrap();
    }

    file
}

fn generate_report(nb_query: usize) -> String {
    let mut report = String::new();

    for i in 0..nb_query {
        report.push_str(&format!(
            "Query #{i}: query_{i} Length: 150\n\nSequences producing significant alignments:\n\
             Description                      Max    E\n\
             hypothetical protein {i}          230    1e-70\n\
             other protein {i}                 200    1e-60\n\n\
             >hypothetical protein {i}\nSequence ID: XP_{i} Length: 150\nRange 1: 1 to 150\n\n"
        ));
    }

    report
}

fn filter(c: &mut criterion::Criterion) {
    let file = generate_fastq(42, 10_000, 150);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("filtered.fastq");

    let mut g = c.benchmark_group("filter");

    g.throughput(criterion::Throughput::Bytes(
        file.path().metadata().unwrap().len(),
    ));

    for threshold in [0.0, 30.0, 47.0] {
        let params = bio_files_tools::FilterParams {
            gc_bounds: bio_files_tools::Bounds::Range(40.0, 60.0),
            quality_threshold: threshold,
            ..Default::default()
        };

        g.bench_with_input(
            criterion::BenchmarkId::new("filter_fastq", threshold),
            &params,
            |b, params| {
                b.iter(|| {
                    criterion::black_box(
                        bio_files_tools::filter_fastq(file.path(), &output, params).unwrap(),
                    )
                })
            },
        );
    }
}

fn blast(c: &mut criterion::Criterion) {
    let mut g = c.benchmark_group("blast");

    for nb_query in [10, 1_000, 100_000] {
        let report = generate_report(nb_query);

        g.throughput(criterion::Throughput::Bytes(report.len() as u64));
        g.bench_with_input(
            criterion::BenchmarkId::new("parse_str", nb_query),
            &report,
            |b, report| b.iter(|| criterion::black_box(bio_files_tools::blast::parse_str(report))),
        );
    }
}

fn setup(c: &mut criterion::Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    filter(c);
    blast(c);
}

criterion::criterion_group!(benches, setup);

criterion::criterion_main!(benches);
