use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("bio_files_tools").unwrap()
}

#[test]
fn fasta_oneline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seqs.fasta");
    std::fs::write(&input, ">seq1\nACGT\nACGT\n>seq2\nTTTT\n").unwrap();

    cmd()
        .arg("fasta-oneline")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("seqs_oneline.fasta"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("seqs_oneline.fasta")).unwrap(),
        ">seq1\nACGTACGT\n>seq2\nTTTT\n"
    );
}

#[test]
fn blast_best_hits() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("hits.txt");
    std::fs::write(
        &input,
        "Query #1: q1\n\nSequences producing significant alignments:\nDescription  Scientific Name  Max Score\nzinc finger protein  Homo sapiens  120\nother  x  1\n\n>zinc finger protein\n\nQuery #2: q2\n\nSequences producing significant alignments:\n\nActin  Mus musculus  300\n",
    )
    .unwrap();

    cmd()
        .args(["blast-best-hits", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Actin\nzinc finger protein\n"
    );

    cmd()
        .args(["blast-best-hits", "--stdout"])
        .arg(&input)
        .assert()
        .success()
        .stdout("zinc finger protein\nActin\n");
}

#[test]
fn filter_fastq() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reads.fastq");
    let output = dir.path().join("out").join("filtered.fastq");
    std::fs::write(
        &input,
        "@keep\nACGT\n+\nIIII\n@low\nACGT\n+\n####\n@gc\nGGGG\n+\nIIII\n",
    )
    .unwrap();

    cmd()
        .arg("filter-fastq")
        .arg(&input)
        .arg(&output)
        .args(["--gc-bounds", "20,80", "--quality-threshold", "30"])
        .assert()
        .success()
        .stdout(contains("1\t"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "@keep\nACGT\n+\nIIII\n"
    );
}

#[test]
fn filter_fastq_strict() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reads.fastq");
    std::fs::write(&input, "@keep\nACGT\n+\nIIII\n@cut\nACGT\n").unwrap();

    cmd()
        .arg("filter-fastq")
        .arg(&input)
        .arg(dir.path().join("filtered.fastq"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("MalformedRecord"));
}

#[test]
fn dna_rna() {
    cmd()
        .args(["dna-rna", "reverse_complement", "ATG", "aaT"])
        .assert()
        .success()
        .stdout("CAT\nAtt\n");

    cmd()
        .args(["dna-rna", "transcribe", "AUG"])
        .assert()
        .failure();

    cmd()
        .args(["dna-rna", "translate", "ATG"])
        .assert()
        .failure()
        .stderr(contains("Unknown operation"));
}

#[test]
fn missing_input() {
    cmd()
        .args(["fasta-oneline", "does/not/exist.fasta"])
        .assert()
        .failure();
}
