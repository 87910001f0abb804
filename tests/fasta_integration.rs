//! 集成测试：读取、查询并重新写出 FASTA 文件

use std::io::Write;

use fasta_parser::{Alphabet, FastaReader, Seq, SeqError};
use tempfile::{NamedTempFile, TempDir};

const SAMPLE: &str = "\
>seq1 Homo sapiens DNA sequence
ATGCGTACGTAGCTAACGTACGTACGTACGTACGTACGTACGTACGTACG
TACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTA
CGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACG

>seq2 Mus musculus protein sequence
MKFGSTOPQWERTYUIOPASDFGHJKLZXCVBNMQWERTYUIOPASDFGH
JKLZXCVBNMQWERTYUIOPASDFGHJKLZXCVBNM

>seq3 E. coli RNA sequence
AUGCGUACGUAGCUAACGUACGUACGUACGUACGUACGUACGUACGUACG
UACGUACGUACGUACGUACGUACGUACGUACGUACGUACGUACGUACGUA

>seq4 Short DNA fragment
ATGCGTACGTAGCTA

>seq5 Another protein example
ACDEFGHIKLMNPQRSTVWYACDEFGHIKLMNPQRSTVWYACDEFGHIKL
MNPQRSTVWYACDEFGHIKLMNPQRSTVWY
";

fn sample_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(SAMPLE.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn test_sample_file_stats() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let stats = reader.file_stats().unwrap();

    assert_eq!(stats.sequence_count, 5);
    assert_eq!(stats.min_length, 15);
    assert_eq!(stats.max_length, 150);
    assert_eq!(stats.total_length, 150 + 86 + 100 + 15 + 80);
    assert_eq!(stats.alphabet_types[&Alphabet::Dna], 2);
    assert_eq!(stats.alphabet_types[&Alphabet::Rna], 1);
    assert_eq!(stats.alphabet_types[&Alphabet::Protein], 2);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["alphabet_types"]["PROTEIN"], 2);
}

#[test]
fn test_iteration_is_repeatable() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let first: Vec<String> = reader.iter().map(|r| r.unwrap().header().to_string()).collect();
    let second: Vec<String> = reader.iter().map(|r| r.unwrap().header().to_string()).collect();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    assert!(first[0].starts_with("seq1"));
    assert!(first[4].starts_with("seq5"));
}

#[test]
fn test_early_termination_then_restart() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let first = reader.iter().next().unwrap().unwrap();
    assert!(first.header().starts_with("seq1"));
    assert_eq!(reader.sequence_count().unwrap(), 5);
}

#[test]
fn test_lookup_and_grouping() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();

    let found = reader.sequence_by_id("seq3").unwrap().unwrap();
    assert_eq!(found.alphabet_type(), Alphabet::Rna);
    assert!(reader.sequence_by_id("seq9").unwrap().is_none());

    let groups = reader.group_by_type().unwrap();
    let dna: Vec<&str> = groups[&Alphabet::Dna].iter().map(Seq::header).collect();
    assert_eq!(dna, ["seq1 Homo sapiens DNA sequence", "seq4 Short DNA fragment"]);
}

#[test]
fn test_write_dna_only_round_trip() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("dna_only.fasta");

    let n = reader.write_filtered_fasta(&out, |s| s.alphabet_type() == Alphabet::Dna).unwrap();
    assert_eq!(n, 2);

    let text = std::fs::read_to_string(&out).unwrap();
    // 每条记录两行：header + 不折行的序列
    assert_eq!(text.lines().count(), 4);

    let written: Vec<Seq> = FastaReader::open(&out).unwrap().iter().map(Result::unwrap).collect();
    let expected: Vec<Seq> = reader
        .sequences_by_type(Alphabet::Dna)
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(written, expected);
    for (w, e) in written.iter().zip(&expected) {
        assert_eq!(w.header(), e.header());
    }
}

#[test]
fn test_write_to_unwritable_destination_is_io_error() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing_dir").join("out.fasta");
    assert!(matches!(reader.write_filtered_fasta(&out, |_| true), Err(SeqError::Io(_))));
}

#[test]
fn test_analysis_pipeline_on_parsed_records() {
    let f = sample_file();
    let reader = FastaReader::open(f.path()).unwrap();
    let short = reader.sequence_by_id("seq4").unwrap().unwrap();

    assert_eq!(short.len(), 15);
    assert_eq!(short.translate().unwrap().sequence(), "MRT*L");
    let rc = short.reverse_complement().unwrap();
    assert_eq!(rc.sequence(), "TAGCTACGTACGCAT");
    assert_eq!(rc.reverse_complement().unwrap(), short);
}

#[test]
fn test_not_fasta_and_empty_files() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"This is not a FASTA file").unwrap();
    f.flush().unwrap();
    assert!(matches!(FastaReader::open(f.path()), Err(SeqError::FastaFormat { .. })));

    let empty = NamedTempFile::new().unwrap();
    assert!(matches!(FastaReader::open(empty.path()), Err(SeqError::FastaFormat { .. })));
}
