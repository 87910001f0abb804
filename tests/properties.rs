use fasta_parser::io::fasta::{parse_str, write_record};
use fasta_parser::{Alphabet, Seq};
use proptest::prelude::*;

fn acgt(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T']), 1..max)
        .prop_map(|v| v.into_iter().collect())
}

fn iupac_dna(max: usize) -> impl Strategy<Value = String> {
    let letters: Vec<char> = "ACGTRYSWKMBDHVN".chars().collect();
    proptest::collection::vec(prop::sample::select(letters), 1..max)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn reverse_complement_is_an_involution(s in iupac_dna(200)) {
        let seq = Seq::new(&s, "p").unwrap();
        let back = seq.reverse_complement().unwrap().reverse_complement().unwrap();
        prop_assert_eq!(back.sequence(), seq.sequence());
    }

    #[test]
    fn composition_sums_to_length(s in acgt(300)) {
        let seq = Seq::new(&s, "").unwrap();
        let total: usize = seq.composition().values().sum();
        prop_assert_eq!(total, seq.len());
    }

    #[test]
    fn gc_content_is_a_percentage(s in acgt(300)) {
        let gc = Seq::new(&s, "").unwrap().gc_content().unwrap();
        prop_assert!((0.0..=100.0).contains(&gc));
    }

    #[test]
    fn translation_length_is_a_third(s in acgt(300)) {
        let trimmed = &s[..s.len() - s.len() % 3];
        prop_assume!(!trimmed.is_empty());
        let protein = Seq::new(trimmed, "").unwrap().translate().unwrap();
        prop_assert_eq!(protein.len(), trimmed.len() / 3);
    }

    #[test]
    fn orfs_are_in_bounds_and_well_formed(s in acgt(400)) {
        let seq = Seq::new(&s, "").unwrap();
        let orfs = seq.find_orfs(0).unwrap();
        for o in &orfs {
            prop_assert!(o.end <= seq.len());
            prop_assert_eq!(o.len() % 3, 0);
            prop_assert_eq!(o.start % 3, (o.frame - 1) as usize);
            prop_assert!(o.sequence.starts_with("ATG"));
            prop_assert_eq!(&seq.sequence()[o.start..o.end], o.sequence.as_str());
        }
        let keys: Vec<(u8, usize)> = orfs.iter().map(|o| (o.frame, o.start)).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn canonical_text_round_trips(s in acgt(200), header in "[a-zA-Z0-9_ ]{0,20}") {
        let seq = Seq::new(&s, header.trim()).unwrap();
        let mut out = Vec::new();
        write_record(&mut out, &seq).unwrap();
        let text = String::from_utf8(out).unwrap();
        let back: Vec<Seq> = parse_str(&text).collect::<fasta_parser::Result<_>>().unwrap();
        prop_assert_eq!(back.len(), 1);
        prop_assert_eq!(&back[0], &seq);
        prop_assert_eq!(back[0].alphabet_type(), Alphabet::Dna);
    }
}
