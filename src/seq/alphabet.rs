use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// IUPAC 核苷酸歧义码：R Y S W K M B D H V N
pub const NUCLEOTIDE_AMBIGUITY: &[u8] = b"RYSWKMBDHVN";
pub const DNA_BASES: &[u8] = b"ACGT";
pub const RNA_BASES: &[u8] = b"ACGU";
/// 20 种标准氨基酸
pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
/// IUPAC 扩展氨基酸码（Asx, Xle, Pyl, Sec, 任意, Glx）
pub const AMINO_ACID_EXTENDED: &[u8] = b"BJOUXZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alphabet {
    Dna,
    Rna,
    Protein,
    Unknown,
}

impl Alphabet {
    pub fn as_str(self) -> &'static str {
        match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
            Alphabet::Protein => "PROTEIN",
            Alphabet::Unknown => "UNKNOWN",
        }
    }

    /// DNA 或 RNA
    pub fn is_nucleotide(self) -> bool {
        matches!(self, Alphabet::Dna | Alphabet::Rna)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DNA" => Ok(Alphabet::Dna),
            "RNA" => Ok(Alphabet::Rna),
            "PROTEIN" => Ok(Alphabet::Protein),
            "UNKNOWN" => Ok(Alphabet::Unknown),
            other => Err(format!("unknown alphabet '{}'", other)),
        }
    }
}

#[inline]
pub fn is_dna(b: u8) -> bool {
    DNA_BASES.contains(&b) || NUCLEOTIDE_AMBIGUITY.contains(&b)
}

#[inline]
pub fn is_rna(b: u8) -> bool {
    RNA_BASES.contains(&b) || NUCLEOTIDE_AMBIGUITY.contains(&b)
}

#[inline]
pub fn is_protein(b: u8) -> bool {
    AMINO_ACIDS.contains(&b) || AMINO_ACID_EXTENDED.contains(&b)
}

/// 三种字母表的并集，用于构造时校验。
#[inline]
pub fn is_valid_symbol(c: char) -> bool {
    c.is_ascii() && {
        let b = c as u8;
        is_dna(b) || is_rna(b) || is_protein(b)
    }
}

/// 按 DNA → RNA → PROTEIN 的优先级判定字母表。输入应已是大写。
pub fn classify(seq: &str) -> Alphabet {
    let bytes = seq.as_bytes();
    if bytes.iter().all(|&b| is_dna(b)) {
        Alphabet::Dna
    } else if bytes.iter().all(|&b| is_rna(b)) {
        Alphabet::Rna
    } else if bytes.iter().all(|&b| is_protein(b)) {
        Alphabet::Protein
    } else {
        Alphabet::Unknown
    }
}
