//! 生物序列实体 [`Seq`] 及其分析操作。

pub mod alphabet;
pub mod orf;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{InvalidKind, Result, SeqError};
use crate::util::{codon, dna};

pub use alphabet::Alphabet;
pub use orf::{Orf, DEFAULT_MIN_ORF_LEN};

/// 一条经过规范化的序列：大写、不含空白、非空。
///
/// 相等性只比较 `sequence`，`header` 不参与。
#[derive(Debug, Clone, Eq)]
pub struct Seq {
    sequence: String,
    header: String,
}

impl Seq {
    /// 构造并校验字符集。
    pub fn new(raw: &str, header: impl Into<String>) -> Result<Self> {
        Self::with_validation(raw, header, true)
    }

    /// `validate == false` 时跳过字母表校验（仍会拒绝空序列）。
    pub fn with_validation(raw: &str, header: impl Into<String>, validate: bool) -> Result<Self> {
        let sequence = dna::normalize_seq(raw);
        if sequence.is_empty() {
            return Err(SeqError::invalid(InvalidKind::Empty, &sequence));
        }
        if validate {
            let bad: BTreeSet<char> = sequence
                .chars()
                .filter(|&c| !alphabet::is_valid_symbol(c))
                .collect();
            if !bad.is_empty() {
                return Err(SeqError::InvalidSequence {
                    kind: InvalidKind::InvalidCharacters,
                    sequence,
                    invalid_chars: bad.into_iter().collect(),
                });
            }
        }
        Ok(Self { sequence, header: header.into() })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// 字符数
    pub fn len(&self) -> usize {
        if self.sequence.is_ascii() {
            self.sequence.len()
        } else {
            self.sequence.chars().count()
        }
    }

    /// 构造保证非空，恒为 `false`。
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn alphabet_type(&self) -> Alphabet {
        alphabet::classify(&self.sequence)
    }

    /// 每个字符出现的次数。
    pub fn composition(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for c in self.sequence.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    /// GC 百分比，保留两位小数。仅 DNA / RNA。
    ///
    /// 只统计字面 G、C，歧义码计入分母。
    pub fn gc_content(&self) -> Result<f64> {
        let kind = self.alphabet_type();
        if !kind.is_nucleotide() {
            return Err(SeqError::wrong_alphabet("GC content", kind, &self.sequence));
        }
        let gc = dna::count_gc(self.sequence.as_bytes());
        let pct = 100.0 * gc as f64 / self.len() as f64;
        Ok((pct * 100.0).round() / 100.0)
    }

    /// 反向互补（IUPAC 配对）。仅 DNA。
    pub fn reverse_complement(&self) -> Result<Seq> {
        self.require_dna("reverse complement")?;
        let rc = dna::revcomp(self.sequence.as_bytes()).ok_or_else(|| {
            SeqError::wrong_alphabet("reverse complement", Alphabet::Unknown, &self.sequence)
        })?;
        Ok(Seq {
            sequence: String::from_utf8_lossy(&rc).into_owned(),
            header: annotate(&self.header, "(reverse complement)"),
        })
    }

    /// 按标准密码表翻译为蛋白质。仅 DNA，且长度须为 3 的倍数。
    ///
    /// 终止密码子输出 `*` 并继续翻译；结果不经过字母表校验。
    pub fn translate(&self) -> Result<Seq> {
        self.require_dna("translation")?;
        let len = self.len();
        if len % 3 != 0 {
            return Err(SeqError::invalid(InvalidKind::InvalidLength { len }, &self.sequence));
        }
        let protein = codon::translate(self.sequence.as_bytes());
        Ok(Seq {
            sequence: String::from_utf8_lossy(&protein).into_owned(),
            header: annotate(&self.header, "(translated)"),
        })
    }

    /// 正链三个阅读框的 ORF，长度 >= `min_length`。仅 DNA。
    pub fn find_orfs(&self, min_length: usize) -> Result<Vec<Orf>> {
        self.require_dna("ORF search")?;
        Ok(orf::scan_orfs(self.sequence.as_bytes(), min_length))
    }

    /// 使用 [`DEFAULT_MIN_ORF_LEN`]。
    pub fn find_orfs_default(&self) -> Result<Vec<Orf>> {
        self.find_orfs(DEFAULT_MIN_ORF_LEN)
    }

    /// 截取 [start, end)，`end` 超出长度时截断到序列末尾。
    ///
    /// 区间为空（`start >= len` 或 `start >= end`）时返回 `None`。
    /// 新的 header 带有实际区间标记 `[start:end]`。
    pub fn subsequence(&self, start: usize, end: usize) -> Option<Seq> {
        let end = end.min(self.len());
        if start >= end {
            return None;
        }
        let sequence: String = if self.sequence.is_ascii() {
            self.sequence[start..end].to_string()
        } else {
            self.sequence.chars().skip(start).take(end - start).collect()
        };
        Some(Seq {
            sequence,
            header: annotate(&self.header, &format!("[{}:{}]", start, end)),
        })
    }

    fn require_dna(&self, operation: &'static str) -> Result<()> {
        match self.alphabet_type() {
            Alphabet::Dna => Ok(()),
            other => Err(SeqError::wrong_alphabet(operation, other, &self.sequence)),
        }
    }
}

fn annotate(header: &str, marker: &str) -> String {
    if header.is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", header, marker)
    }
}

impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Hash for Seq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

/// FASTA 规范形式：`>header` 换行后接完整序列（不折行、无结尾换行）。
impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.sequence)
    }
}

impl FromStr for Seq {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        Seq::new(s, "")
    }
}
