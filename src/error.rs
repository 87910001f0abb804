//! 错误类型。
//!
//! - [`SeqError::InvalidSequence`]：序列构造失败，或操作的前置条件（字母表、长度）不满足
//! - [`SeqError::FastaFormat`]：输入不符合 FASTA 格式
//! - [`SeqError::Io`]：底层 I/O 错误，原样透出

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeqError>;

/// `InvalidSequence` 的具体原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidKind {
    /// 去除空白后为空
    Empty,
    /// 含有三种字母表之外的字符
    InvalidCharacters,
    /// 操作要求特定字母表，例如 GC 含量只对 DNA / RNA 有意义
    WrongAlphabet {
        operation: &'static str,
        found: String,
    },
    /// 翻译要求长度是 3 的倍数
    InvalidLength { len: usize },
}

impl fmt::Display for InvalidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKind::Empty => write!(f, "sequence is empty"),
            InvalidKind::InvalidCharacters => write!(f, "sequence contains invalid characters"),
            InvalidKind::WrongAlphabet { operation, found } => {
                write!(f, "{} is not defined for {} sequences", operation, found)
            }
            InvalidKind::InvalidLength { len } => {
                write!(f, "length {} is not a multiple of 3", len)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SeqError {
    #[error("invalid sequence: {kind}{}", format_chars(.invalid_chars))]
    InvalidSequence {
        kind: InvalidKind,
        /// 出错的（已规范化的）序列文本
        sequence: String,
        /// 非法字符，已排序去重；与字符无关的错误为空
        invalid_chars: Vec<char>,
    },

    #[error("FASTA format error{}: {message}", format_line(.line))]
    FastaFormat {
        message: String,
        /// 1-based 行号
        line: Option<usize>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SeqError {
    pub(crate) fn invalid(kind: InvalidKind, sequence: &str) -> Self {
        SeqError::InvalidSequence {
            kind,
            sequence: sequence.to_string(),
            invalid_chars: Vec::new(),
        }
    }

    pub(crate) fn wrong_alphabet(
        operation: &'static str,
        found: impl fmt::Display,
        sequence: &str,
    ) -> Self {
        Self::invalid(
            InvalidKind::WrongAlphabet { operation, found: found.to_string() },
            sequence,
        )
    }

    pub(crate) fn format(message: impl Into<String>, line: Option<usize>) -> Self {
        SeqError::FastaFormat { message: message.into(), line }
    }

    /// 若为 `InvalidSequence`，返回其原因。
    pub fn invalid_kind(&self) -> Option<&InvalidKind> {
        match self {
            SeqError::InvalidSequence { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

fn format_chars(chars: &[char]) -> String {
    if chars.is_empty() {
        return String::new();
    }
    let list: Vec<String> = chars.iter().map(|c| format!("{:?}", c)).collect();
    format!(" [{}]", list.join(", "))
}

fn format_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sequence_message_lists_chars() {
        let e = SeqError::InvalidSequence {
            kind: InvalidKind::InvalidCharacters,
            sequence: "ATG1".to_string(),
            invalid_chars: vec!['1', '2'],
        };
        let msg = e.to_string();
        assert!(msg.contains("invalid characters"));
        assert!(msg.contains("'1', '2'"));
    }

    #[test]
    fn format_error_with_and_without_line() {
        let with_line = SeqError::format("missing header", Some(3));
        assert_eq!(with_line.to_string(), "FASTA format error at line 3: missing header");
        let without = SeqError::format("missing header", None);
        assert_eq!(without.to_string(), "FASTA format error: missing header");
    }

    #[test]
    fn io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e = SeqError::from(io);
        assert_eq!(e.to_string(), "no such file");
        assert!(
            matches!(e, SeqError::Io(ref inner) if inner.kind() == std::io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn invalid_kind_accessor() {
        let e = SeqError::invalid(InvalidKind::InvalidLength { len: 5 }, "ATGAA");
        assert_eq!(e.invalid_kind(), Some(&InvalidKind::InvalidLength { len: 5 }));
        assert!(SeqError::format("x", None).invalid_kind().is_none());
    }
}
