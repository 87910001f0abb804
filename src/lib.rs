//! # fasta-parser
//!
//! FASTA 解析与生物序列分析。
//!
//! 本 crate 提供：
//!
//! - **序列实体**：[`Seq`]，规范化（大写、去空白）并校验字符集
//! - **字母表识别**：DNA / RNA / PROTEIN / UNKNOWN，支持 IUPAC 歧义码
//! - **序列分析**：组成、GC 含量、反向互补、翻译、ORF 查找
//! - **流式解析**：逐条产出记录的 FASTA 状态机解析器
//! - **查询与汇总**：按 ID 查找、过滤、分组、统计、子序列截取、过滤后写出
//!
//! ## 快速示例
//!
//! ```rust
//! use fasta_parser::{Alphabet, Seq};
//!
//! # fn main() -> fasta_parser::Result<()> {
//! let seq = Seq::new("ATGAAATTTGGATAA", "coding")?;
//! assert_eq!(seq.alphabet_type(), Alphabet::Dna);
//! assert_eq!(seq.translate()?.sequence(), "MKFG*");
//!
//! let orfs = seq.find_orfs(12)?;
//! assert_eq!((orfs[0].start, orfs[0].end, orfs[0].frame), (0, 15, 1));
//!
//! let records: Vec<Seq> = fasta_parser::io::fasta::parse_str(">a\nACGT\n>b\nMKFG\n")
//!     .collect::<fasta_parser::Result<_>>()?;
//! assert_eq!(records.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## 模块说明
//!
//! - [`seq`] — 序列实体、字母表识别、ORF
//! - [`io`] — FASTA 流式解析、格式检查、基于文件的查询层 [`FastaReader`]
//! - [`util`] — IUPAC 互补、标准密码表
//! - [`error`] — 错误类型

pub mod error;
pub mod io;
pub mod seq;
pub mod util;

pub use error::{InvalidKind, Result, SeqError};
pub use io::fasta::{is_fasta_format, FastaParser};
pub use io::reader::{FastaReader, FileStats};
pub use seq::{Alphabet, Orf, Seq, DEFAULT_MIN_ORF_LEN};
