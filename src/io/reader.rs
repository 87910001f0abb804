use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SeqError};
use crate::io::fasta::{self, FastaParser};
use crate::seq::{Alphabet, Seq};

pub type FileRecords = FastaParser<BufReader<File>>;

/// 整个文件的汇总统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    pub sequence_count: usize,
    pub total_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub average_length: f64,
    pub alphabet_types: BTreeMap<Alphabet, usize>,
}

/// 基于文件路径的 FASTA 读取器。
///
/// 每次遍历都会重新打开文件，因此可以反复迭代；各查询方法各自完整读一遍文件。
#[derive(Debug, Clone)]
pub struct FastaReader {
    path: PathBuf,
    validate: bool,
}

impl FastaReader {
    /// 打开并检查格式。文件不可读时返回 I/O 错误，首条非空行不是 header 时返回 `FastaFormat`。
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let fh = File::open(&path)?;
        if !fasta::is_fasta_format(BufReader::new(fh))? {
            return Err(SeqError::format(
                format!("'{}' does not start with a '>' header line", path.display()),
                None,
            ));
        }
        debug!(path = %path.display(), "opened FASTA file");
        Ok(Self { path, validate: true })
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_fasta_format(&self) -> Result<bool> {
        let fh = File::open(&self.path)?;
        fasta::is_fasta_format(BufReader::new(fh))
    }

    /// 从头开始新的一遍解析。
    pub fn read_sequences(&self) -> Result<FileRecords> {
        let fh = File::open(&self.path)?;
        Ok(FastaParser::new(BufReader::new(fh)).with_validation(self.validate))
    }

    pub fn iter(&self) -> Records {
        match self.read_sequences() {
            Ok(parser) => Records { parser: Some(parser), open_err: None },
            Err(e) => Records { parser: None, open_err: Some(e) },
        }
    }

    pub fn sequence_count(&self) -> Result<usize> {
        let mut n = 0usize;
        for rec in self.read_sequences()? {
            rec?;
            n += 1;
        }
        Ok(n)
    }

    pub fn file_stats(&self) -> Result<FileStats> {
        let mut count = 0usize;
        let mut total = 0usize;
        let mut min_len = usize::MAX;
        let mut max_len = 0usize;
        let mut types: BTreeMap<Alphabet, usize> = BTreeMap::new();

        for rec in self.read_sequences()? {
            let rec = rec?;
            let len = rec.len();
            count += 1;
            total += len;
            min_len = min_len.min(len);
            max_len = max_len.max(len);
            *types.entry(rec.alphabet_type()).or_insert(0) += 1;
        }

        if count == 0 {
            min_len = 0;
        }
        let average_length = if count == 0 { 0.0 } else { total as f64 / count as f64 };
        debug!(count, total, "computed file stats");

        Ok(FileStats {
            sequence_count: count,
            total_length: total,
            min_length: min_len,
            max_length: max_len,
            average_length: (average_length * 100.0).round() / 100.0,
            alphabet_types: types,
        })
    }

    /// header 中包含 `token`（区分大小写）的第一条记录；找不到时返回 `Ok(None)`。
    pub fn sequence_by_id(&self, token: &str) -> Result<Option<Seq>> {
        for rec in self.read_sequences()? {
            let rec = rec?;
            if rec.header().contains(token) {
                return Ok(Some(rec));
            }
        }
        Ok(None)
    }

    /// 惰性过滤，保持文件顺序。解析错误原样传出，不会被谓词吞掉。
    pub fn filter_sequences<F>(&self, mut pred: F) -> Result<impl Iterator<Item = Result<Seq>>>
    where
        F: FnMut(&Seq) -> bool,
    {
        Ok(self.read_sequences()?.filter(move |rec| match rec {
            Ok(s) => pred(s),
            Err(_) => true,
        }))
    }

    pub fn sequences_by_type(
        &self,
        alphabet: Alphabet,
    ) -> Result<impl Iterator<Item = Result<Seq>>> {
        self.filter_sequences(move |s| s.alphabet_type() == alphabet)
    }

    /// 按字母表分组，组内保持文件顺序。
    pub fn group_by_type(&self) -> Result<BTreeMap<Alphabet, Vec<Seq>>> {
        let mut groups: BTreeMap<Alphabet, Vec<Seq>> = BTreeMap::new();
        for rec in self.read_sequences()? {
            let rec = rec?;
            groups.entry(rec.alphabet_type()).or_default().push(rec);
        }
        Ok(groups)
    }

    /// 对每条记录截取 [start, end)。
    ///
    /// 记录短于 `end` 时截断到末尾；长度不超过 `start` 的记录被跳过。
    pub fn extract_subsequences(
        &self,
        start: usize,
        end: usize,
    ) -> Result<impl Iterator<Item = Result<Seq>>> {
        Ok(self
            .read_sequences()?
            .filter_map(move |rec| match rec {
                Ok(s) => s.subsequence(start, end).map(Ok),
                Err(e) => Some(Err(e)),
            }))
    }

    /// 把满足 `pred` 的记录以规范形式写入 `dest`（覆盖），返回写出的条数。
    ///
    /// 先打开源文件再创建 `dest`；`dest` 与源文件相同时返回 `InvalidInput`，不会截断源文件。
    pub fn write_filtered_fasta<P, F>(&self, dest: P, mut pred: F) -> Result<usize>
    where
        P: AsRef<Path>,
        F: FnMut(&Seq) -> bool,
    {
        let dest = dest.as_ref();
        let records = self.read_sequences()?;
        if self.is_same_file(dest) {
            return Err(SeqError::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("output '{}' is the input file", dest.display()),
            )));
        }
        let mut out = BufWriter::new(File::create(dest)?);
        let mut written = 0usize;
        for rec in records {
            let rec = rec?;
            if pred(&rec) {
                fasta::write_record(&mut out, &rec)?;
                written += 1;
            }
        }
        out.flush()?;
        info!(path = %dest.display(), written, "wrote filtered FASTA");
        Ok(written)
    }

    // dest 尚不存在时 canonicalize 失败，此时必然不是源文件
    fn is_same_file(&self, dest: &Path) -> bool {
        match (std::fs::canonicalize(&self.path), std::fs::canonicalize(dest)) {
            (Ok(src), Ok(dst)) => src == dst,
            _ => false,
        }
    }
}

/// [`FastaReader::iter`] 返回的迭代器；打开文件失败时作为第一个元素产出错误。
pub struct Records {
    parser: Option<FileRecords>,
    open_err: Option<SeqError>,
}

impl Iterator for Records {
    type Item = Result<Seq>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.open_err.take() {
            return Some(Err(e));
        }
        self.parser.as_mut()?.next()
    }
}

impl<'a> IntoIterator for &'a FastaReader {
    type Item = Result<Seq>;
    type IntoIter = Records;

    fn into_iter(self) -> Records {
        self.iter()
    }
}
