use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, SeqError};
use crate::seq::Seq;

#[derive(Debug)]
enum ParseState {
    AwaitingHeader,
    InRecord { header: String, seq: String },
}

/// 流式 FASTA 解析器：逐行读取，每次产出一条 [`Seq`]。
///
/// 空行在任何状态下都被忽略；第一个 header 之前出现序列行视为格式错误，
/// 报错后解析器停止。
pub struct FastaParser<R: BufRead> {
    reader: R,
    buf: String,
    state: ParseState,
    line_no: usize,
    validate: bool,
    done: bool,
}

impl<R: BufRead> FastaParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            state: ParseState::AwaitingHeader,
            line_no: 0,
            validate: true,
            done: false,
        }
    }

    /// 构造 [`Seq`] 时是否校验字母表（默认开启）
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn next_record(&mut self) -> Result<Option<Seq>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let n = match self.reader.read_line(&mut self.buf) {
                Ok(n) => n,
                Err(e) => {
                    self.done = true;
                    return Err(e.into());
                }
            };
            if n == 0 {
                self.done = true;
                return match std::mem::replace(&mut self.state, ParseState::AwaitingHeader) {
                    ParseState::InRecord { header, seq } => self.emit(header, seq).map(Some),
                    ParseState::AwaitingHeader => Ok(None),
                };
            }
            self.line_no += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(h) = line.strip_prefix('>') {
                let next = ParseState::InRecord { header: h.to_string(), seq: String::new() };
                match std::mem::replace(&mut self.state, next) {
                    ParseState::InRecord { header, seq } => return self.emit(header, seq).map(Some),
                    ParseState::AwaitingHeader => continue,
                }
            }

            match &mut self.state {
                ParseState::InRecord { seq, .. } => {
                    seq.extend(line.chars().filter(|c| !c.is_whitespace()));
                }
                ParseState::AwaitingHeader => {
                    self.done = true;
                    return Err(SeqError::format(
                        "sequence data found before the first '>' header",
                        Some(self.line_no),
                    ));
                }
            }
        }
    }

    fn emit(&self, header: String, seq: String) -> Result<Seq> {
        debug!(header = %header, len = seq.len(), "parsed FASTA record");
        Seq::with_validation(&seq, header, self.validate)
    }
}

impl<R: BufRead> Iterator for FastaParser<R> {
    type Item = Result<Seq>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// 解析内存中的 FASTA 文本。
pub fn parse_str(text: &str) -> FastaParser<&[u8]> {
    FastaParser::new(text.as_bytes())
}

/// 第一条非空行是否以 `>` 开头。空输入不算 FASTA。
pub fn is_fasta_format<R: BufRead>(mut reader: R) -> Result<bool> {
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(false);
        }
        let line = buf.trim();
        if !line.is_empty() {
            return Ok(line.starts_with('>'));
        }
    }
}

/// 以规范形式写出一条记录（header 行 + 单行序列）。
pub fn write_record<W: Write>(w: &mut W, rec: &Seq) -> Result<()> {
    writeln!(w, "{}", rec)?;
    Ok(())
}
