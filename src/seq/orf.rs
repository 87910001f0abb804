use serde::{Deserialize, Serialize};

use crate::util::codon;

/// 未指定时的最短 ORF 长度（核苷酸数，含终止密码子）
pub const DEFAULT_MIN_ORF_LEN: usize = 12;

/// 开放阅读框，区间为 [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    /// 阅读框，1..=3，对应偏移 0..=2
    pub frame: u8,
    pub sequence: String,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 正链三个阅读框内扫描 ATG…终止密码子。
///
/// 每个框内自左向右：第一个 ATG 开启 ORF，其后第一个同框终止密码子（包含）关闭它；
/// 关闭后从终止密码子之后继续寻找新的起始，因此同一框内的 ORF 互不重叠。
/// 没有遇到终止密码子的 ORF 不报告。结果按 (frame, start) 排序。
pub fn scan_orfs(seq: &[u8], min_length: usize) -> Vec<Orf> {
    let mut out = Vec::new();
    let n = seq.len();

    for offset in 0..3usize {
        let mut open: Option<usize> = None;
        let mut pos = offset;
        while pos + 3 <= n {
            let c = &seq[pos..pos + 3];
            match open {
                None if codon::is_start(c) => open = Some(pos),
                Some(start) if codon::is_stop(c) => {
                    let end = pos + 3;
                    if end - start >= min_length {
                        out.push(Orf {
                            start,
                            end,
                            frame: offset as u8 + 1,
                            sequence: String::from_utf8_lossy(&seq[start..end]).into_owned(),
                        });
                    }
                    open = None;
                }
                _ => {}
            }
            pos += 3;
        }
    }
    out
}
