/// IUPAC 核苷酸互补配对。非核苷酸字符返回 `None`。
#[inline]
pub fn complement(base: u8) -> Option<u8> {
    let c = match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'R' => b'Y', // A/G <-> C/T
        b'Y' => b'R',
        b'K' => b'M', // G/T <-> A/C
        b'M' => b'K',
        b'B' => b'V', // C/G/T <-> A/C/G
        b'V' => b'B',
        b'D' => b'H', // A/G/T <-> A/C/T
        b'H' => b'D',
        b'S' => b'S',
        b'W' => b'W',
        b'N' => b'N',
        _ => return None,
    };
    Some(c)
}

/// 反向互补。遇到无法互补的字符时返回 `None`。
pub fn revcomp(seq: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b)?);
    }
    Some(out)
}

/// 去掉所有空白字符并转为大写。
pub fn normalize_seq(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// 计数 G 与 C（不含 S 等歧义码）。
pub fn count_gc(seq: &[u8]) -> usize {
    seq.iter().filter(|&&b| b == b'G' || b == b'C').count()
}
