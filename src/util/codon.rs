//! 标准遗传密码表（NCBI Table 1）。

/// 终止密码子的翻译符号
pub const STOP: u8 = b'*';
/// 含歧义碱基、无法确定的密码子
pub const UNKNOWN_AA: u8 = b'X';

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

// 编码：A=0, C=1, G=2, T=3；索引 = b1*16 + b2*4 + b3
// 顺序：AAA, AAC, AAG, AAT, ACA, ..., TTT
const TABLE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

#[inline]
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    Some(base_index(codon[0])? * 16 + base_index(codon[1])? * 4 + base_index(codon[2])?)
}

/// 翻译单个密码子（大写 DNA）。不在 {A,C,G,T} 上的密码子返回 `X`。
#[inline]
pub fn translate_codon(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(UNKNOWN_AA, |i| TABLE[i])
}

#[inline]
pub fn is_start(codon: &[u8]) -> bool {
    codon == START_CODON
}

#[inline]
pub fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|s| codon == *s)
}

/// 从偏移 0 开始逐个密码子翻译；终止密码子输出 `*` 但不中断。
/// 末尾不足 3 个碱基的部分被忽略。
pub fn translate(seq: &[u8]) -> Vec<u8> {
    seq.chunks_exact(3).map(translate_codon).collect()
}
