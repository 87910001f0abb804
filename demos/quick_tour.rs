//! 演示如何在 library 模式下使用 fasta-parser。
//!
//! 运行方式：
//! ```bash
//! cargo run --example quick_tour
//! ```

use fasta_parser::{Alphabet, FastaReader, Seq};

fn main() -> fasta_parser::Result<()> {
    // 1. 单条 DNA 序列
    let dna = Seq::new("ATGCGTACGTAGCTA", "Example DNA sequence")?;
    println!("序列: {}", dna.sequence());
    println!("长度: {}", dna.len());
    println!("类型: {}", dna.alphabet_type());
    println!("GC 含量: {}%", dna.gc_content()?);
    println!("组成: {:?}", dna.composition());
    println!("反向互补: {}", dna.reverse_complement()?.sequence());

    // 2. 翻译与 ORF
    let coding = Seq::new("ATGAAATTTGGATAA", "Coding sequence")?;
    println!("\n翻译: {}", coding.translate()?.sequence());
    for orf in coding.find_orfs_default()? {
        println!("  ORF frame={} [{}, {}) {}", orf.frame, orf.start, orf.end, orf.sequence);
    }

    // 3. 错误类型
    match Seq::new("ATGC123", "bad") {
        Err(e) => println!("\n非法字符: {}", e),
        Ok(_) => unreachable!(),
    }
    if let Err(e) = Seq::new("MKFG", "protein")?.gc_content() {
        println!("蛋白质 GC 含量: {}", e);
    }

    // 4. 文件读取与查询
    let dir = std::env::temp_dir().join("fasta_parser_quick_tour");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("sample.fasta");
    std::fs::write(
        &path,
        concat!(
            ">seq1 DNA\nATGCGTACGTAGCTA\nACGTACGTACGTACG\n",
            ">seq2 protein\nMKFGSTOP\n",
            ">seq3 RNA\nAUGCGUACGUAGCUA\n"
        ),
    )?;

    let reader = FastaReader::open(&path)?;
    for rec in &reader {
        let rec = rec?;
        println!("\n{}  type={} len={}", rec.header(), rec.alphabet_type(), rec.len());
    }

    let stats = reader.file_stats()?;
    println!("\n统计: {:?}", stats);

    if let Some(s) = reader.sequence_by_id("seq3")? {
        println!("找到: {}", s.header());
    }

    for sub in reader.extract_subsequences(0, 10)? {
        println!("{}", sub?);
    }

    let out = dir.join("dna_only.fasta");
    let n = reader.write_filtered_fasta(&out, |s| s.alphabet_type() == Alphabet::Dna)?;
    println!("\n写出 DNA 序列 {} 条 -> {}", n, out.display());

    std::fs::remove_dir_all(&dir)?;
    println!("\n完成！");
    Ok(())
}
