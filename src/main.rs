use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fasta_parser::io::fasta;
use fasta_parser::{Alphabet, FastaReader, Seq, DEFAULT_MIN_ORF_LEN};

#[derive(Parser, Debug)]
#[command(
    name = "fasta-parser",
    author,
    version,
    about = "FASTA parsing and sequence analysis",
    arg_required_else_help = true
)]
struct Cli {
    /// Skip alphabet validation when reading records
    #[arg(long = "no-validate", global = true)]
    no_validate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summary statistics of a FASTA file
    Stats {
        fasta: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List records with type, length and GC content
    List { fasta: String },
    /// Print the first record whose header contains ID
    Get { fasta: String, id: String },
    /// Write records matching all given conditions
    Filter {
        fasta: String,
        #[arg(short, long)]
        out: String,
        /// DNA, RNA, PROTEIN or UNKNOWN
        #[arg(long = "type")]
        alphabet: Option<Alphabet>,
        #[arg(long = "min-len")]
        min_len: Option<usize>,
        #[arg(long = "max-len")]
        max_len: Option<usize>,
    },
    /// Extract [start, end) from every record
    Extract {
        fasta: String,
        #[arg(long)]
        start: usize,
        #[arg(long)]
        end: usize,
        /// Output FASTA path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Analyze a single sequence given on the command line
    Analyze {
        sequence: String,
        #[arg(long, default_value = "")]
        header: String,
        #[arg(long = "min-orf-len", default_value_t = DEFAULT_MIN_ORF_LEN)]
        min_orf_len: usize,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let log_level = std::env::var("FASTA_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let validate = !cli.no_validate;
    match cli.command {
        Commands::Stats { fasta, json } => run_stats(&open(&fasta, validate)?, json),
        Commands::List { fasta } => run_list(&open(&fasta, validate)?),
        Commands::Get { fasta, id } => run_get(&open(&fasta, validate)?, &id),
        Commands::Filter { fasta, out, alphabet, min_len, max_len } => {
            let reader = open(&fasta, validate)?;
            let n = reader
                .write_filtered_fasta(&out, |s| {
                    alphabet.map_or(true, |a| s.alphabet_type() == a)
                        && min_len.map_or(true, |m| s.len() >= m)
                        && max_len.map_or(true, |m| s.len() <= m)
                })
                .with_context(|| format!("cannot write filtered FASTA to '{}'", out))?;
            println!("written: {}", n);
            Ok(())
        }
        Commands::Extract { fasta, start, end, out } => {
            run_extract(&open(&fasta, validate)?, start, end, out.as_deref())
        }
        Commands::Analyze { sequence, header, min_orf_len, json } => {
            let seq = Seq::with_validation(&sequence, header, validate)?;
            run_analyze(&seq, min_orf_len, json)
        }
    }
}

fn open(path: &str, validate: bool) -> Result<FastaReader> {
    let reader = FastaReader::open(path).with_context(|| format!("cannot open FASTA '{}'", path))?;
    Ok(reader.with_validation(validate))
}

fn run_stats(reader: &FastaReader, json: bool) -> Result<()> {
    let stats = reader.file_stats()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    println!("file: {}", reader.path().display());
    println!("sequences: {}", stats.sequence_count);
    println!("total_len: {}", stats.total_length);
    println!("min_len: {}", stats.min_length);
    println!("max_len: {}", stats.max_length);
    println!("avg_len: {:.2}", stats.average_length);
    for (alphabet, n) in &stats.alphabet_types {
        println!("type {}: {}", alphabet, n);
    }
    Ok(())
}

fn run_list(reader: &FastaReader) -> Result<()> {
    for rec in reader {
        let rec = rec?;
        let gc = rec.gc_content().map(|g| format!("{:.2}", g)).unwrap_or_else(|_| "-".to_string());
        println!("{}\t{}\t{}\t{}", rec.header(), rec.alphabet_type(), rec.len(), gc);
    }
    Ok(())
}

fn run_get(reader: &FastaReader, id: &str) -> Result<()> {
    match reader.sequence_by_id(id)? {
        Some(rec) => println!("{}", rec),
        None => anyhow::bail!("no record with header containing '{}'", id),
    }
    Ok(())
}

fn run_extract(
    reader: &FastaReader,
    start: usize,
    end: usize,
    out_path: Option<&str>,
) -> Result<()> {
    if start >= end {
        anyhow::bail!("start ({}) must be less than end ({})", start, end);
    }
    let mut out: Box<dyn Write> = match out_path {
        Some(p) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(p).with_context(|| format!("cannot create '{}'", p))?,
        )),
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    };
    for rec in reader.extract_subsequences(start, end)? {
        fasta::write_record(&mut out, &rec?)?;
    }
    out.flush()?;
    Ok(())
}

fn run_analyze(seq: &Seq, min_orf_len: usize, json: bool) -> Result<()> {
    let alphabet = seq.alphabet_type();
    let gc = seq.gc_content().ok();
    let revcomp = seq.reverse_complement().ok();
    let protein = seq.translate().ok();
    let orfs = if alphabet == Alphabet::Dna { seq.find_orfs(min_orf_len)? } else { Vec::new() };

    if json {
        let value = serde_json::json!({
            "header": seq.header(),
            "length": seq.len(),
            "alphabet": alphabet,
            "composition": seq.composition(),
            "gc_content": gc,
            "reverse_complement": revcomp.as_ref().map(Seq::sequence),
            "translation": protein.as_ref().map(Seq::sequence),
            "orfs": orfs,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("sequence: {}", seq.sequence());
    println!("length: {}", seq.len());
    println!("alphabet: {}", alphabet);
    let comp: Vec<String> = seq.composition().iter().map(|(c, n)| format!("{}:{}", c, n)).collect();
    println!("composition: {}", comp.join(" "));
    if let Some(gc) = gc {
        println!("gc_content: {:.2}%", gc);
    }
    if let Some(rc) = revcomp {
        println!("reverse_complement: {}", rc.sequence());
    }
    if let Some(p) = protein {
        println!("translation: {}", p.sequence());
    }
    for o in &orfs {
        println!("orf: frame={} [{}, {}) len={} {}", o.frame, o.start, o.end, o.len(), o.sequence);
    }
    Ok(())
}
