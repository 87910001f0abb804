pub mod fasta;
pub mod reader;
