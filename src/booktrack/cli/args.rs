use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "booktrack", version)]
#[command(about = "Search and extend a plain text library catalog", long_about = None)]
pub struct Cli {
    /// Catalog file (must end in .txt, created if missing)
    pub catalog: PathBuf,

    /// 13 digit ISBN to look up, Title:Author:ISBN:Copies to add, or a title keyword
    #[arg(allow_hyphen_values = true)]
    pub operation: String,

    /// Extra catalog files to ingest concurrently before the operation runs
    #[arg(short, long = "ingest", value_name = "FILE")]
    pub ingest: Vec<PathBuf>,

    /// Worker threads used for ingestion (overrides booktrack.json)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
