use clap::Parser;
use phonebook::pagination::PageSize;
use std::path::PathBuf;

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    s.parse::<PageSize>().map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Interactive contact directory backed by a CSV file", long_about = None)]
pub struct Cli {
    /// CSV file holding the contacts (default: phonebook.csv)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Records shown per page (at least 1)
    #[arg(short, long, value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
