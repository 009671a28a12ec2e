use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gfmx", about = "Convert GitHub Flavored Markdown to HTML", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a Markdown file and print the HTML fragment on stdout
    Convert { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert { path } => match fs::read_to_string(&path) {
            Ok(text) => {
                print!("{}", gfmx::markdown_to_html(&text));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("gfmx: {}: {}", path.display(), err);
                ExitCode::from(1)
            }
        },
    }
}
