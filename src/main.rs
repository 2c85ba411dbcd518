use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod render;
mod types;
mod utils;

use types::OutfitResponse;

pub const OUTPUT_FILE: &str = "generated-outfit.html";

#[derive(Parser)]
#[command(name = "outfit-html")]
#[command(about = "Render an outfit recommendation response as a static HTML page")]
struct Cli {
    /// JSON response file to read (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output HTML file
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,
    /// Quiet mode - suppress confirmation output
    #[arg(short, long)]
    quiet: bool,
}

/// Read the raw JSON text from a file or, when no path is given, from stdin
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read JSON from stdin")?;
            Ok(text)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())?;
    let outfit = OutfitResponse::from_json(&text)?;
    let html = render::render_outfit_page(&outfit);

    fs::write(&cli.output, html)
        .with_context(|| format!("Failed to write HTML file: {}", cli.output.display()))?;

    if !cli.quiet {
        let output = cli.output.to_string_lossy();
        println!(
            "✅ HTML 파일이 생성되었습니다: {}",
            utils::display_path(&output)
        );
        println!("   브라우저에서 열기: open {}", output);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
