mod cli;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use lanehex::{split_file, SplitConfig, SplitReport, DEFAULT_TARGET_WORDS};

fn main() -> Result<()> {
    // Build scripts wrapping this tool expect exit code 1 on a usage
    // error, not clap's default 2. Help and version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let config = SplitConfig {
        target_words: cli.target_words.unwrap_or(DEFAULT_TARGET_WORDS),
        out_dir: cli.out_dir,
    };

    let report = split_file(&cli.input, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
    } else {
        print_report(&report);
    }

    if report.summary.is_overflow() {
        eprintln!(
            "Warning: image needs {} words but the target block holds {}",
            report.summary.word_count, report.summary.target_words
        );
    }

    Ok(())
}

/// Text report in the shape the firmware build scripts scrape.
fn print_report(report: &SplitReport) {
    let summary = &report.summary;

    if summary.padded_bytes > summary.source_bytes {
        println!("Padded binary to {} bytes", summary.padded_bytes);
    }

    for file in &report.files {
        println!(
            "Created {} ({} bytes, padded to {})",
            file.path.display(),
            summary.word_count,
            file.lines
        );
    }

    println!("Split {} bytes into 4 hex files", summary.padded_bytes);
    println!(
        "Memory words: {}/{} : [{}%]",
        summary.word_count, summary.target_words, summary.utilization as u64
    );
}
