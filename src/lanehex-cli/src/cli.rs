//! CLI argument definitions for lanehex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lanehex")]
#[command(about = "Split a firmware binary into byte-lane hex files", long_about = None)]
pub struct Cli {
    /// Firmware binary to split
    pub input: PathBuf,

    /// Capacity of the destination memory block in 32-bit words
    /// (defaults to the 2048-word BSRAM configuration)
    pub target_words: Option<usize>,

    /// Directory to write the four hex files into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_explicit_capacity() {
        let cli = Cli::try_parse_from(["lanehex", "firmware.bin", "4096"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("firmware.bin"));
        assert_eq!(cli.target_words, Some(4096));
    }

    #[test]
    fn test_parses_legacy_form_without_capacity() {
        let cli = Cli::try_parse_from(["lanehex", "firmware.bin"]).unwrap();
        assert_eq!(cli.target_words, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_parses_out_dir() {
        let cli = Cli::try_parse_from(["lanehex", "firmware.bin", "2048", "-o", "build"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("build"));
    }

    #[test]
    fn test_rejects_missing_input() {
        assert!(Cli::try_parse_from(["lanehex"]).is_err());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["lanehex", "a.bin", "2048", "extra"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_capacity() {
        assert!(Cli::try_parse_from(["lanehex", "a.bin", "lots"]).is_err());
    }
}
