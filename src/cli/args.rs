//! Command line argument parsing for the lexpack CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// lexpack - integer list compression and bigram spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "lexpack")]
#[command(about = "Compress integer lists and correct misspelled words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexpackArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexpackArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compress a JSON object of integer lists into hex blobs
    Compress(CompressArgs),

    /// Decompress a JSON object of hex blobs into integer lists
    Decompress(DecompressArgs),

    /// Correct words against a word list
    Correct(CorrectArgs),

    /// Tokenize a query and correct each token against a word list
    Query(QueryArgs),
}

/// Arguments for compressing
#[derive(Parser, Debug, Clone)]
pub struct CompressArgs {
    /// Compression mode (gamma or varbyte); the configured default when absent
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Input JSON file (reads stdin when absent)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for decompressing
#[derive(Parser, Debug, Clone)]
pub struct DecompressArgs {
    /// Mode the blobs were compressed with (gamma or varbyte)
    #[arg(short, long)]
    pub mode: String,

    /// Input JSON file (reads stdin when absent)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Vocabulary file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Show ranked candidates instead of the single best correction
    #[arg(long)]
    pub candidates: bool,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub targets: Vec<String>,
}

/// Arguments for query preprocessing
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Vocabulary file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_command() {
        let args = LexpackArgs::try_parse_from([
            "lexpack",
            "compress",
            "--mode",
            "varbyte",
            "lists.json",
        ])
        .unwrap();

        if let Command::Compress(compress_args) = args.command {
            assert_eq!(compress_args.mode.as_deref(), Some("varbyte"));
            assert_eq!(compress_args.input, Some(PathBuf::from("lists.json")));
        } else {
            panic!("Expected compress command");
        }
    }

    #[test]
    fn test_decompress_from_stdin() {
        let args =
            LexpackArgs::try_parse_from(["lexpack", "decompress", "-m", "gamma"]).unwrap();

        if let Command::Decompress(decompress_args) = args.command {
            assert_eq!(decompress_args.mode, "gamma");
            assert!(decompress_args.input.is_none());
        } else {
            panic!("Expected decompress command");
        }
    }

    #[test]
    fn test_decompress_requires_mode() {
        assert!(LexpackArgs::try_parse_from(["lexpack", "decompress", "blobs.json"]).is_err());

        let args = LexpackArgs::try_parse_from(["lexpack", "compress", "lists.json"]).unwrap();
        if let Command::Compress(compress_args) = args.command {
            assert!(compress_args.mode.is_none());
        } else {
            panic!("Expected compress command");
        }
    }

    #[test]
    fn test_correct_command() {
        let args = LexpackArgs::try_parse_from([
            "lexpack",
            "correct",
            "--words",
            "words.txt",
            "aple",
            "recipie",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.words, PathBuf::from("words.txt"));
            assert_eq!(correct_args.targets, vec!["aple", "recipie"]);
            assert!(!correct_args.candidates);
        } else {
            panic!("Expected correct command");
        }
    }

    #[test]
    fn test_correct_requires_a_word() {
        assert!(LexpackArgs::try_parse_from(["lexpack", "correct", "--words", "w.txt"]).is_err());
    }

    #[test]
    fn test_query_command() {
        let args = LexpackArgs::try_parse_from([
            "lexpack",
            "--format",
            "json",
            "--pretty",
            "query",
            "-w",
            "words.txt",
            "aple pie",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Query(query_args) = args.command {
            assert_eq!(query_args.query, "aple pie");
        } else {
            panic!("Expected query command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = LexpackArgs::try_parse_from(["lexpack", "decompress", "-m", "varbyte"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = LexpackArgs::try_parse_from(["lexpack", "-vvv", "compress"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = LexpackArgs::try_parse_from(["lexpack", "-q", "-vv", "compress"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(LexpackArgs::try_parse_from(["lexpack", "--format", "yaml", "compress"]).is_err());
    }
}
