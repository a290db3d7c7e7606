//! Command implementations for the lexpack CLI.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LexpackConfig;
use crate::error::Result;
use crate::service::{CompressRequest, DecompressRequest, IndexWordsRequest, TextService};

/// Execute a CLI command.
pub fn execute_command(args: LexpackArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let service = TextService::new(config);

    match &args.command {
        Command::Compress(compress_args) => compress(&service, compress_args, &args),
        Command::Decompress(decompress_args) => decompress(&service, decompress_args, &args),
        Command::Correct(correct_args) => correct(&service, correct_args, &args),
        Command::Query(query_args) => query(&service, query_args, &args),
    }
}

/// Load the configuration file if one was given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<LexpackConfig> {
    match path {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            LexpackConfig::load_from_file(path)
        }
        None => Ok(LexpackConfig::default()),
    }
}

/// Compress integer lists.
fn compress(service: &TextService, args: &CompressArgs, cli_args: &LexpackArgs) -> Result<()> {
    let mode = service.resolve_mode(args.mode.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let integer_lists: BTreeMap<String, Vec<u64>> = serde_json::from_str(&input)?;

    let request = CompressRequest {
        mode: mode.to_string(),
        integer_lists,
    };
    let response = service.compress(&request)?;

    output_result(
        &format!("Compressed {} lists with {mode}", response.len()),
        &response,
        cli_args,
    )
}

/// Decompress hex blobs.
fn decompress(service: &TextService, args: &DecompressArgs, cli_args: &LexpackArgs) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let compressed_values: BTreeMap<String, String> = serde_json::from_str(&input)?;

    let request = DecompressRequest {
        mode: args.mode.clone(),
        compressed_values,
    };
    let response = service.decompress(&request)?;

    output_result(
        &format!("Decompressed {} values with {}", response.len(), args.mode),
        &response,
        cli_args,
    )
}

/// Correct each target word against a vocabulary file.
fn correct(service: &TextService, args: &CorrectArgs, cli_args: &LexpackArgs) -> Result<()> {
    index_word_file(service, &args.words)?;

    if args.candidates {
        let results: Vec<CandidatesOutput> = args
            .targets
            .iter()
            .map(|word| CandidatesOutput {
                original: word.clone(),
                candidates: service.index().suggest(word),
            })
            .collect();
        return output_result("Correction candidates", &results, cli_args);
    }

    let results: Vec<CorrectionOutput> = args
        .targets
        .iter()
        .map(|word| CorrectionOutput {
            original: word.clone(),
            corrected: service.correct_word(word),
        })
        .collect();
    output_result(
        &format!("Corrected {} words", results.len()),
        &results,
        cli_args,
    )
}

/// Preprocess and correct a query against a vocabulary file.
fn query(service: &TextService, args: &QueryArgs, cli_args: &LexpackArgs) -> Result<()> {
    index_word_file(service, &args.words)?;

    let result = QueryOutput {
        query: args.query.clone(),
        corrected: service.preprocess_and_correct_query(&args.query)?,
    };
    output_result("Corrected query", &result, cli_args)
}

fn index_word_file(service: &TextService, path: &Path) -> Result<()> {
    let words = load_word_list(path)?;
    let status = service.index_words(&IndexWordsRequest {
        words,
        reset: false,
    });
    info!("loaded {} words from {}", status.indexed, path.display());
    Ok(())
}

/// Read a word list: one word per line, surrounding whitespace and blank
/// lines ignored.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read the whole input file, or stdin when no file is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    let mut input = String::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_string(&mut input)?;
        }
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}
