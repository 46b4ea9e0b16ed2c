//! huffxor: encode text files with Huffman codes, optionally XOR-obfuscated.
//!
//! # Artifacts
//!
//! ```text
//! story.souce --encode--> story.code  (ENCRYPTED|PLAIN header + bit-string)
//!                         story.tree  (SYMBOL:COUNT lines, NL for newline)
//!
//! story.code + story.tree --decode--> story.decode
//! ```

mod config;
mod error;
mod files;
mod input_gen;

use config::{Command, Config, DecodeConfig, EncodeConfig, SampleConfig};
use error::{AppError, AppResult};
use huffxor_core::metrics::CodecMetrics;
use huffxor_core::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_logging(config.verbose);

    if config.print_config {
        config.print();
    }

    let metrics = match &config.command {
        Command::Encode(c) => Some(run_encode(c)?),
        Command::Decode(c) => Some(run_decode(c)?),
        Command::Sample(c) => {
            run_sample(c)?;
            None
        }
    };

    if let Some(metrics) = metrics.filter(|_| config.print_metrics) {
        metrics.print_summary();
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Encode the source file and write the `.tree` and `.code` records.
fn run_encode(config: &EncodeConfig) -> AppResult<CodecMetrics> {
    let mut metrics = CodecMetrics::new();

    let text = files::read_source(&config.input_file)?;
    let encoded = pipeline::encode_text(&text, config.key.as_deref())?;

    if config.print_tree {
        println!("=== Huffman Tree ===");
        print!("{}", encoded.tree.render());
        println!();
    }
    if config.print_codes {
        println!("=== Codes ===");
        for (symbol, code) in encoded.codes.sorted_entries() {
            println!("{symbol:?}: {code}");
        }
        println!();
    }

    let payload = encoded.payload_record()?;
    files::write_text(&config.tree_file, &encoded.table_record())?;
    files::write_text(&config.code_file, &payload)?;

    log::info!(
        "encoded {} -> {} (table: {})",
        config.input_file.display(),
        config.code_file.display(),
        config.tree_file.display()
    );

    metrics.source_chars = encoded.table.total();
    metrics.distinct_symbols = encoded.table.len() as u64;
    metrics.encoded_bits = encoded.bits.len() as u64;
    metrics.max_code_len = encoded.tree.depth().max(1) as u64;
    metrics.encrypted = encoded.mode.is_encrypted();
    metrics.complete();
    Ok(metrics)
}

/// Decode a `.code` record with its `.tree` record and write the text.
fn run_decode(config: &DecodeConfig) -> AppResult<CodecMetrics> {
    let mut metrics = CodecMetrics::new();

    let table_record = files::read_record(&config.tree_file)?;
    let payload = files::read_record(&config.code_file)?;
    let decoded = pipeline::decode_record(&payload, &table_record, config.key.as_deref())?;

    if !decoded.skipped.is_empty() {
        log::warn!(
            "{}: skipped {} malformed table line(s)",
            config.tree_file.display(),
            decoded.skipped.len()
        );
    }

    files::write_text(&config.output_file, &decoded.text)?;
    log::info!(
        "decoded {} -> {}",
        config.code_file.display(),
        config.output_file.display()
    );

    metrics.source_chars = decoded.table_total;
    metrics.decoded_chars = decoded.text.chars().count() as u64;
    metrics.distinct_symbols = decoded
        .text
        .chars()
        .collect::<std::collections::HashSet<char>>()
        .len() as u64;
    metrics.encoded_bits = payload.lines().skip(1).map(|line| line.chars().count() as u64).sum();
    metrics.encrypted = decoded.mode.is_encrypted();
    metrics.skipped_table_lines = decoded.skipped.len() as u64;
    metrics.complete();
    Ok(metrics)
}

fn run_sample(config: &SampleConfig) -> AppResult<()> {
    input_gen::write_sample_file(&config.output_file, config.seed, config.chars)
        .map_err(|source| AppError::io(&config.output_file, source))?;
    log::info!(
        "wrote {} sample chars to {} (seed {})",
        config.chars,
        config.output_file.display(),
        config.seed
    );
    Ok(())
}
