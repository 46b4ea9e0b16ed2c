//! Configuration for the huffxor application.
//!
//! Command-line arguments are parsed with clap and then resolved into a
//! [`Config`] with every default filled in, so a run can be printed and
//! repeated exactly.
//!
//! # Defaults
//!
//! - `encode` writes `<stem>.tree` and `<stem>.code` next to the input
//! - `decode` writes `<stem>.decode` next to the payload
//! - `sample` picks a time-based seed unless `--seed` is given
//! - `--key` falls back to the `HUFFXOR_KEY` environment variable

use crate::files;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default sample size in characters.
pub const DEFAULT_SAMPLE_CHARS: usize = 4096;

/// Huffman text codec with optional XOR obfuscation.
#[derive(Debug, Parser)]
#[command(name = "huffxor", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Print resolved configuration
    #[arg(long, global = true)]
    pub print_config: bool,

    /// Don't print metrics summary
    #[arg(long, global = true)]
    pub no_metrics: bool,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Encode a text file into a .code payload and a .tree frequency table
    Encode(EncodeArgs),

    /// Decode a .code payload using its .tree frequency table
    Decode(DecodeArgs),

    /// Write a generated sample text file
    Sample(SampleArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Source text file
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Cipher key; the payload is marked ENCRYPTED when given
    #[arg(long, env = "HUFFXOR_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Frequency table output (default: <input>.tree)
    #[arg(long, value_name = "PATH")]
    pub tree_out: Option<PathBuf>,

    /// Payload output (default: <input>.code)
    #[arg(long, value_name = "PATH")]
    pub code_out: Option<PathBuf>,

    /// Print the Huffman tree
    #[arg(long)]
    pub print_tree: bool,

    /// Print the code of every character
    #[arg(long)]
    pub print_codes: bool,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Payload file (.code)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Frequency table file (.tree)
    #[arg(long, value_name = "PATH")]
    pub tree: PathBuf,

    /// Cipher key for ENCRYPTED payloads
    #[arg(long, env = "HUFFXOR_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Decoded text output (default: <input>.decode)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Output path
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Random seed for determinism
    #[arg(long)]
    pub seed: Option<u64>,

    /// Approximate size in characters
    #[arg(long, default_value_t = DEFAULT_SAMPLE_CHARS)]
    pub chars: usize,
}

/// Complete configuration for an encode run.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub input_file: PathBuf,
    pub tree_file: PathBuf,
    pub code_file: PathBuf,
    pub key: Option<String>,
    pub print_tree: bool,
    pub print_codes: bool,
}

/// Complete configuration for a decode run.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub code_file: PathBuf,
    pub tree_file: PathBuf,
    pub output_file: PathBuf,
    pub key: Option<String>,
}

/// Complete configuration for sample generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub output_file: PathBuf,
    pub seed: u64,
    pub chars: usize,
}

#[derive(Debug, Clone)]
pub enum Command {
    Encode(EncodeConfig),
    Decode(DecodeConfig),
    Sample(SampleConfig),
}

/// Resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub print_config: bool,
    pub print_metrics: bool,
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from the process arguments.
    ///
    /// Prints usage and exits on bad arguments, `--help` or `--version`.
    pub fn from_env() -> Self {
        Self::try_from_args(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse configuration from an explicit argument list (first item is the
    /// program name).
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    /// Fill in defaults.
    pub fn from_cli(cli: Cli) -> Self {
        let command = match cli.command {
            CliCommand::Encode(args) => Command::Encode(EncodeConfig {
                tree_file: args
                    .tree_out
                    .unwrap_or_else(|| files::with_extension(&args.input, files::TREE_EXTENSION)),
                code_file: args
                    .code_out
                    .unwrap_or_else(|| files::with_extension(&args.input, files::CODE_EXTENSION)),
                input_file: args.input,
                key: args.key,
                print_tree: args.print_tree,
                print_codes: args.print_codes,
            }),
            CliCommand::Decode(args) => Command::Decode(DecodeConfig {
                output_file: args
                    .out
                    .unwrap_or_else(|| files::with_extension(&args.input, files::DECODE_EXTENSION)),
                code_file: args.input,
                tree_file: args.tree,
                key: args.key,
            }),
            CliCommand::Sample(args) => Command::Sample(SampleConfig {
                output_file: args.out,
                seed: args.seed.unwrap_or_else(time_seed),
                chars: args.chars,
            }),
        };

        Config {
            command,
            print_config: cli.print_config,
            print_metrics: !cli.no_metrics,
            verbose: cli.verbose,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.command {
            Command::Encode(c) => {
                println!("Mode:        encode");
                println!("Input file:  {}", c.input_file.display());
                println!("Tree file:   {}", c.tree_file.display());
                println!("Code file:   {}", c.code_file.display());
                println!("Encrypted:   {}", if c.key.is_some() { "yes" } else { "no" });
            }
            Command::Decode(c) => {
                println!("Mode:        decode");
                println!("Code file:   {}", c.code_file.display());
                println!("Tree file:   {}", c.tree_file.display());
                println!("Output file: {}", c.output_file.display());
                println!("Key given:   {}", if c.key.is_some() { "yes" } else { "no" });
            }
            Command::Sample(c) => {
                println!("Mode:        sample");
                println!("Output file: {}", c.output_file.display());
                println!("Seed:        {}", c.seed);
                println!("Size:        {} chars", c.chars);
            }
        }
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_encode_defaults() {
        let config = Config::try_from_args(["huffxor", "encode", "--in", "notes/story.souce"]).unwrap();
        let Command::Encode(c) = config.command else {
            panic!("expected encode");
        };
        assert_eq!(c.tree_file, Path::new("notes/story.tree"));
        assert_eq!(c.code_file, Path::new("notes/story.code"));
        assert!(config.print_metrics);
        assert!(!c.print_tree);
    }

    #[test]
    fn test_encode_explicit_paths_and_key() {
        let config = Config::try_from_args([
            "huffxor",
            "encode",
            "--in",
            "a.txt",
            "--key",
            "k3y",
            "--tree-out",
            "t.tree",
            "--code-out",
            "c.code",
            "--no-metrics",
        ])
        .unwrap();
        let Command::Encode(c) = config.command else {
            panic!("expected encode");
        };
        assert_eq!(c.key.as_deref(), Some("k3y"));
        assert_eq!(c.tree_file, Path::new("t.tree"));
        assert_eq!(c.code_file, Path::new("c.code"));
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_decode_defaults() {
        let config =
            Config::try_from_args(["huffxor", "decode", "--in", "story.code", "--tree", "story.tree"]).unwrap();
        let Command::Decode(c) = config.command else {
            panic!("expected decode");
        };
        assert_eq!(c.output_file, Path::new("story.decode"));
    }

    #[test]
    fn test_decode_requires_tree() {
        assert!(Config::try_from_args(["huffxor", "decode", "--in", "story.code"]).is_err());
    }

    #[test]
    fn test_sample_seed() {
        let config =
            Config::try_from_args(["huffxor", "sample", "--out", "s.txt", "--seed", "42", "--chars", "10"])
                .unwrap();
        let Command::Sample(c) = config.command else {
            panic!("expected sample");
        };
        assert_eq!(c.seed, 42);
        assert_eq!(c.chars, 10);
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::try_from_args(["huffxor", "encode", "--in", "a", "--bogus"]).is_err());
    }
}
