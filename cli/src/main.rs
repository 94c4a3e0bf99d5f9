//! seedphrase: generate, validate and decode mnemonic phrases, and derive
//! seeds from them.

mod commands;
mod config;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use seedphrase_codec::OsEntropy;
use seedphrase_types::WordCount;
use seedphrase_utils::LogFormat;
use seedphrase_wordlists::Language;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "seedphrase",
    version,
    about = "Mnemonic phrases: generate, validate, decode, derive seeds"
)]
struct Cli {
    /// Word list: english, japanese, spanish, french, italian, czech,
    /// korean, chinese-simplified, chinese-traditional.
    #[arg(long, global = true, env = "SEEDPHRASE_LANGUAGE")]
    language: Option<Language>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "SEEDPHRASE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "SEEDPHRASE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "SEEDPHRASE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a new mnemonic from OS randomness.
    Generate {
        /// Number of words: 12, 15, 18, 21 or 24.
        #[arg(long, env = "SEEDPHRASE_WORDS")]
        words: Option<usize>,
    },
    /// Encode hex entropy as a mnemonic.
    FromEntropy {
        /// 32 to 64 hex digits; read from stdin when omitted.
        hex: Option<String>,
    },
    /// Check a mnemonic; suggests replacements for an unknown word.
    Validate {
        /// Read from stdin when omitted.
        mnemonic: Option<String>,
    },
    /// Print the entropy a mnemonic encodes, as hex.
    Entropy {
        /// Read from stdin when omitted.
        mnemonic: Option<String>,
    },
    /// Derive the 64-byte seed, printed as hex.
    Seed {
        /// Read from stdin when omitted.
        mnemonic: Option<String>,

        #[arg(long, default_value = "", env = "SEEDPHRASE_PASSPHRASE", hide_env_values = true)]
        passphrase: String,

        /// Skip validation and derive from any text.
        #[arg(long)]
        unchecked: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        language: cli.language.unwrap_or(file_config.language),
        log_format: cli.log_format.unwrap_or(file_config.log_format),
        log_level: cli.log_level.unwrap_or(file_config.log_level),
        ..file_config
    };

    seedphrase_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    tracing::debug!(language = %config.language, "resolved configuration");

    let language = config.language;
    let mut stdout = io::stdout().lock();
    let mut stdin = io::stdin().lock();

    match cli.command {
        Command::Generate { words } => {
            let word_count = match words {
                Some(n) => WordCount::try_from(n).map_err(anyhow::Error::msg)?,
                None => config.word_count,
            };
            commands::generate(&OsEntropy, word_count, language, &mut stdout)?;
        }
        Command::FromEntropy { hex } => {
            let hex = commands::read_input(hex, &mut stdin)?;
            commands::from_entropy(&hex, language, &mut stdout)?;
        }
        Command::Validate { mnemonic } => {
            let mnemonic = commands::read_input(mnemonic, &mut stdin)?;
            if !commands::validate(&mnemonic, language, &mut stdout)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Entropy { mnemonic } => {
            let mnemonic = commands::read_input(mnemonic, &mut stdin)?;
            commands::entropy(&mnemonic, language, &mut stdout)?;
        }
        Command::Seed {
            mnemonic,
            passphrase,
            unchecked,
        } => {
            let mnemonic = commands::read_input(mnemonic, &mut stdin)?;
            let passphrase = zeroize::Zeroizing::new(passphrase);
            commands::seed(&mnemonic, &passphrase, language, !unchecked, &mut stdout)
                .context("seed derivation failed")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
