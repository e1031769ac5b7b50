// SPDX-License-Identifier: PMPL-1.0-or-later

//! civicvoice: inspect and switch the CivicVoice Et interface language
//!
//! Acts as a minimal host for the localization core: it keeps the language
//! preference in a file-backed store, applies the presentation policy to a
//! headless document and prints translated strings.

use anyhow::{anyhow, Result};
use civicvoice_i18n::config::Config;
use civicvoice_i18n::coverage::{self, CoverageFormat};
use civicvoice_i18n::host::LocaleHost;
use civicvoice_i18n::i18n::{self, Key, Lang, LanguageTag, Script};
use civicvoice_i18n::presentation::HeadlessDocument;
use civicvoice_i18n::storage::FileStorage;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Store directory used when neither `--store` nor the config names one.
const DEFAULT_STORE_DIR: &str = ".civicvoice";

#[derive(Parser)]
#[command(name = "civicvoice")]
#[command(version)]
#[command(about = "Localization store and language preference for CivicVoice Et")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the persisted preferences
    #[arg(long, global = true, value_name = "DIR")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages
    Languages,

    /// Show the active language
    Current,

    /// Switch the active language and persist it
    Set {
        /// Language code, e.g. am
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Translate a key
    Lookup {
        /// Dotted translation key, e.g. nav.home
        #[arg(value_name = "KEY")]
        key: String,

        /// Text to show when no translation exists
        #[arg(short, long)]
        fallback: Option<String>,

        /// Translate in this language instead of the active one
        #[arg(short, long)]
        lang: Option<String>,

        /// Value for the {value} marker
        #[arg(short, long)]
        value: Option<String>,
    },

    /// List translation keys with their text
    Keys {
        /// Only keys starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Show text in this language instead of the active one
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Report per-language translation coverage
    Coverage {
        #[arg(short, long, value_enum, default_value = "text")]
        format: CoverageFormat,
    },

    /// Print the document head after applying the presentation policy
    Head,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    let store_dir = cli
        .store
        .clone()
        .or_else(|| config.storage_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
    let storage = FileStorage::new(&store_dir);
    log::debug!("using preference store {}", storage.path().display());

    let mut host = LocaleHost::start(storage, HeadlessDocument::new(), &config);

    match cli.command {
        Commands::Languages => {
            for lang in Lang::all() {
                let marker = if host.active().is(*lang) { "*" } else { " " };
                let script = match i18n::script(lang.code()) {
                    Some(Script::Ethiopic) => "Ethiopic",
                    Some(Script::Latin) => "Latin",
                    None => "",
                };
                println!(
                    "{} {:4} {:10} {:9} {}",
                    marker.green(),
                    lang.code().bold(),
                    i18n::language_name(lang.code()).unwrap_or(""),
                    script,
                    i18n::native_name(lang.code()).unwrap_or(""),
                );
            }
        }

        Commands::Current => {
            let active = host.active();
            match active.lang() {
                Some(lang) => println!(
                    "{} ({})",
                    lang.code().bold(),
                    i18n::native_name(lang.code()).unwrap_or("")
                ),
                None => println!(
                    "{} {}",
                    active.as_str().bold(),
                    "(unsupported, showing English)".yellow()
                ),
            }
        }

        Commands::Set { code } => {
            let tag = host
                .change_language(&code)
                .map_err(|err| anyhow!(err.user_message()))?;
            if tag.lang().is_none() {
                println!(
                    "{} {} is not a supported language; strings will fall back to English",
                    "warning:".yellow(),
                    tag
                );
            }
            println!("Active language: {}", tag.as_str().bold());
            println!("{}", host.t(Key::NavLanguage.as_str()));
        }

        Commands::Lookup {
            key,
            fallback,
            lang,
            value,
        } => {
            let tag = lang
                .map(LanguageTag::from)
                .unwrap_or_else(|| host.active().clone());
            let text = match &fallback {
                Some(fallback) => i18n::translate_or(&tag, &key, fallback),
                None => i18n::translate(&tag, &key),
            };
            match value {
                Some(value) => println!("{}", i18n::fill(text, &value)),
                None => println!("{}", text),
            }
        }

        Commands::Keys { prefix, lang } => {
            let tag = lang
                .map(LanguageTag::from)
                .unwrap_or_else(|| host.active().clone());
            for key in Key::ALL {
                let name = key.as_str();
                if let Some(prefix) = &prefix {
                    if !name.starts_with(prefix.as_str()) {
                        continue;
                    }
                }
                let own = tag
                    .lang()
                    .and_then(|lang| i18n::lookup(lang, *key))
                    .is_some();
                let text = i18n::translate(&tag, name);
                if own {
                    println!("{:32} {}", name.bold(), text);
                } else {
                    println!("{:32} {}", name.bold(), text.dimmed());
                }
            }
        }

        Commands::Coverage { format } => {
            let report = coverage::report();
            println!("{}", format.render(&report)?);
        }

        Commands::Head => {
            print!("{}", host.document().to_html(host.active()));
        }
    }

    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}
