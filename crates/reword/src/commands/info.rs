//! Info command implementation

use clap::Args;
use reword_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    provider: String,
    api_url: String,
    api_key_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_dir: Option<String>,
    no_cache: bool,
    offline: bool,
    fetch_phrases: bool,
    request_timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            provider: config.provider.as_str().to_string(),
            api_url: config.url_template().to_string(),
            api_key_set: config.api_key.is_some(),
            cache_dir: config.resolved_cache_dir().map(|p| p.to_string()),
            no_cache: config.no_cache,
            offline: config.offline,
            fetch_phrases: config.fetch_phrases,
            request_timeout_secs: config.request_timeout().as_secs(),
            seed: config.seed,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        // Lookup settings
        println!();
        println!("{}", "Synonyms".bold().underline());
        println!("{}: {}", "Provider".dimmed(), full_info.config.provider);
        println!("{}: {}", "API URL".dimmed(), full_info.config.api_url.cyan());
        println!(
            "{}: {}",
            "API key".dimmed(),
            if full_info.config.api_key_set { "set" } else { "not set" }
        );
        match (&full_info.config.cache_dir, full_info.config.no_cache) {
            (_, true) => println!("{}: {}", "Cache".dimmed(), "disabled".yellow()),
            (Some(dir), false) => println!("{}: {}", "Cache".dimmed(), dir),
            (None, false) => println!("{}: {}", "Cache".dimmed(), "unavailable".yellow()),
        }
        println!("{}: {}", "Offline".dimmed(), full_info.config.offline);
        println!("{}: {}", "Fetch phrases".dimmed(), full_info.config.fetch_phrases);
        println!(
            "{}: {}s",
            "Request timeout".dimmed(),
            full_info.config.request_timeout_secs
        );
        print_opt("Seed", full_info.config.seed.as_ref());
        print_opt("Input limit (bytes)", full_info.config.max_input_bytes.as_ref());
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
