use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clinic_site_config::Config;

mod commands;

/// Sitemap, page metadata and article content for the clinic site.
#[derive(Parser, Debug)]
#[command(name = "clinic-site", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/clinic-site/config.toml)
    #[arg(long, global = true, env = "CLINIC_SITE_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file describing the shipped site
    Init(commands::init::InitArgs),
    /// Build the localized URL set and write sitemap XML
    Sitemap(commands::sitemap::SitemapArgs),
    /// Print canonical and alternate URLs for a page as JSON
    Metadata(commands::metadata::MetadataArgs),
    /// Classify an article's content into blocks and print them as JSON
    Article(commands::article::ArticleArgs),
    /// Report configured locales without a message catalog
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Init(args) => {
            let path = cli.config.unwrap_or_else(Config::config_path);
            commands::init::execute(&path, &args, &mut stdout)
        }
        Command::Sitemap(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::sitemap::execute(&config, &args, &mut stdout)
        }
        Command::Metadata(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::metadata::execute(&config, &args, &mut stdout)
        }
        Command::Article(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::article::execute(&config, &args, &mut stdout)
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            commands::check::execute(&config, &mut stdout)
        }
    }
}

/// An explicit `--config` must exist; the default location may be absent,
/// in which case the shipped site is used.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => match Config::load_from_path(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?
        {
            Some(config) => config,
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => match Config::load().context("Failed to load config file")? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            None => {
                log::info!(
                    "No config file at {}, using the built-in site",
                    Config::config_path().display()
                );
                Config::default()
            }
        },
    };

    config.apply_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
