use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use mailcheck::cli::output::{self, CheckedEmail, OutputFormat};
use mailcheck::{cli, Config, DistanceKind, MailChecker};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mailcheck")]
#[command(version, about = "Suggest corrections for mistyped email addresses", long_about = None)]
struct Cli {
    /// Email addresses to check
    #[arg(value_name = "EMAILS")]
    emails: Vec<String>,

    /// Read addresses from a file, one per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if suggestions are found
    #[arg(long)]
    no_fail: bool,

    /// Configuration file (overrides global and local config)
    #[arg(short, long, env = "MAILCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Distance function (sift3, sift4)
    #[arg(long)]
    distance: Option<DistanceKind>,

    /// Known full domain (repeat to replace the configured list)
    #[arg(long = "domain", value_name = "DOMAIN")]
    domains: Vec<String>,

    /// Known second-level domain (repeat to replace the configured list)
    #[arg(long = "second-level", value_name = "NAME")]
    second_level_domains: Vec<String>,

    /// Known top-level domain (repeat to replace the configured list)
    #[arg(long = "top-level", value_name = "SUFFIX")]
    top_level_domains: Vec<String>,

    /// Maximum distance for a full-domain correction
    #[arg(long)]
    domain_threshold: Option<f64>,

    /// Maximum distance for a second-level correction
    #[arg(long)]
    second_level_threshold: Option<f64>,

    /// Maximum distance for a top-level correction
    #[arg(long)]
    top_level_threshold: Option<f64>,

    /// Log matching decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the global and local configuration file locations
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::logger::init(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "mailcheck", &mut io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let mut emails = cli.emails.clone();
    if let Some(path) = &cli.input {
        emails.extend(cli::input::read_emails(path)?);
    }
    if emails.is_empty() {
        anyhow::bail!("No email addresses specified. Use --help for usage information.");
    }

    let checker = MailChecker::new(&config);
    let results: Vec<CheckedEmail> = emails
        .into_par_iter()
        .map(|email| {
            let suggestion = checker.run(&email).into_suggestion();
            CheckedEmail { email, suggestion }
        })
        .collect();

    let colored = !cli.no_color;
    output::print_results(&results, colored, &cli.format)?;

    let total_suggested = output::suggestion_count(&results);
    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(total_suggested, results.len(), colored);
    }

    if total_suggested > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Layer config files, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(distance) = cli.distance {
        config.distance = distance;
    }
    if !cli.domains.is_empty() {
        config.domains = cli.domains.clone();
    }
    if !cli.second_level_domains.is_empty() {
        config.second_level_domains = cli.second_level_domains.clone();
    }
    if !cli.top_level_domains.is_empty() {
        config.top_level_domains = cli.top_level_domains.clone();
    }
    if let Some(threshold) = cli.domain_threshold {
        config.domain_threshold = threshold;
    }
    if let Some(threshold) = cli.second_level_threshold {
        config.second_level_threshold = threshold;
    }
    if let Some(threshold) = cli.top_level_threshold {
        config.top_level_threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                print!("{}", config.to_toml_string()?);
            }
            ConfigCommands::Path => {
                if let Some(global) = Config::global_config_path() {
                    println!("global: {}", global.display());
                }
                println!("local:  {}", Config::local_config_path().display());
            }
        },
    }
    Ok(())
}
