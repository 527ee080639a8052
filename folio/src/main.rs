//! Folio CLI - render the portfolio hero section to static HTML
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use folio_core::{default_words, render_page, RenderConfig, WordList};
use owo_colors::OwoColorize as _;
use std::fs;
use std::io::{self, IsTerminal as _, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Render a portfolio hero section to static HTML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the hero section
    Render {
        /// JSON word list (defaults to the built-in words)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the section markup
        #[arg(long)]
        fragment: bool,

        /// Document title
        #[arg(long, default_value = "Portfolio")]
        title: String,

        /// Stylesheet href to link; repeatable
        #[arg(long = "stylesheet")]
        stylesheets: Vec<String>,
    },
    /// Validate a word list file
    Check {
        /// JSON word list
        file: PathBuf,
    },
    /// Print the built-in word list as JSON
    Words,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
    debug!("Command line arguments: {:?}", cli);

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            words,
            output,
            fragment,
            title,
            stylesheets,
        } => {
            let mut config = RenderConfig::new().with_title(title).with_fragment(fragment);
            if let Some(path) = words {
                config = config.with_words_path(path);
            }
            if !stylesheets.is_empty() {
                config = config.with_stylesheets(stylesheets);
            }

            let html = render_page(&config).context("Failed to render hero section")?;
            write_output(&html, output.as_ref())
        }
        Command::Check { file } => {
            let words = WordList::load(&file)
                .with_context(|| format!("Invalid word list {}", file.display()))?;

            println!(
                "{} {} ({} entries)",
                "OK".green().bold(),
                file.display(),
                words.len()
            );
            for (i, word) in words.iter().enumerate() {
                println!("  {:>2}. {} {}", i + 1, word.label, word.icon_ref.dimmed());
            }
            Ok(())
        }
        Command::Words => {
            let words = default_words()?;
            println!("{}", serde_json::to_string_pretty(&words)?);
            Ok(())
        }
    }
}

fn write_output(html: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            if !html.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
