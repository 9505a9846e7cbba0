use anyhow::{Context, Result};
use clap::Parser;
use inert_html_config::Config;
use inert_html_engine::generator::{
    GenerateOptions, Generator, OverwritePolicy, OverwritePrompt, Template, is_affirmative,
    resolve_target,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "inert-html", version)]
#[command(about = "Generate static HTML pages from markdown")]
struct Cli {
    /// Markdown file or directory of markdown files
    source: PathBuf,

    /// Do not overwrite an existing file
    #[arg(short = 'n', long)]
    no_clobber: bool,

    /// Prompt before overwrite
    #[arg(short, long)]
    interactive: bool,

    /// Process directories and their contents recursively
    #[arg(short, long)]
    recursive: bool,

    /// Explain what is being done
    #[arg(short, long)]
    verbose: bool,

    /// Write non-index pages to <name>/index.html
    #[arg(long)]
    pages_as_dirs: bool,

    /// Copy non-markdown files into the output directory
    #[arg(long)]
    copy_assets: bool,

    /// Write output to file/directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// HTML template for parsed markdown
    #[arg(short, long, value_name = "TEMPLATE")]
    template: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

/// Command-line flags merged over the config file.
#[derive(Debug, Default, PartialEq, Eq)]
struct Settings {
    template: Option<PathBuf>,
    options: GenerateOptions,
}

impl Settings {
    fn merge(cli: &Cli, config: Config) -> Self {
        let no_clobber = cli.no_clobber || config.no_clobber;
        let interactive = cli.interactive || config.interactive;
        Self {
            template: cli.template.clone().or(config.template),
            options: GenerateOptions {
                overwrite: OverwritePolicy::from_flags(no_clobber, interactive),
                recursive: cli.recursive || config.recursive,
                pages_as_dirs: cli.pages_as_dirs || config.pages_as_dirs,
                copy_assets: cli.copy_assets || config.copy_assets,
            },
        }
    }
}

/// Asks on stderr and reads the answer from stdin.
struct StdinPrompt;

impl OverwritePrompt for StdinPrompt {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "inert-html: overwrite '{}'? ", path.display())?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    // RUST_LOG takes precedence over the flag.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            let config_path = Config::config_path();
            log::debug!("Config path: {}", config_path.display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, config);

    let template = match &settings.template {
        Some(path) => Template::load(path)?,
        None => Template::default(),
    };

    let target = resolve_target(&cli.source, cli.output.as_deref())
        .with_context(|| format!("Cannot generate from {}", cli.source.display()))?;

    let summary = Generator::new(template, settings.options, StdinPrompt).generate(&target)?;
    log::info!(
        "Done: {} written, {} skipped, {} copied",
        summary.written,
        summary.skipped,
        summary.copied
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("inert-html: {e:#}");
        process::exit(1);
    }
}
