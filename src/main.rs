//! corpus-hist - Main Entry Point
//!
//! Extracts one value per JSON file under a directory and shows the
//! distribution of the values as a histogram.

use anyhow::Context;
use clap::Parser;
use corpus_hist::{
    config::RunConfig,
    frontend::{HistogramRenderer, TextRenderer, WindowRenderer},
    pipeline::{self, ExtractionPipeline},
    CorpusHistError, Dataset,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Plot the distribution of one field across a tree of JSON result files.
#[derive(Parser, Debug)]
#[command(name = "corpus-hist", version, about)]
pub struct Cli {
    /// Corpus root directory or single file (default: build/out)
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// Accessor expression, e.g. "['s'][0]['c']" or ".s[0].c"
    #[arg(value_name = "ACCESSOR")]
    accessor: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of histogram bins (overrides config)
    #[arg(short, long)]
    bins: Option<usize>,

    /// Print the histogram as text instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Don't print the extracted values
    #[arg(long)]
    no_dump: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let directive = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn,corpus_hist=info",
            (false, 1) => "warn,corpus_hist=debug",
            (false, _) => "warn,corpus_hist=trace",
        };
        EnvFilter::new(directive)
    }

    /// Defaults, then the config file, then command line values
    fn resolve_config(&self) -> corpus_hist::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(root) = &self.root {
            config = config.with_root(root);
        }
        if let Some(accessor) = &self.accessor {
            config = config.with_accessor(accessor);
        }
        if let Some(bins) = self.bins {
            config = config.with_bins(bins);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(cli.log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let dataset = ExtractionPipeline::from_config(&config)?.run()?;

    if !cli.no_dump {
        dump(&dataset).context("Failed to print extracted values")?;
    }

    let mut renderer: Box<dyn HistogramRenderer> = if cli.headless {
        Box::new(TextRenderer::new(std::io::stdout(), config.histogram.clone()))
    } else {
        Box::new(WindowRenderer::new(config.histogram.clone()))
    };
    pipeline::render(&dataset, &config, renderer.as_mut())?;
    Ok(())
}

/// Print the values as one JSON array, in traversal order
fn dump(dataset: &Dataset) -> anyhow::Result<()> {
    let values = dataset.numeric_values()?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer(&mut out, &values)?;
    writeln!(out)?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<CorpusHistError>() {
        Some(e) => {
            eprintln!("error[{}]: {}", e.kind(), e);
            if e.is_accessor_failure() {
                eprintln!("note: the accessor does not fit the structure of this document");
            }
        }
        None => eprintln!("error: {:#}", err),
    }
}
