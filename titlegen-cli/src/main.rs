use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use titlegen_core::io::{build_output_path, load_chain, read_lines, save_chain};
use titlegen_core::model::{Chain, ChainBuilder, Seed, stream};

mod clean;

/// Generate never-before-seen movie titles from a raw title catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Raw title list to train from (one catalog line per row)
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Number of titles to generate
	#[arg(short = 'n', long, default_value_t = 20)]
	count: usize,

	/// Start every title from this word instead of the chain start
	#[arg(long, value_name = "WORD")]
	seed: Option<String>,

	/// Chain cache location (defaults to the input path with a .bin extension)
	#[arg(long, value_name = "PATH")]
	chain: Option<PathBuf>,

	/// Rebuild the chain even when a cache file exists
	#[arg(long)]
	rebuild: bool,

	/// Give up after this many rejected walks per title instead of retrying forever
	#[arg(long, value_name = "COUNT")]
	max_attempts: Option<usize>,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, global = true, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, global = true, action = ArgAction::Count)]
	quiet: u8,
}

impl Cli {
	fn log_level(&self) -> &'static str {
		match (self.quiet, self.verbose) {
			(q, _) if q >= 2 => "error",
			(1, _) => "warn",
			(_, 0) => "info",
			(_, 1) => "debug",
			_ => "trace",
		}
	}
}

/// Cleans the raw catalog and trains a chain over the distinct titles.
fn build_from_corpus(input: &PathBuf) -> Result<Chain> {
	let lines = read_lines(input)
		.with_context(|| format!("reading corpus {}", input.display()))?;
	info!("cleaning {} catalog lines", lines.len());

	let progress = ProgressBar::new(lines.len() as u64);
	progress.set_style(ProgressStyle::with_template(
		"{msg} [{bar:40}] {pos}/{len}",
	)?);
	progress.set_message("cleaning");

	let mut rejected = 0usize;
	let mut titles: HashSet<String> = HashSet::new();
	for line in &lines {
		match clean::clean_line(line) {
			Some(title) => {
				titles.insert(title);
			}
			None => {
				debug!("could not parse line {line:?}");
				rejected += 1;
			}
		}
		progress.inc(1);
	}
	progress.finish_with_message("cleaned");

	if rejected > 0 {
		warn!("skipped {rejected} unparseable lines");
	}
	info!("training chain over {} distinct titles", titles.len());

	Ok(ChainBuilder::build_parallel(titles.into_iter().collect()))
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

	let cache = match &cli.chain {
		Some(path) => path.clone(),
		None => build_output_path(&cli.input, "bin")?,
	};

	let chain = if cache.exists() && !cli.rebuild {
		info!("loading cached chain from {}", cache.display());
		load_chain(&cache).with_context(|| format!("loading chain {}", cache.display()))?
	} else {
		let chain = build_from_corpus(&cli.input)?;
		save_chain(&chain, &cache)
			.with_context(|| format!("saving chain {}", cache.display()))?;
		info!("saved chain to {}", cache.display());
		chain
	};

	let seed = Seed::from_word(cli.seed);
	let mut titles = stream(&chain, seed);
	if let Some(cap) = cli.max_attempts {
		titles = titles.with_max_attempts(cap);
	}

	let mut printed = 0usize;
	for title in titles.take(cli.count) {
		println!("{}", title.context("generating title")?);
		printed += 1;
	}
	if printed < cli.count {
		warn!(
			"stream ended after {printed} of {} titles (attempt cap reached)",
			cli.count
		);
	}

	Ok(())
}
