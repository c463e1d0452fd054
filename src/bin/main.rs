use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use langfreq::config::RunConfig;
use langfreq::wikipedia::WikipediaCorpus;
use langfreq::{collect_corpus, Classifier, CorpusProvider, DirectoryCorpus, ScoreDistribution};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Guess the language of a text by comparing it with reference corpora.
#[derive(Parser, Debug)]
#[command(name = "langfreq", version)]
struct Cli {
    /// JSON run configuration; flags below override it
    #[arg(long, env = "LANGFREQ_CONFIG")]
    config: Option<PathBuf>,

    /// Candidate language codes, comma separated
    #[arg(long, value_delimiter = ',')]
    langs: Option<Vec<String>>,

    /// Reference documents per language
    #[arg(long)]
    count: Option<usize>,

    /// Character window of the n-gram model
    #[arg(long)]
    ngram: Option<usize>,

    /// Read reference documents from <DIR>/<lang>/* instead of Wikipedia
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Classify the contents of this file
    #[arg(long, conflicts_with_all = ["stdin", "sample_lang"])]
    text: Option<PathBuf>,

    /// Classify text read from standard input
    #[arg(long, conflicts_with = "sample_lang")]
    stdin: bool,

    /// Classify a random Wikipedia page in this language
    #[arg(long)]
    sample_lang: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    word_frequency: &'a ScoreDistribution,
    ngram: &'a ScoreDistribution,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    config.validate()?;

    let wikipedia = WikipediaCorpus::new(Duration::from_secs(config.timeout_secs));
    let corpus = match &cli.corpus_dir {
        Some(dir) => collect_corpus(&DirectoryCorpus::new(dir), &config.langs, config.count),
        None => collect_corpus(&wikipedia, &config.langs, config.count),
    };

    let text = unknown_text(&cli, &config, &wikipedia)?;

    let word_model = Classifier::word_frequency(&corpus);
    let ngram_model = Classifier::ngram_frequency(&corpus, config.ngram_length)?;
    let word_result = word_model.result(&text);
    let ngram_result = ngram_model.result(&text);

    if cli.json {
        let report = Report {
            word_frequency: &word_result,
            ngram: &ngram_result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result("Word frequency", &word_result);
        print_result(&format!("{}-gram frequency", config.ngram_length), &ngram_result);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(langs) = &cli.langs {
        config.langs = langs.clone();
    }
    if let Some(count) = cli.count {
        config.count = count;
    }
    if let Some(n) = cli.ngram {
        config.ngram_length = n;
    }
    if let Some(lang) = &cli.sample_lang {
        config.sample_lang = lang.clone();
    }
    Ok(config)
}

fn unknown_text(cli: &Cli, config: &RunConfig, wikipedia: &WikipediaCorpus) -> Result<String> {
    if let Some(path) = &cli.text {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    if cli.stdin {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
        return Ok(text);
    }
    match wikipedia.fetch(&config.sample_lang, 1).pop() {
        Some(text) => Ok(text),
        None => bail!("could not fetch a sample page in '{}'", config.sample_lang),
    }
}

fn print_result(title: &str, result: &ScoreDistribution) {
    println!("{}", title.bold());
    let best = result.best().map(|(lang, _)| lang);
    for (lang, share) in result.iter() {
        let line = format!("  {lang:>6}  {share:>5.1}%");
        if Some(lang) == best {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
}
