use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use dep_compress::config::CompressionConfig;
use dep_compress::document::{load_parsed_dir, load_text_dir, CommandParser};
use dep_compress::index::TfIdfIndex;
use dep_compress::pipeline::{
    original_path, write_report, CompressionSink, FilePairSink, Pipeline, WriterSink,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// One compressed line per input sentence
    Sentence,
    /// One block per document under a shared budget
    Document,
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compress parsed text by pruning low-salience dependency subtrees"
)]
struct Cli {
    /// Directory of `.conll` parses, or `.txt` files with --raw
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Read `.txt` files and parse them with --parser-cmd
    #[arg(long, requires = "parser_cmd")]
    raw: bool,

    /// Parser program reading text on stdin and writing parses to stdout
    #[arg(long, value_name = "PROGRAM")]
    parser_cmd: Option<PathBuf>,

    /// Extra arguments for the parser program
    #[arg(long = "parser-arg", value_name = "ARG")]
    parser_args: Vec<String>,

    /// Working directory for the parser program
    #[arg(long, value_name = "DIR", requires = "parser_cmd")]
    parser_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Retention rate in (0, 1); overrides the configuration file
    #[arg(short, long)]
    rate: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = Mode::Sentence)]
    mode: Mode,

    /// Write compressed lines here and originals to `<FILE>.orig` instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dep_compress=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = CompressionConfig::resolve(cli.config.as_deref(), cli.rate)
        .context("resolving configuration")?;

    let loaded = if cli.raw {
        let program = cli
            .parser_cmd
            .clone()
            .context("--raw needs --parser-cmd")?;
        let mut parser = CommandParser::new(program, cli.parser_args.clone());
        if let Some(dir) = &cli.parser_dir {
            parser = parser.with_current_dir(dir);
        }
        load_text_dir(&cli.input, &parser)
    } else {
        load_parsed_dir(&cli.input)
    };
    let corpus = loaded.with_context(|| format!("loading corpus from {}", cli.input.display()))?;

    let index = TfIdfIndex::build(&corpus);
    let pipeline = Pipeline::new(&corpus, &index, &config);

    let mut sink: Box<dyn CompressionSink> = match &cli.output {
        Some(path) => {
            info!(
                compressed = %path.display(),
                original = %original_path(path).display(),
                "Writing output files"
            );
            Box::new(FilePairSink::create(path)?)
        }
        None => Box::new(WriterSink::new(io::stdout().lock())),
    };

    let report = match cli.mode {
        Mode::Sentence => pipeline.compress_sentences(sink.as_mut())?,
        Mode::Document => pipeline.compress_documents(sink.as_mut())?,
    };

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }

    Ok(())
}
