use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use json_dot_query::{first, or_default, unique, Evaluator, QueryOptions};
use serde_json::Value;
use tracing::{debug, Level};

/// Query a JSON document with a dot-delimited path such as `data.[].name`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path expression; `[]` visits every array element, `[i]` only the one at --index
    path: String,
    /// Read the document from this file instead of stdin
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Element selected by `[i]` segments (overrides --config)
    #[arg(long, short)]
    index: Option<usize>,
    /// JSON file holding query options, e.g. {"index": 1}
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print only the first match
    #[arg(long)]
    first: bool,
    /// Deduplicate matches
    #[arg(long)]
    unique: bool,
    /// Fallback JSON when nothing matches
    #[arg(long)]
    default: Option<String>,
    /// Log evaluation steps to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(out) => match serde_json::to_string_pretty(&out) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Value, Box<dyn Error>> {
    let mut opts = match &args.config {
        Some(path) => serde_json::from_str::<QueryOptions>(&fs::read_to_string(path)?)?,
        None => QueryOptions::default(),
    };
    if let Some(index) = args.index {
        opts = opts.with_index(index);
    }
    debug!(?opts, "options resolved");

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let data: Value = serde_json::from_str(&text)?;

    let evaluator = Evaluator::new(opts);
    let mut out: Vec<Value> = evaluator.eval(&args.path, &data)?.into_iter().cloned().collect();

    if args.unique {
        out = unique(out);
    }
    if let Some(def) = args.default.as_deref() {
        out = or_default(out, def);
    }
    if args.first {
        return Ok(first(&out));
    }
    Ok(Value::Array(out))
}
