use std::fmt;
use std::path::PathBuf;

use storage::repository::InMemoryCatalog;
use storage::seed::mock_catalog;

#[derive(Debug, Clone)]
struct Args {
    out: Option<PathBuf>,
    learner: Option<String>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLearner { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLearner { raw } => write!(f, "invalid --learner value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut out = None;
        let mut learner = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    out = Some(PathBuf::from(require_value(&mut args, "--out")?));
                }
                "--learner" => {
                    let value = require_value(&mut args, "--learner")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLearner { raw: value });
                    }
                    learner = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { out, learner })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Writes the built-in dashboard catalog as JSON, ready for `app --catalog`.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <path>              Write to a file instead of stdout");
    eprintln!("  --learner <name>          Override the learner name (default: Alex)");
    eprintln!("  -h, --help                Show this help");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut record = mock_catalog();
    if let Some(name) = args.learner {
        record.profile.name = name;
    }

    // Refuse to write something the app would reject on load.
    InMemoryCatalog::from_record(record.clone())?;

    let json = serde_json::to_string_pretty(&record)?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)?;
            eprintln!("wrote catalog to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
