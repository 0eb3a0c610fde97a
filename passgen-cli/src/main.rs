use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use passgen::Generate;
use passgen_cli::{Error, Preset, build_generator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "Generate memorable passwords from composable pipelines")]
struct Args {
    /// Ready-made generator to use (default: xkcd)
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// JSON pipeline definition
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of passwords to print
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Directory of .txt documents for the phrases preset
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Word list for the xkcd preset. The file is split on any character that
    /// is not alphanumeric and words of three characters or fewer are dropped
    #[arg(long)]
    words: Option<PathBuf>,

    /// Keep generating on each Enter until `exit` is typed
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let generator = build_generator(
        args.preset,
        args.config.as_deref(),
        args.corpus.as_deref(),
        args.words.as_deref(),
    )?;
    info!(generator = %generator, "generator ready");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut stdout = io::stdout().lock();
    for password in generator.generate_multiple(&mut rng, args.count)? {
        writeln!(stdout, "{password}")?;
    }

    if args.interactive {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 || line.trim() == "exit" {
                break;
            }
            for password in generator.generate_multiple(&mut rng, args.count)? {
                writeln!(stdout, "{password}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_words_help_describes_parsing() {
        let command = Args::command();
        let words = command
            .get_arguments()
            .find(|arg| arg.get_id() == "words")
            .unwrap();
        let help = words.get_help().unwrap().to_string();
        assert!(help.contains("not alphanumeric"), "{help}");
        assert!(help.contains("three characters or fewer"), "{help}");
    }
}
