use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{ArgAction, Parser, Subcommand};
use recognizer::{
    errors::errors::RecordError,
    lexer::lexer::tokenize,
    parser::parser::recognize,
    records::records::{read_records, read_source, write_records, write_verdict},
};
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recognizer")]
#[command(about = "Tokenizes and recognizes single-function source files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Raise log verbosity (-v debug, -vv trace)")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Write the token records of a source file")]
    Tokenize {
        #[arg(help = "Source file to tokenize")]
        input: PathBuf,
        #[arg(help = "File to write token records to")]
        output: PathBuf,
    },

    #[command(about = "Recognize a token record file and write the verdict")]
    Recognize {
        #[arg(help = "Token record file produced by `tokenize`")]
        input: PathBuf,
        #[arg(help = "File to write the verdict line to")]
        output: PathBuf,
    },

    #[command(about = "Tokenize and recognize a source file, printing the verdict")]
    Check {
        #[arg(help = "Source file to check")]
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recognizer={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(command: Command) -> Result<(), RecordError> {
    let start = Instant::now();

    match command {
        Command::Tokenize { input, output } => {
            let source = read_source(&input)?;
            let tokens = tokenize(&source);
            write_records(&tokens, BufWriter::new(File::create(&output)?))?;
            debug!(elapsed = ?start.elapsed(), "tokenize done");
        }
        Command::Recognize { input, output } => {
            let tokens = read_records(BufReader::new(File::open(&input)?))?;
            let verdict = recognize(tokens);
            write_verdict(&verdict, BufWriter::new(File::create(&output)?))?;
            debug!(elapsed = ?start.elapsed(), "recognize done");
        }
        Command::Check { input } => {
            let source = read_source(&input)?;
            let verdict = recognize(tokenize(&source));
            write_verdict(&verdict, io::stdout().lock())?;
            debug!(elapsed = ?start.elapsed(), "check done");
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        error!(kind = err.get_error_name(), "command failed");
        eprintln!("Error: {}", err);
        process::exit(2);
    }
}
