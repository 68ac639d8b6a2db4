use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, warn};

use glypho::environment::FileConfig;
use glypho::{parse, Environment, GlyphoError, Machine};

const EXIT_INVALID_ARGUMENTS: i32 = -100;

#[derive(Parser)]
#[command(version, about = "Runs a Glypho program")]
struct Cli {
    /// Path of the program to run
    program: PathBuf,

    /// Numeric base used for input and output, 2 to 36
    base: Option<u32>,

    /// TOML file with default settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the stack after every instruction
    #[arg(long)]
    dump: bool,

    /// Print the program in `.glh` symbolic notation instead of running it
    #[arg(long)]
    symbolic: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            process::exit(EXIT_INVALID_ARGUMENTS);
        }
    };

    env_logger::Builder::new()
        .filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{:#}", err);
            process::exit(EXIT_INVALID_ARGUMENTS);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let environment = Environment::resolve(&cli.program, cli.base, cli.dump, &file_config)?;
    debug!("{:?}", environment);

    let source = fs::read_to_string(environment.program_path())
        .with_context(|| format!("cannot read `{}`", environment.program_path().display()))?;
    let program = match parse(&source) {
        Ok(program) => program,
        Err(err) => return Ok(report(&err)),
    };

    if cli.symbolic {
        println!("{}", program);
        return Ok(0);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut machine = Machine::new(environment, stdin.lock(), BufWriter::new(stdout.lock()));
    match machine.run(&program) {
        Ok(()) => Ok(0),
        Err(err) => Ok(report(&err)),
    }
}

fn report(err: &GlyphoError) -> i32 {
    warn!("{}", err);
    eprintln!("{}", err.status_line());
    err.exit_code()
}
