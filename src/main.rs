//! svbed: convert structural-variant VCF to BED
//!
//! Usage: svbed [OPTIONS] [VCF]

use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use svbed::commands::{ConvertCommand, ConvertStats};
use svbed::config::ConvertOptions;
use svbed::error::ConvertError;

#[derive(Parser)]
#[command(name = "svbed")]
#[command(version)]
#[command(about = "Convert structural-variant VCF to BED", long_about = None)]
struct Cli {
    /// VCF input (use - for stdin; default: stdin)
    vcf: Option<PathBuf>,

    /// Represent INV as two breakend lines
    #[arg(short = 'm', long)]
    inv_multi: bool,

    /// For BND variants, use the EVENT field for column 4 (required on every BND)
    #[arg(short = 'e', long)]
    event_id: bool,

    /// For BND variants, print the span to the mate and add BND_DETAIL to INFO
    #[arg(short = 'b', long, alias = "bnd_span")]
    bnd_span: bool,

    /// Print conversion statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Refuse to block on an interactive terminal when no input was given.
    if cli.vcf.is_none() && io::stdin().is_terminal() {
        eprintln!("{}", Cli::command().render_help());
        process::exit(1);
    }

    let options = ConvertOptions::new()
        .with_inv_multi(cli.inv_multi)
        .with_event_id(cli.event_id)
        .with_bnd_span(cli.bnd_span);

    match run_convert(cli.vcf, options) {
        Ok(stats) => {
            if cli.stats {
                eprintln!("Convert stats: {}", stats);
            }
        }
        // Downstream consumer closed the pipe (e.g. `| head`).
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_convert(input: Option<PathBuf>, options: ConvertOptions) -> Result<ConvertStats, ConvertError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let cmd = ConvertCommand::with_options(options);

    match input {
        Some(path) if path.to_string_lossy() != "-" => cmd.run(&path, &mut handle),
        _ => cmd.run_stdin(&mut handle),
    }
}
