use std::{fs::File, io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;

use geno_demux::{io, parallel, solver};

/// Resolve per-sample genotypes from pooled mixture results.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Input file; reads standard input when omitted
    input: Option<PathBuf>,

    /// Output file; writes standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resolve test cases on this many worker threads
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut input: Box<dyn Read> = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(std::io::stdin()),
    };

    let cases = match io::read_cases(&mut input) {
        Ok(cases) => cases,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let resolutions = match cli.threads {
        Some(n) => parallel::resolve_all(cases, Some(n)),
        None => cases.iter().map(solver::resolve).collect(),
    };

    let written = match &cli.output {
        Some(path) => {
            File::create(path).and_then(|mut file| io::write_report(&mut file, &resolutions))
        }
        None => io::write_report(&mut std::io::stdout(), &resolutions),
    };

    if let Err(err) = written {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
