use std::process::ExitCode;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use splitcalc::{
    session::{PROMPT, Session},
    util::num::{DEFAULT_PRECISION, MAX_PRECISION},
};
use tracing_subscriber::EnvFilter;

/// splitcalc is an interactive calculator for expressions built from
/// non-negative numbers and the operators + - * /.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of significant digits printed for results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION,
          value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_PRECISION)))]
    precision: u8,

    /// Do not print the welcome message.
    #[arg(short, long)]
    quiet: bool,

    /// Also print how each expression was split.
    #[arg(long)]
    explain: bool,

    /// Evaluate this expression once and exit instead of prompting.
    expression: Option<String>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_env_filter(filter)
                             .init();

    let args = Args::parse();
    let session = Session::new().with_precision(args.precision)
                                .with_explain(args.explain);

    if let Some(expression) = args.expression {
        let response = session.respond(&expression);
        if !response.is_quit() {
            println!("{response}");
        }
        return Ok(if response.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    if !args.quiet {
        println!("{}", Session::banner());
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        println!();
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;

                let response = session.respond(&line);
                if response.is_quit() {
                    break;
                }
                println!("{response}");
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(ExitCode::SUCCESS)
}
