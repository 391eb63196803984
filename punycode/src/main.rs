//! Command-line interface for Punycode encoding/decoding.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// punycode - Convert Unicode labels to and from Punycode (RFC 3492)
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print results as U+XXXX code points instead of text
    #[arg(short, long, global = true)]
    code_points: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode strings (reads lines from stdin when none are given)
    Encode {
        /// Strings to encode
        inputs: Vec<String>,
    },
    /// Decode Punycode strings without the xn-- prefix (reads stdin when none are given)
    Decode {
        /// Strings to decode
        inputs: Vec<String>,
    },
}

impl Command {
    fn action(&self) -> &'static str {
        match self {
            Command::Encode { .. } => "encoding",
            Command::Decode { .. } => "decoding",
        }
    }

    fn inputs(&self) -> &[String] {
        match self {
            Command::Encode { inputs } | Command::Decode { inputs } => inputs,
        }
    }

    fn convert(&self, input: &str) -> punycode::Result<Vec<u32>> {
        let cps: Vec<u32> = input.chars().map(u32::from).collect();
        match self {
            Command::Encode { .. } => punycode::encode(&cps),
            Command::Decode { .. } => punycode::decode(&cps),
        }
    }
}

/// Render a result as text, or as `U+XXXX` values when asked to.
///
/// Surrogates cannot be printed as text; only `U+XXXX` output shows them.
fn render(cps: &[u32], code_points: bool) -> punycode::Result<String> {
    if code_points {
        return Ok(cps
            .iter()
            .map(|cp| format!("U+{:04X}", cp))
            .collect::<Vec<_>>()
            .join(" "));
    }

    cps.iter()
        .map(|&cp| char::from_u32(cp).ok_or(punycode::Error::NotScalarValue(cp)))
        .collect()
}

fn run_line(args: &Args, out: &mut impl Write, input: &str) -> Result<(), String> {
    let action = args.command.action();
    let rendered = args
        .command
        .convert(input)
        .and_then(|converted| {
            log::debug!("{} -> {} code points", input, converted.len());
            render(&converted, args.code_points)
        })
        .map_err(|e| match e {
            punycode::Error::NotScalarValue(_) => format!(
                "Error {} '{}': {} (use --code-points to print it)",
                action, input, e
            ),
            e => format!("Error {} '{}': {}", action, input, e),
        })?;
    writeln!(out, "{}", rendered).map_err(|e| format!("Error writing output: {}", e))
}

fn run(args: &Args) -> Result<(), String> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if !args.command.inputs().is_empty() {
        for input in args.command.inputs() {
            run_line(args, &mut stdout, input)?;
        }
        return Ok(());
    }

    // Read from stdin
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Error reading input: {}", e))?;
        run_line(args, &mut stdout, &line)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
