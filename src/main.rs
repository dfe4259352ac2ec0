use std::{fs, process::ExitCode};

use clap::Parser;
use intcalc::{error::Error, evaluate, parse};

/// Expression evaluated when none is given on the command line.
const DEFAULT_EXPRESSION: &str = "3 * 5 + 2 * 10";

/// intcalc evaluates integer arithmetic expressions built from `+`, `-`, `*`
/// and `/`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each non-blank line of it.
    #[arg(short, long)]
    file: bool,

    /// Print the fully parenthesized expression tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// The expression to evaluate, or a path when `--file` is set.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        let Some(path) = args.contents.as_deref() else {
            eprintln!("--file needs a path to read expressions from.");
            return ExitCode::FAILURE;
        };
        match fs::read_to_string(path) {
            Ok(contents) => contents.lines()
                                    .filter(|line| !line.trim().is_empty())
                                    .map(str::to_string)
                                    .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents
                 .unwrap_or_else(|| DEFAULT_EXPRESSION.to_string())]
    };

    let mut status = ExitCode::SUCCESS;

    for expression in &expressions {
        if let Err(e) = run(expression, args.tree) {
            eprintln!("{expression}\n{e}");
            status = ExitCode::FAILURE;
        }
    }

    status
}

/// Evaluates one expression and prints its value.
fn run(expression: &str, print_tree: bool) -> Result<(), Error> {
    if print_tree {
        let tree = parse(expression)?;
        println!("{tree}");
        println!("{}", tree.evaluate()?);
    } else {
        println!("{}", evaluate(expression)?);
    }
    Ok(())
}
