use std::fs;

use calculator::{
    evaluate_all,
    interpreter::evaluator::core::{Context, OverflowPolicy},
};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// calc evaluates integer arithmetic, one expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the value of every expression instead of only the last one.
    #[arg(short, long)]
    pipe_mode: bool,

    /// What to do when a result does not fit in 64 bits.
    #[arg(long, value_enum, default_value_t = Overflow::Checked)]
    overflow: Overflow,

    /// Log parsed trees and results to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Overflow {
    /// Report an error.
    Checked,
    /// Wrap around.
    Wrapping,
}

impl From<Overflow> for OverflowPolicy {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::Checked => Self::Checked,
            Overflow::Wrapping => Self::Wrapping,
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let context = Context::new().with_overflow(args.overflow.into());

    match evaluate_all(&script, &context) {
        Ok(values) => {
            if args.pipe_mode {
                for value in &values {
                    println!("{value}");
                }
            } else if let Some(value) = values.last() {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
