use std::{collections::HashMap, fs};

use clap::Parser;
use rpnexpr::{Bindings, evaluate, to_rpn};

/// rpnexpr converts an infix boolean/arithmetic expression to Reverse Polish
/// Notation and evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpnexpr to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the RPN token sequence, one token per line, before the result.
    #[arg(short, long)]
    rpn: bool,

    /// Binds a variable, e.g. `--var a=10`. `true` and `false` bind as 1 and
    /// 0. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    contents: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }

    let value = match value.trim() {
        "true" => 1.0,
        "false" => 0.0,
        other => other.parse()
                      .map_err(|_| format!("'{other}' is not a number"))?,
    };
    Ok((name.to_string(), value))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.rpn {
        match to_rpn(&source) {
            Ok(rpn) => {
                for token in &rpn {
                    println!("{} {}", token.kind, token.text);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    let values: HashMap<String, f64> = args.vars.into_iter().collect();
    match evaluate(&source, &Bindings::numeric(&values)) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
