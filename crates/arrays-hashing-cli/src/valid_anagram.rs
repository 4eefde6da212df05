//! Valid anagram driver
//!
//! Usage: valid_anagram [options] [<s> <t>]
//!
//! Options:
//!   --strategy <NAME>  Strategy to run, or `all` (default: counting array)
//!   --time             Print elapsed time per call
//!   --help, -h         Show help
//!
//! Example: valid_anagram listen silent

use arrays_hashing::AnagramStrategy;
use arrays_hashing::app::demo::{run_anagram_cases, run_anagram_demo};
use std::env;
use std::io::{self, Write};

struct Args {
    strategies: Vec<AnagramStrategy>,
    timed: bool,
    pair: Option<(String, String)>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [<s> <t>]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <s> <t>            Strings to compare (default: demo cases)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strategy <NAME>  Strategy to run, or `all`");
    eprintln!("  --time             Print elapsed time per call");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    let names: Vec<&str> = AnagramStrategy::ALL.iter().map(|s| s.name()).collect();
    eprintln!("Strategies: {}", names.join(", "));
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut strategies = vec![AnagramStrategy::default()];
    let mut timed = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                i += 1;
                let name = args.get(i).ok_or("--strategy requires a value")?;
                strategies = if name == "all" {
                    AnagramStrategy::ALL.to_vec()
                } else {
                    vec![name.parse::<AnagramStrategy>().map_err(|e| e.to_string())?]
                };
            }
            "--time" => timed = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let pair = match <[String; 2]>::try_from(positional) {
        Ok([s, t]) => Some((s, t)),
        Err(rest) if rest.is_empty() => None,
        Err(_) => return Err("Expected both <s> and <t>, or neither".to_string()),
    };

    Ok(Args {
        strategies,
        timed,
        pair,
    })
}

fn run(args: &Args) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for &strategy in &args.strategies {
        if args.strategies.len() > 1 {
            writeln!(out, "== {} ==", strategy.name())?;
        }

        match &args.pair {
            Some(pair) => {
                run_anagram_cases(&mut out, strategy, std::slice::from_ref(pair), args.timed)?
            }
            None => run_anagram_demo(&mut out, strategy, args.timed)?,
        };
    }

    out.flush()
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
