//! Contains duplicate driver
//!
//! Usage: contains_duplicate [options] [<nums>]
//!
//! Options:
//!   --strategy <NAME>  Strategy to run, or `all` (default: FxHashSet seen-set)
//!   --time             Print elapsed time per call
//!   --help, -h         Show help
//!
//! Example: contains_duplicate --strategy all "1,2,3,1"

use arrays_hashing::DuplicateStrategy;
use arrays_hashing::app::demo::{run_contains_duplicate_cases, run_contains_duplicate_demo};
use arrays_hashing::domain::input::parse_int_list;
use std::env;
use std::io::{self, Write};

struct Args {
    strategies: Vec<DuplicateStrategy>,
    timed: bool,
    values: Option<Vec<i64>>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [<nums>]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <nums>             Integers, e.g. \"1,2,3,1\" (default: demo cases)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strategy <NAME>  Strategy to run, or `all`");
    eprintln!("  --time             Print elapsed time per call");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    let names: Vec<&str> = DuplicateStrategy::ALL.iter().map(|s| s.name()).collect();
    eprintln!("Strategies: {}", names.join(", "));
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut strategies = vec![DuplicateStrategy::default()];
    let mut timed = false;
    let mut values: Option<Vec<i64>> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                i += 1;
                let name = args.get(i).ok_or("--strategy requires a value")?;
                strategies = if name == "all" {
                    DuplicateStrategy::ALL.to_vec()
                } else {
                    vec![name.parse::<DuplicateStrategy>().map_err(|e| e.to_string())?]
                };
            }
            "--time" => timed = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if values.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                values = Some(parse_int_list(arg).map_err(|e| e.to_string())?);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        strategies,
        timed,
        values,
    })
}

fn run(args: &Args) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for &strategy in &args.strategies {
        if args.strategies.len() > 1 {
            writeln!(out, "== {} ==", strategy.name())?;
        }

        match &args.values {
            Some(values) => run_contains_duplicate_cases(
                &mut out,
                strategy,
                std::slice::from_ref(values),
                args.timed,
            )?,
            None => run_contains_duplicate_demo(&mut out, strategy, args.timed)?,
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
