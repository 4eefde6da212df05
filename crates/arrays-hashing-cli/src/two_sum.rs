//! Two sum driver
//!
//! Usage: two_sum [options] [<nums> <target>]
//!
//! Options:
//!   --strategy <NAME>  Strategy to run, or `all` (default: fastest linear variant)
//!   --time             Print elapsed time per call
//!   --help, -h         Show help
//!
//! Example: two_sum --strategy brute-force "2,7,11,15" 9

use arrays_hashing::TwoSumStrategy;
use arrays_hashing::app::demo::{run_two_sum_cases, run_two_sum_demo};
use arrays_hashing::domain::input::{parse_int, parse_int_list};
use std::env;
use std::io::{self, Write};

struct Args {
    strategies: Vec<TwoSumStrategy>,
    timed: bool,
    case: Option<(Vec<i64>, i64)>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [<nums> <target>]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <nums>             Integers, e.g. \"2,7,11,15\" (default: demo cases)");
    eprintln!("  <target>           Target sum");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strategy <NAME>  Strategy to run, or `all`");
    eprintln!("  --time             Print elapsed time per call");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    let names: Vec<&str> = TwoSumStrategy::ALL.iter().map(|s| s.name()).collect();
    eprintln!("Strategies: {}", names.join(", "));
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut strategies = vec![TwoSumStrategy::default()];
    let mut timed = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                i += 1;
                let name = args.get(i).ok_or("--strategy requires a value")?;
                strategies = if name == "all" {
                    TwoSumStrategy::ALL.to_vec()
                } else {
                    vec![name.parse::<TwoSumStrategy>().map_err(|e| e.to_string())?]
                };
            }
            "--time" => timed = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            // Negative numbers are values, not options
            arg if !arg.starts_with("--") => positional.push(arg),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let case = match positional.as_slice() {
        [] => None,
        [nums, target] => Some((
            parse_int_list(nums).map_err(|e| e.to_string())?,
            parse_int(target).map_err(|e| e.to_string())?,
        )),
        _ => return Err("Expected both <nums> and <target>, or neither".to_string()),
    };

    Ok(Args {
        strategies,
        timed,
        case,
    })
}

fn run(args: &Args) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for &strategy in &args.strategies {
        if args.strategies.len() > 1 {
            writeln!(out, "== {} ==", strategy.name())?;
        }

        match &args.case {
            Some(case) => {
                run_two_sum_cases(&mut out, strategy, std::slice::from_ref(case), args.timed)?
            }
            None => run_two_sum_demo(&mut out, strategy, args.timed)?,
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
