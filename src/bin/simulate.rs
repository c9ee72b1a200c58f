//! Headless dice simulator CLI.
//!
//! Runs the same Monte Carlo engine as the interactive calculator and prints a report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1d6, success on 6, 10000 trials
//!   cargo run --bin simulate -- -s 10 -d 5 --success 8 -e 10
//!   cargo run --bin simulate -- -d 4 -f 1 --seed 42   # Reproducible run with failures on 1

use dice_calculator::calculator::form::parse_number;
use dice_calculator::simulator::{simulate, FailureFaces, SimOptions, SimReport, SimulationConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, options, write_json) = parse_args(&args);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    if options.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║                 DICE CALCULATOR SIMULATOR                     ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        if let Some(seed) = options.seed {
            println!("Seed: {}", seed);
            println!();
        }
    }

    let histogram = simulate(&config, &options);
    let report = SimReport::from_histogram(&config, &histogram);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "dice_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimulationConfig, SimOptions, bool) {
    let mut config = SimulationConfig::default();
    let mut options = SimOptions::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        match (args[i].as_str(), value) {
            ("-s" | "--sides", Some(v)) => {
                config.side_count = parse_number(v);
                i += 1;
            }
            ("-d" | "--dice", Some(v)) => {
                config.dice_count = parse_number(v);
                i += 1;
            }
            ("--success", Some(v)) => {
                config.success_threshold = parse_number(v);
                i += 1;
            }
            ("-e" | "--explode", Some(v)) => {
                config.explode_threshold = parse_number(v);
                i += 1;
            }
            ("-m" | "--max-explosions", Some(v)) => {
                config.max_explosions = parse_number(v);
                i += 1;
            }
            ("-n" | "--trials", Some(v)) => {
                config.trial_count = parse_number(v);
                i += 1;
            }
            ("-f" | "--fail", Some(v)) => {
                config.failure_faces = FailureFaces::parse(v);
                i += 1;
            }
            ("--seed", Some(v)) => {
                options.seed = parse_seed(v);
                i += 1;
            }
            ("--json", _) => {
                write_json = true;
            }
            ("-v" | "--verbose", _) => {
                options.verbosity = 2;
            }
            ("-q" | "--quiet", _) => {
                options.verbosity = 0;
            }
            ("-h" | "--help", _) => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, options, write_json)
}

/// A seed that is not a number is dropped with a warning, so the run uses entropy.
fn parse_seed(value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            eprintln!(
                "Warning: ignoring seed '{}', not a number; using a random seed",
                value
            );
            None
        }
    }
}

fn print_help() {
    println!("Dice Calculator Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --sides <N>           Sides per die (default: 6)");
    println!("    -d, --dice <N>            Dice per roll (default: 1)");
    println!("        --success <N>         Minimum roll for a success (default: 6)");
    println!("    -e, --explode <N>         Minimum roll for exploding, 0 disables (default: 0)");
    println!("    -m, --max-explosions <N>  Bonus rolls per trial, 0 is unlimited (default: 0)");
    println!("    -n, --trials <N>          Number of rolls to simulate (default: 10000)");
    println!("    -f, --fail <LIST>         Comma separated faces that cancel a success");
    println!("        --seed <S>            Random seed for reproducibility");
    println!("        --json                Save JSON report to file");
    println!("    -v, --verbose             Show progress while rolling");
    println!("    -q, --quiet               Only print the report");
    println!("    -h, --help                Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let (config, options, json) = parse_args(&args(&[]));
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(options.seed, None);
        assert_eq!(options.verbosity, 1);
        assert!(!json);
    }

    #[test]
    fn test_all_flags() {
        let (config, options, json) = parse_args(&args(&[
            "-s", "10", "-d", "5", "--success", "8", "-e", "10", "-m", "2", "-n", "500", "-f",
            "1,2", "--seed", "42", "--json", "-v",
        ]));
        assert_eq!(config.side_count, 10);
        assert_eq!(config.dice_count, 5);
        assert_eq!(config.success_threshold, 8);
        assert_eq!(config.explode_threshold, 10);
        assert_eq!(config.max_explosions, 2);
        assert_eq!(config.trial_count, 500);
        assert_eq!(config.failure_faces, FailureFaces::parse("1,2"));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.verbosity, 2);
        assert!(json);
    }

    #[test]
    fn test_non_numeric_values_become_zero() {
        let (config, _, _) = parse_args(&args(&["-d", "many"]));
        assert_eq!(config.dice_count, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 7 "), Some(7));
        assert_eq!(parse_seed("abc"), None);
        assert_eq!(parse_seed("-1"), None);
    }

    #[test]
    fn test_bad_seed_falls_back_to_random() {
        let (config, options, _) = parse_args(&args(&["--seed", "abc", "-d", "3"]));
        assert_eq!(options.seed, None);
        // The value after a bad seed is still consumed, not read as a flag
        assert_eq!(config.dice_count, 3);
    }

    #[test]
    fn test_trailing_flag_without_value_is_ignored() {
        let (config, _, _) = parse_args(&args(&["-q", "-s"]));
        assert_eq!(config.side_count, 6);
    }
}
