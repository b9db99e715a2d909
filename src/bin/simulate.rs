//! Battle balance simulator CLI.
//!
//! Run Monte Carlo battle simulations to analyze combat balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 battles at level 3
//!   cargo run --bin simulate -- -n 100 -e 5      # 100 battles vs level-5 enemies
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use skirmish::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Battles:        {}", config.num_battles);
    println!("  Party Level:    {}", config.party_level);
    println!("  Enemy Level:    {}", config.enemy_level);
    println!("  Enemy Count:    {}", config.enemy_count);
    println!("  Turn Cap:       {}", config.max_turns_per_battle);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--battles" => {
                if i + 1 < args.len() {
                    config.num_battles = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.party_level = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "-e" | "--enemy-level" => {
                if i + 1 < args.len() {
                    config.enemy_level = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "-c" | "--count" => {
                if i + 1 < args.len() {
                    config.enemy_count = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_battle = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_check();
            }
            "--horde" => {
                config = SimConfig::horde_check(6);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Skirmish Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --battles <N>      Number of battles (default: 1000)");
    println!("    -l, --level <L>        Party level (default: 3)");
    println!("    -e, --enemy-level <L>  Enemy level (default: 3)");
    println!("    -c, --count <C>        Enemies per battle (default: 3)");
    println!("    -t, --turns <T>        Turn cap per battle (default: 200)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    -v, --verbose          Per-battle output");
    println!("    --json                 Save JSON report");
    println!("    --quick                Quick check (100 battles)");
    println!("    --horde                Big packs (6 enemies per battle)");
    println!("    -h, --help             Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 100 -e 5      # 100 battles vs level-5 enemies");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- --quick          # Quick balance check");
    println!("    cargo run --bin simulate -- -l 8 -e 10 -c 4  # Uphill fight");
}
