use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vmeet::meet::Meet;
use vmeet::scoring::{recompute, retime_to_rank, validate_rules};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge result files into one virtual meet and score it
    Score {
        /// Result files (JSON arrays of {name, team, place, time})
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Import only these teams (repeatable; default all)
        #[arg(long)]
        team: Vec<String>,

        /// Flat adjustment in seconds added to every imported time
        #[arg(long, default_value_t = 0.0)]
        adjust: f64,

        /// Move a competitor to a field position, e.g. "Ava Reed=1" (repeatable)
        #[arg(long = "move", value_name = "NAME=RANK")]
        moves: Vec<String>,

        /// Remove a competitor before scoring (repeatable)
        #[arg(long)]
        drop: Vec<String>,

        /// Reassign a competitor to another team, e.g. "Ava Reed=South" (repeatable)
        #[arg(long, value_name = "NAME=TEAM")]
        reassign: Vec<String>,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,

        /// JSON snapshot output
        #[arg(long, conflicts_with = "tsv")]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "vmeet")]
#[command(about = "Virtual cross-country meet scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vmeet/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config and validate scoring rules at startup
    let config_path = cli.config.map(PathBuf::from);
    let config = match vmeet::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let rules = config.effective_rules();
    if let Err(errors) = validate_rules(&rules) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match cli.command {
        Commands::Score {
            files,
            team,
            adjust,
            moves,
            drop,
            reassign,
            tsv,
            json,
        } => {
            let mut meet = Meet::new();

            for file in &files {
                let rows = match vmeet::import::load_results(file) {
                    Ok(rows) => rows,
                    Err(e) => {
                        eprintln!("Input error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };
                let mut imported = 0usize;
                for row in &rows {
                    if !team.is_empty() && !team.contains(&row.team) {
                        continue;
                    }
                    // load_results drops rows without a usable time
                    let Some(minutes) = row.minutes() else {
                        continue;
                    };
                    meet.add_competitor(&row.name, &row.team, minutes + adjust / 60.0, row.place);
                    imported += 1;
                }
                if cli.verbose {
                    eprintln!(
                        "Imported {} of {} rows from {}",
                        imported,
                        rows.len(),
                        file.display()
                    );
                }
            }

            for name in &drop {
                match meet.find_by_name(name) {
                    Some(id) => meet.remove_competitor(id),
                    None => eprintln!("--drop: no competitor named '{}'", name),
                }
            }

            for spec in &reassign {
                let Some((name, new_team)) = spec.split_once('=') else {
                    eprintln!("--reassign: expected NAME=TEAM, got '{}'", spec);
                    std::process::exit(EXIT_CONFIG);
                };
                match meet.find_by_name(name) {
                    Some(id) => meet.reassign_team(id, new_team),
                    None => eprintln!("--reassign: no competitor named '{}'", name),
                }
            }

            recompute(&mut meet, &rules);

            // Each move retimes against the current field, then rescores so
            // the next move sees the updated order.
            for spec in &moves {
                let parsed = spec
                    .split_once('=')
                    .and_then(|(name, rank)| rank.trim().parse::<usize>().ok().map(|r| (name, r)));
                let Some((name, rank)) = parsed else {
                    eprintln!("--move: expected NAME=RANK, got '{}'", spec);
                    std::process::exit(EXIT_CONFIG);
                };
                match meet.find_by_name(name) {
                    Some(id) => {
                        let field = meet.field_order();
                        retime_to_rank(&mut meet, id, rank, &field, &rules);
                        recompute(&mut meet, &rules);
                    }
                    None => eprintln!("--move: no competitor named '{}'", name),
                }
            }

            if cli.verbose {
                eprintln!(
                    "Scored {} competitors across {} teams",
                    meet.len(),
                    meet.team_order().len()
                );
            }

            let snapshot = vmeet::output::snapshot(&meet);
            if json {
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize snapshot: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else if tsv {
                println!("{}", vmeet::output::format_tsv(&snapshot));
            } else {
                let use_colors = vmeet::output::should_use_colors();
                println!(
                    "{}",
                    vmeet::output::format_individual_table(&snapshot, use_colors)
                );
                println!();
                println!(
                    "{}",
                    vmeet::output::format_team_table(&snapshot, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
