//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `familytree_core` linkage.
//! - Optionally load a dataset file and print stats or one query result.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use familytree_core::{load_repository_from_path, FamilyService, InMemoryMemberRepository};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "familytree_cli")]
#[command(version)]
#[command(about = "Smoke probe for the family genealogy core", long_about = None)]
struct Cli {
    /// Family dataset (JSON array of members)
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search names, relations and villages
    Search {
        /// Search query
        query: String,
    },

    /// Resolve how person2 relates to person1
    Relation { person1: String, person2: String },

    /// List villages with their member counts
    Villages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("familytree_core ping={}", familytree_core::ping());
    println!("familytree_core version={}", familytree_core::core_version());

    let Some(dataset) = cli.dataset else {
        if cli.command.is_some() {
            Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "a dataset path is required before the command",
                )
                .exit();
        }
        return ExitCode::SUCCESS;
    };

    let repo = match load_repository_from_path(&dataset) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = FamilyService::new(repo);

    let stats = service.stats();
    println!(
        "members={} parents={} with_sons={} roots={}",
        stats.total_members,
        stats.parents,
        stats.with_sons,
        service.forest().len()
    );

    match cli.command {
        None => ExitCode::SUCCESS,
        Some(command) => run(&service, command),
    }
}

fn run(service: &FamilyService<InMemoryMemberRepository>, command: Commands) -> ExitCode {
    match command {
        Commands::Search { query } => {
            for hit in service.search(&query) {
                println!("{}\t{:?}\t{}", hit.member.name, hit.match_type, hit.match_text);
            }
        }
        Commands::Relation { person1, person2 } => match service.find_relation(&person1, &person2) {
            Ok(relationship) => println!(
                "{} [{}]",
                relationship.relationship,
                relationship.path.join(" -> ")
            ),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        Commands::Villages => {
            for village in service.villages() {
                println!("{village}\t{}", service.village_members(&village).len());
            }
        }
    }
    ExitCode::SUCCESS
}
