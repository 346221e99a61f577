mod report;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use coach_common::types::{Language, Submission};
use coach_engine::CoachService;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "coach-cli")]
#[command(about = "Coach CLI - Analyze and judge practice-problem submissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect data structures and estimate complexity for a source file
    Analyze {
        /// Path to the submission source file
        #[arg(short, long)]
        file: PathBuf,

        /// Emit the analysis as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run a submission against a problem's curated test cases
    Run {
        /// Path to the submission source file
        #[arg(short, long)]
        file: PathBuf,

        /// Problem identifier (e.g. two-sum)
        #[arg(short, long)]
        problem: String,

        /// Submission language
        #[arg(short, long, default_value = "javascript")]
        language: String,

        /// Emit the run result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List problems with curated test cases
    Problems,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, json } => {
            let code = read_source(&file)?;
            let analysis = coach_engine::analyze(&code);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::render_analysis(&analysis));
            }
        }

        Commands::Run {
            file,
            problem,
            language,
            json,
        } => {
            let code = read_source(&file)?;
            let language = parse_language(&language)?;
            let service = CoachService::with_builtin_problems()?;

            let submission = Submission {
                id: Uuid::new_v4(),
                language,
                code,
                problem_id: problem,
            };

            let result = service.run(&submission).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::render_run(&result));
            }

            if !result.overall_passed {
                std::io::stdout().flush().ok();
                std::process::exit(1);
            }
        }

        Commands::Problems => {
            let service = CoachService::with_builtin_problems()?;

            println!("{:<24} {:<36} {:<20} {}", "Id", "Title", "Entry point", "Cases");
            for problem in service.registry().list() {
                println!(
                    "{:<24} {:<36} {:<20} {}",
                    problem.id,
                    problem.title,
                    problem.entry_point,
                    problem.test_cases.len()
                );
            }
        }
    }

    Ok(())
}

fn read_source(file: &PathBuf) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn parse_language(language: &str) -> Result<Language> {
    match language.to_lowercase().as_str() {
        "javascript" | "js" | "node" => Ok(Language::JavaScript),
        "python" => Ok(Language::Python),
        "java" => Ok(Language::Java),
        other => bail!("unknown language: {other} (valid options: javascript, python, java)"),
    }
}
