//! Demo entry point wiring seed data into the postboard services.
//!
//! # Responsibility
//! - Build repositories from explicit seed configuration.
//! - Run the author and post demo sequences and print each result.
//! - Stop at the first failure with a non-zero exit code.

use clap::{Parser, Subcommand};
use log::{error, info};
use postboard_core::{
    core_version, default_log_level, init_logging, AuthorCheck, AuthorService, LoggingConfig,
    PostService, SeedConfig,
};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "postboard", version = core_version())]
#[command(about = "Author/post repository and use-case demo", long_about = None)]
struct Cli {
    /// JSON seed file with initial authors and posts
    #[arg(long, global = true)]
    seed: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rotating log files; stderr when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add an author, then look authors up by id
    Authors,
    /// Add three posts, then look them up by id and title
    Posts {
        /// Refuse to store posts whose author does not exist
        #[arg(long)]
        strict_authors: bool,
    },
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string()),
        log_dir: cli.log_dir.clone(),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=demo_run module=cli status=error error={err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let seed = match &cli.seed {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::demo(),
    };

    match cli.command {
        Commands::Authors => authors_demo(&seed),
        Commands::Posts { strict_authors } => {
            let check = if strict_authors {
                AuthorCheck::Strict
            } else {
                AuthorCheck::Deferred
            };
            posts_demo(&seed, check)
        }
    }
}

fn authors_demo(seed: &SeedConfig) -> CliResult {
    let repo = seed.author_repository();
    let service = AuthorService::builder().repo(&repo).build()?;
    info!(
        "event=demo_start module=cli status=ok demo=authors core_version={}",
        core_version()
    );

    print_labeled("New author", &service.add("Mary Lamb")?)?;
    print_labeled("Author 1", &service.get_by_id(1)?)?;
    print_labeled("Author 3", &service.get_by_id(3)?)?;
    Ok(())
}

fn posts_demo(seed: &SeedConfig, check: AuthorCheck) -> CliResult {
    let post_repo = seed.post_repository();
    let author_repo = seed.author_repository();
    let service = PostService::builder()
        .post_repo(&post_repo)
        .author_repo(&author_repo)
        .author_check(check)
        .build()?;
    info!(
        "event=demo_start module=cli status=ok demo=posts author_check={check:?} core_version={}",
        core_version()
    );

    let new_posts = [
        (1, "Test Post 1.1", "This is the first test post."),
        (1, "Test Post 1.2", "This is the second test post."),
        (2, "Test Post 2.1", "This is the third test post."),
    ];
    for (author_id, title, body) in new_posts {
        print_labeled("New post", &service.add(author_id, title, body)?)?;
    }

    print_labeled("Post 1", &service.get_by_id(1)?)?;
    print_labeled("Post 3", &service.get_by_id(3)?)?;
    print_labeled("Post by title", &service.get_by_title("Test Post 1.2")?)?;
    Ok(())
}

fn print_labeled(label: &str, value: &impl Serialize) -> CliResult {
    println!("{label} {}", serde_json::to_string(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{authors_demo, posts_demo, Cli, Commands};
    use clap::Parser;
    use postboard_core::{AuthorCheck, SeedConfig};

    #[test]
    fn parses_posts_subcommand_with_global_flags() {
        let cli = Cli::try_parse_from([
            "postboard",
            "posts",
            "--strict-authors",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Posts {
                strict_authors: true
            }
        ));
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn version_flag_reports_core_version() {
        let err = Cli::try_parse_from(["postboard", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(postboard_core::core_version()));
    }

    #[test]
    fn demos_succeed_on_demo_seed() {
        authors_demo(&SeedConfig::demo()).unwrap();
        posts_demo(&SeedConfig::demo(), AuthorCheck::Deferred).unwrap();
    }

    #[test]
    fn posts_demo_fails_when_authors_are_missing() {
        let err = posts_demo(&SeedConfig::default(), AuthorCheck::Deferred).unwrap_err();
        assert!(err.to_string().contains("author not found"));
    }
}
