//! Hearth CLI - database migrations and operator tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! hearth-cli migrate
//!
//! # Print the opening-hours rows the site would show
//! hearth-cli hours
//! hearth-cli hours --default
//!
//! # Produce a value for HEARTH_ADMIN_PASSWORD_HASH
//! hearth-cli admin hash-password 'correct horse battery staple'
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hearth-cli")]
#[command(author, version, about = "Hearth CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Print the rendered opening-hours schedule
    Hours {
        /// Skip the database and print the built-in schedule
        #[arg(long)]
        default: bool,
    },
    /// Admin account helpers
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Hash a password for HEARTH_ADMIN_PASSWORD_HASH
    HashPassword {
        /// Plaintext password
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Hours { default } => commands::hours::print(default).await?,
        Commands::Admin { action } => match action {
            AdminAction::HashPassword { password } => {
                commands::admin::hash_password(&password)?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_hours_default_flag() {
        let cli = Cli::try_parse_from(["hearth-cli", "hours", "--default"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Hours { default: true })
        ));
    }
}
