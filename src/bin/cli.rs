use academy::cli::{grant_admin, issue_token, revoke_admin};
use academy::modules::users::repository::PgUserRepository;
use academy_config::{DatabaseConfig, JwtConfig};
use academy_db::{PgPool, init_db_pool, run_migrations};
use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "academy-cli")]
#[command(about = "Academy CLI - Administrative tools for the Academy API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Give an existing user the admin role
    GrantAdmin {
        /// Email address of the user
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Remove the admin role from a user
    RevokeAdmin {
        /// Email address of the user
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Print an access token for an email
    IssueToken {
        /// Email address to embed in the token
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
}

fn email_or_prompt(email: Option<String>) -> anyhow::Result<String> {
    match email {
        Some(email) => Ok(email),
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email"),
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    init_db_pool(&config)
        .await
        .context("Failed to connect to database")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => {
            let pool = connect().await?;
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations applied");
        }
        Commands::GrantAdmin { email } => {
            let email = email_or_prompt(email)?;
            let users = PgUserRepository::new(connect().await?);
            grant_admin(&users, &email).await?;
            println!("{email} is now an admin");
        }
        Commands::RevokeAdmin { email } => {
            let email = email_or_prompt(email)?;
            let users = PgUserRepository::new(connect().await?);
            revoke_admin(&users, &email).await?;
            println!("{email} is no longer an admin");
        }
        Commands::IssueToken { email } => {
            let email = email_or_prompt(email)?;
            let jwt_config = JwtConfig::from_env().context("Invalid token configuration")?;
            let token = issue_token(&email, &jwt_config)?;
            println!("{token}");
        }
    }

    Ok(())
}
