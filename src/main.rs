use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::path::PathBuf;
use std::process::ExitCode;

use warta::config::Config;
use warta::error::SeedError;
use warta::models::seed_model::SeedData;
use warta::repositories::ContentRepository;
use warta::seeders::{self, demo_data, IdempotencyGuard, SeedOptions, SeedOutcome};

#[derive(Parser)]
#[command(name = "warta", about = "Warta blog backend: schema + content seeder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the built-in sample blog content
    Demo {
        /// Existence probe scope before any write
        #[arg(long, value_enum, default_value = "posts")]
        guard: IdempotencyGuard,
    },
    /// Seed from a JSON fixture file (clears content tables first)
    Fixture {
        path: PathBuf,
        /// Keep existing rows: skip the reset, apply the probe instead
        #[arg(long)]
        keep_existing: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::init();
    println!("🌱 Starting Warta seed...");
    tracing::debug!(
        endpoint = %cfg.graphql.endpoint,
        introspection = cfg.graphql.introspection,
        "GraphQL plugin config loaded"
    );

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = match Database::connect(&cfg.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("🔥 Failed to connect to Database: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("✅ Database Connected!");

    // 2. Schema must be current before seeding
    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!("❌ Migration failed: {}", e);
        let _ = db.close().await;
        return ExitCode::FAILURE;
    }

    // 3. Seed, then release the handle on every exit path before the exit
    //    code is produced
    let result = run(&db, cli.command).await;
    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    match result {
        Ok(SeedOutcome::Seeded(summary)) => {
            println!("\n🎉 Seed completed successfully!");
            println!("📊 Summary:");
            println!("   - {} authors", summary.authors);
            println!("   - {} categories", summary.categories);
            println!("   - {} tags", summary.tags);
            println!("   - {} posts", summary.posts);
            ExitCode::SUCCESS
        }
        Ok(SeedOutcome::SkippedExisting) => {
            println!("💡 To re-seed, delete existing data first.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Seed failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(db: &DatabaseConnection, command: Command) -> Result<SeedOutcome, SeedError> {
    let store = ContentRepository::new(db.clone());
    match command {
        Command::Demo { guard } => {
            let data = demo_data::sample_content();
            let opts = SeedOptions {
                guard,
                reset: false,
            };
            seeders::run_seed(&store, &data, &opts).await
        }
        Command::Fixture {
            path,
            keep_existing,
        } => {
            let data = SeedData::from_file(&path)?;
            let opts = if keep_existing {
                SeedOptions {
                    guard: IdempotencyGuard::Posts,
                    reset: false,
                }
            } else {
                SeedOptions {
                    guard: IdempotencyGuard::Off,
                    reset: true,
                }
            };
            seeders::run_seed(&store, &data, &opts).await
        }
    }
}
