//! Account Service Library
//!
//! Sign-up and login over HTTP, backed by PostgreSQL (or an in-memory store
//! for local runs) with Argon2id password hashing.

pub mod config;
pub mod encoder;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::AccountServiceConfig;
use crate::encoder::Argon2Encoder;
use crate::infra::Database;
use crate::repository::{InMemoryUserRepository, UserRepository, UserStore};
use crate::routes::create_router;
use crate::service::UserManager;
use crate::state::AppState;

/// Run the HTTP server until it stops.
///
/// With `in_memory` set, no database is contacted and accounts live only as
/// long as the process.
pub async fn run_server(
    config: AccountServiceConfig,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Arc::new(Argon2Encoder::new(config.hashing)?);

    let (repo, database): (Arc<dyn UserRepository>, Option<Arc<Database>>) = if in_memory {
        info!("Using in-memory user store");
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        (repo, None)
    } else {
        let db = Database::connect(&config.database).await?;
        let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));
        (repo, Some(Arc::new(db)))
    };

    let user_service = Arc::new(UserManager::new(repo, encoder));
    let app = create_router(AppState::new(user_service, database));

    let addr: SocketAddr = config.service.addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(service = %config.service.service_name, "Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AccountServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
