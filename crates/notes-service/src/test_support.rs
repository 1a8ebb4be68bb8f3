//! In-memory service graph for unit tests.

use std::sync::Arc;

use notes_auth::password::{PasswordHasher, PasswordValidator};
use notes_core::config::{AuthConfig, DatabaseConfig};
use notes_core::traits::{Clock, ManualClock};
use notes_database::repositories::{NoteRepository, ShareRepository, UserRepository};
use notes_database::{DatabasePool, migration};

use crate::{AdminService, NoteService, ShareService, UserService};

pub struct Services {
    pub users: Arc<UserService>,
    pub admin: AdminService,
    pub notes: NoteService,
    pub shares: ShareService,
    pub user_repo: Arc<UserRepository>,
}

pub async fn services() -> Services {
    let db = DatabasePool::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    })
    .await
    .expect("connect");
    migration::run_migrations(db.pool()).await.expect("migrate");
    let pool = db.pool().clone();

    let clock: Arc<dyn Clock> = Arc::new(ManualClock::default());
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let note_repo = Arc::new(NoteRepository::new(pool.clone()));
    let share_repo = Arc::new(ShareRepository::new(pool));

    let users = Arc::new(UserService::new(
        user_repo.clone(),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&AuthConfig::default())),
        clock.clone(),
    ));

    Services {
        admin: AdminService::new(users.clone()),
        notes: NoteService::new(note_repo.clone(), share_repo.clone(), clock.clone()),
        shares: ShareService::new(note_repo, share_repo, clock),
        users,
        user_repo,
    }
}
