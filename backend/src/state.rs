//! Shared application state.
//!
//! The immutable collaborators every handler needs, wired together once at
//! startup and cloned cheaply per request. Nothing in here is mutable after
//! construction, so handlers share it without locking.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::service::{CredentialStore, StaticCredentials, TokenService};
use crate::config::Config;
use crate::database::queries::MealStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub credentials: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenService>,
    pub meals: MealStore,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt_secret));

        Self {
            config: Arc::new(config),
            credentials: Arc::new(StaticCredentials::seeded()),
            tokens,
            meals: MealStore::new(pool),
        }
    }
}

/// State for handler-level tests: real credential store and token service,
/// and a lazy pool that never connects unless a query actually runs.
#[cfg(test)]
pub fn test_state() -> AppState {
    let config = Config {
        database_url: "postgres://localhost/cookbook_test".to_string(),
        jwt_secret: "test-secret-key".to_string(),
        port: 0,
        cors_origins: vec![],
    };
    let pool = PgPool::connect_lazy(&config.database_url).expect("lazy pool");
    AppState::new(config, pool)
}
