use std::sync::Arc;

use storage::{
    Database,
    repository::{CheckInsRepository, GymsRepository, PgCheckInsRepository, PgGymsRepository},
};

use crate::middleware::auth::ApiKeys;

#[derive(Clone)]
pub struct AppState {
    pub gyms: Arc<dyn GymsRepository>,
    pub check_ins: Arc<dyn CheckInsRepository>,
    pub api_keys: ApiKeys,
}

impl AppState {
    pub fn postgres(db: &Database, api_keys: ApiKeys) -> Self {
        Self {
            gyms: Arc::new(PgGymsRepository::new(db.pool().clone())),
            check_ins: Arc::new(PgCheckInsRepository::new(db.pool().clone())),
            api_keys,
        }
    }

    #[cfg(test)]
    pub fn in_memory(api_keys: ApiKeys) -> Self {
        use storage::repository::{InMemoryCheckInsRepository, InMemoryGymsRepository};

        Self {
            gyms: Arc::new(InMemoryGymsRepository::new()),
            check_ins: Arc::new(InMemoryCheckInsRepository::new()),
            api_keys,
        }
    }
}
