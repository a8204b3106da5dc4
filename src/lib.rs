pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::Config;
pub use db::{Store, StoreOptions};
pub use error::{AppError, AppResult};

use utils::password::PasswordParams;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

impl AppState {
    pub fn password_params(&self) -> PasswordParams {
        PasswordParams {
            memory_kib: self.config.password_hash_memory_kib,
            iterations: self.config.password_hash_iterations,
        }
    }
}
