pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use api::{router, AppState};
pub use config::AppConfig;
pub use core::registry::RegistryClient;
pub use utils::error::{CpfApiError, Result};
