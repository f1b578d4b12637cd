pub mod cpf;
pub mod registry;

pub use crate::domain::model::{CpfValidation, RegistryStatus};
pub use crate::domain::ports::{ConfigProvider, RegistryLookup};
pub use crate::utils::error::Result;
