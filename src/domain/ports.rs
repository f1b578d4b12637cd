use crate::domain::model::RegistryStatus;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn registry_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}

/// Port for the outbound CPF lookup. Dyn-safe so handlers can be tested
/// against a stub.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn verify(&self, digits: &str) -> Result<RegistryStatus>;
}
