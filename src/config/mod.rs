use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRY_URL: &str =
    "https://scpa-backend.saude.gov.br/public/scpa-usuario/validacao-cpf";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "valida-cpf")]
#[command(about = "HTTP service validating CPF numbers against the Receita Federal registry")]
pub struct AppConfig {
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log in JSON format")]
    pub log_json: bool,
}

impl ConfigProvider for AppConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn registry_url(&self) -> &str {
        &self.registry_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind_addr", &self.bind_addr)?;
        validate_url("registry_url", &self.registry_url)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
