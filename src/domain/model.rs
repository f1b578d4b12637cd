use serde::{Deserialize, Serialize};

/// Result of the local checksum validation. `digits` holds whatever remained
/// after stripping non-digit characters, even when invalid, so callers can
/// inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpfValidation {
    pub valid: bool,
    pub digits: String,
}

/// Outcome of a completed registry lookup. Transport failures travel on the
/// error path, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryStatus {
    Found,
    NotFound(u16),
}

/// Query-string parameters accepted by the validation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CpfQuery {
    pub cpf: Option<String>,
}

/// JSON body returned for every validation outcome. `cpf` echoes the
/// original input, not the normalized digits. `mensagem` and `error` are
/// mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct CpfResponse {
    pub cpf: String,
    pub valido: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CpfResponse {
    pub fn found(cpf: String) -> Self {
        Self {
            cpf,
            valido: true,
            mensagem: Some("CPF encontrado na Receita Federal".to_string()),
            error: None,
        }
    }

    pub fn not_found(cpf: String) -> Self {
        Self {
            cpf,
            valido: false,
            mensagem: None,
            error: Some("CPF nao encontrado na Receita Federal".to_string()),
        }
    }

    pub fn invalid_digits(cpf: String) -> Self {
        Self {
            cpf,
            valido: false,
            mensagem: None,
            error: Some("CPF invalido (digitos nao conferem)".to_string()),
        }
    }
}

/// Body of the 500 response when the registry cannot be reached.
#[derive(Debug, Clone, Serialize)]
pub struct QueryFailure {
    pub error: String,
}
