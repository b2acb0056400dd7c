//! # Metadados do Serviço
//!
//! Descritor fixo do contrato do serviço: o que ele aceita (`requires`) e o
//! que produz (`produces`). É construído sob demanda a partir de constantes e
//! nunca muda durante a vida do processo.

use serde::{Deserialize, Serialize};

use crate::vocab::{annotation_type, discriminator, ALLOW_ANY, LICENSE_MIT, SERVICE_SCHEMA};

/// Nome do serviço, usado também como `producer` nas views geradas.
pub const SERVICE_NAME: &str = "terms_core::UniqueTerms";

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SERVICE_VENDOR: &str = "http://www.lappsgrid.org";

pub const SERVICE_DESCRIPTION: &str =
    "Tokeniza o texto por espaços e anota apenas a primeira ocorrência de cada termo";

/// Especificação de entrada ou saída (`requires` / `produces`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IoSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<String>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub version: String,
    pub vendor: String,
    pub license: String,
    pub allow: String,
    pub description: String,
    pub requires: IoSpecification,
    pub produces: IoSpecification,
}

impl ServiceMetadata {
    /// Descritor do serviço Unique Terms.
    ///
    /// Aceita texto puro e containers LIF (nas duas URIs em uso); produz
    /// exatamente um tipo de anotação, `Token`, dentro de um container LIF.
    pub fn unique_terms() -> Self {
        Self {
            schema: SERVICE_SCHEMA.to_string(),
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            vendor: SERVICE_VENDOR.to_string(),
            license: LICENSE_MIT.to_string(),
            allow: ALLOW_ANY.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            requires: IoSpecification {
                encoding: Some("UTF-8".to_string()),
                language: Vec::new(),
                format: vec![
                    discriminator::TEXT.to_string(),
                    discriminator::LIF.to_string(),
                    discriminator::LAPPS.to_string(),
                ],
                annotations: Vec::new(),
            },
            produces: IoSpecification {
                encoding: Some("UTF-8".to_string()),
                language: Vec::new(),
                format: vec![discriminator::LIF.to_string()],
                annotations: vec![annotation_type::TOKEN.to_string()],
            },
        }
    }
}
