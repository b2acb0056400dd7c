//! # Envelope `Data`
//!
//! Todo payload trocado com o serviço vem dentro de um envelope
//! `{"discriminator": <URI>, "payload": <valor>}`. O discriminador diz o que é
//! o payload (texto puro, container LIF, metadados ou erro).
//!
//! Este módulo é a fronteira do adaptador:
//!
//! - [`unwrap_request`] transforma o envelope de entrada em um [`Document`]
//!   (ou o repassa, se já for um erro);
//! - [`wrap_document`] e [`Data::error`] montam os envelopes de saída.
//!
//! Payloads inválidos são rejeitados aqui, antes de qualquer processamento.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::vocab::discriminator;

/// Envelope LAPPS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub discriminator: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub parameters: Map<String, Value>,
}

impl Data {
    pub fn new(discriminator: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            discriminator: discriminator.into(),
            payload: payload.into(),
            parameters: Map::new(),
        }
    }

    /// Envelope de texto puro.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(discriminator::TEXT, text.into())
    }

    /// Envelope de falha; o payload é a mensagem.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(discriminator::ERROR, message.into())
    }

    pub fn is_error(&self) -> bool {
        self.discriminator == discriminator::ERROR
    }

    /// Parseia um envelope a partir de JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::malformed(e.to_string()))
    }

    /// Parseia um envelope a partir de bytes crus (ex: corpo HTTP), sem exigir UTF-8 válido antes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Error> for Data {
    fn from(err: &Error) -> Self {
        Data::error(err.to_string())
    }
}

/// Resultado do desempacotamento de uma requisição.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Documento pronto para ser anotado.
    Annotate(Document),
    /// Envelope de erro vindo de um serviço anterior na cadeia: devolvido sem alteração.
    PassThrough(Data),
}

/// Desempacota o envelope de entrada.
///
/// - `TEXT`: o payload deve ser uma string; vira um documento sem views.
/// - `LIF` (e aliases): o payload deve ser um container; as views existentes
///   são mantidas.
/// - `ERROR`: repassado como está.
/// - qualquer outro discriminador: [`Error::UnsupportedFormat`].
pub fn unwrap_request(data: Data) -> Result<Request> {
    let disc = data.discriminator.as_str();

    if disc == discriminator::ERROR {
        return Ok(Request::PassThrough(data));
    }

    if disc == discriminator::TEXT {
        return match data.payload {
            Value::String(text) => Ok(Request::Annotate(Document::new(text))),
            other => Err(Error::payload_mismatch(
                disc,
                format!("esperava string, recebeu {}", json_kind(&other)),
            )),
        };
    }

    if discriminator::is_container(disc) {
        if !data.payload.is_object() {
            return Err(Error::payload_mismatch(
                disc,
                format!("esperava container, recebeu {}", json_kind(&data.payload)),
            ));
        }
        let doc: Document = serde_json::from_value(data.payload)
            .map_err(|e| Error::payload_mismatch(disc, e.to_string()))?;
        return Ok(Request::Annotate(doc));
    }

    Err(Error::unsupported_format(disc))
}

/// Empacota o documento anotado em um envelope LIF de sucesso.
pub fn wrap_document(doc: &Document) -> Result<Data> {
    Ok(Data::new(discriminator::LIF, serde_json::to_value(doc)?))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "objeto",
    }
}
