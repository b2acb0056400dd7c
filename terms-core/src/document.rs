//! # Documento (Container LIF)
//!
//! O documento guarda o texto original e as views produzidas sobre ele. É
//! construído uma vez por requisição; depois disso só recebe a view nova no
//! final da lista. O texto nunca é alterado.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::view::View;
use crate::vocab::LIF_CONTEXT;

/// Texto do documento no formato JSON-LD (`{"@value": ..., "@language": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "@context", default = "default_context")]
    pub context: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    text: Text,
    #[serde(default)]
    views: Vec<View>,
}

fn default_context() -> String {
    LIF_CONTEXT.to_string()
}

impl Document {
    /// Cria um documento sem views a partir de texto puro.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            context: default_context(),
            metadata: Map::new(),
            text: Text {
                value: text.into(),
                language: None,
            },
            views: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.text.language = Some(language.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text.value
    }

    pub fn language(&self) -> Option<&str> {
        self.text.language.as_deref()
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Id para a próxima view (`v{n+1}`), sem colidir com as existentes.
    pub fn next_view_id(&self) -> String {
        let mut n = self.views.len() + 1;
        while self.views.iter().any(|v| v.id == format!("v{}", n)) {
            n += 1;
        }
        format!("v{}", n)
    }

    /// Adiciona uma view ao final do documento.
    pub fn push_view(&mut self, view: View) {
        self.views.push(view);
    }
}
