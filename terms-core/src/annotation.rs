//! # Anotações LIF
//!
//! Uma anotação é um trecho tipado do texto com features chave/valor. Este
//! módulo define o formato LIF da anotação e o construtor que transforma os
//! tokens únicos em anotações `Token`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tokenizer::Token;
use crate::vocab::{annotation_type, features};

/// Prefixo dos identificadores gerados (`tok0`, `tok1`, ...).
pub const ID_PREFIX: &str = "tok";

/// Uma anotação LIF.
///
/// `start`/`end` são opcionais no formato (anotações relacionais não têm
/// trecho), mas as anotações produzidas aqui sempre os preenchem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identificador único dentro da view.
    pub id: String,
    /// URI do tipo da anotação (ex: `http://vocab.lappsgrid.org/Token`).
    #[serde(rename = "@type")]
    pub at_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Offset de caractere inicial (inclusivo).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// Offset de caractere final (exclusivo).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(default)]
    pub features: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Annotation {
    /// Cria uma anotação com trecho e sem features.
    pub fn new(id: impl Into<String>, at_type: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            id: id.into(),
            at_type: at_type.into(),
            label: None,
            start: Some(start),
            end: Some(end),
            features: Map::new(),
            metadata: Map::new(),
        }
    }

    pub fn add_feature(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.features.insert(name.into(), value.into());
    }

    /// Valor de uma feature textual.
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).and_then(Value::as_str)
    }

    /// Forma superficial (`word`) de uma anotação `Token`.
    pub fn word(&self) -> Option<&str> {
        self.feature(features::WORD)
    }
}

/// Converte tokens em anotações `Token`, preservando a ordem de entrada.
///
/// Os ids são um contador a partir de zero (`tok0`, `tok1`, ...), únicos no lote.
/// Os offsets são copiados sem alteração e a feature `word` recebe a forma
/// superficial do token.
pub fn build(tokens: &[Token]) -> Vec<Annotation> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let mut annotation = Annotation::new(
                format!("{}{}", ID_PREFIX, i),
                annotation_type::TOKEN,
                token.start,
                token.end,
            );
            annotation.add_feature(features::WORD, token.text.clone());
            annotation
        })
        .collect()
}
