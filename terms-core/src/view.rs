//! # Views LIF
//!
//! Uma view é uma coleção nomeada de anotações sobre o texto de um documento.
//! Os metadados da view declaram quais tipos de anotação ela contém e quem
//! os produziu.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::annotation::Annotation;
use crate::metadata::SERVICE_NAME;
use crate::vocab::{annotation_type, TOKENIZATION_UNIQUE};

/// Id da view quando o documento ainda não tem nenhuma.
pub const FIRST_VIEW_ID: &str = "v1";

/// Declaração de um tipo contido na view (`metadata.contains.<tipo>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contains {
    #[serde(default)]
    pub producer: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Campos extras (ex: `tagSet`) preservados de views recebidas.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewMetadata {
    /// Tipos de anotação contidos, indexados pela URI do tipo.
    #[serde(default)]
    pub contains: BTreeMap<String, Contains>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: String,
    #[serde(default)]
    pub metadata: ViewMetadata,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl View {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: ViewMetadata::default(),
            annotations: Vec::new(),
        }
    }

    /// Declara que a view contém anotações do tipo `at_type`.
    pub fn add_contains(&mut self, at_type: impl Into<String>, producer: impl Into<String>, kind: impl Into<String>) {
        self.metadata.contains.insert(
            at_type.into(),
            Contains {
                producer: producer.into(),
                kind: kind.into(),
                extra: Map::new(),
            },
        );
    }

    /// Verdadeiro se os metadados declaram o tipo `at_type`.
    pub fn contains(&self, at_type: &str) -> bool {
        self.metadata.contains.contains_key(at_type)
    }
}

/// Monta a view de termos únicos com o id padrão (`v1`).
pub fn assemble(annotations: Vec<Annotation>) -> View {
    assemble_with_id(FIRST_VIEW_ID, annotations)
}

/// Monta a view de termos únicos com um id escolhido pelo chamador.
///
/// A declaração do tipo `Token` é feita mesmo quando não há anotações: ela
/// descreve o que o serviço produz, não o resultado em particular.
pub fn assemble_with_id(id: impl Into<String>, annotations: Vec<Annotation>) -> View {
    let mut view = View::new(id);
    view.add_contains(annotation_type::TOKEN, SERVICE_NAME, TOKENIZATION_UNIQUE);
    view.annotations = annotations;
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::build;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_assemble_declares_token_even_if_empty() {
        let view = assemble(vec![]);
        assert_eq!(view.id, FIRST_VIEW_ID);
        assert!(view.contains(annotation_type::TOKEN));
        assert!(view.annotations.is_empty());
    }

    #[test]
    fn test_assemble_keeps_order() {
        let view = assemble(build(&tokenize("one two three")));
        let words: Vec<&str> = view.annotations.iter().filter_map(|a| a.word()).collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_view_metadata_json_layout() {
        let view = assemble_with_id("v3", vec![]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "v3");
        let contains = &json["metadata"]["contains"]["http://vocab.lappsgrid.org/Token"];
        assert_eq!(contains["producer"], SERVICE_NAME);
        assert_eq!(contains["type"], TOKENIZATION_UNIQUE);
    }

    #[test]
    fn test_foreign_view_metadata_preserved() {
        let json = serde_json::json!({
            "id": "v1",
            "metadata": {
                "contains": {
                    "http://vocab.lappsgrid.org/NamedEntity": {
                        "producer": "outro.Servico",
                        "type": "ner:stanford",
                        "namedEntityCategorySet": "ner:stanford"
                    }
                },
                "timestamp": "2020-01-01"
            },
            "annotations": []
        });
        let view: View = serde_json::from_value(json.clone()).unwrap();
        assert!(view.contains("http://vocab.lappsgrid.org/NamedEntity"));
        assert_eq!(serde_json::to_value(&view).unwrap(), json);
    }
}
