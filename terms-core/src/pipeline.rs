//! # Pipeline Unique Terms
//!
//! Compõe os quatro estágios em uma única passada linear, sem estado entre
//! requisições:
//!
//! ```text
//! texto → tokenize → dedup → build → assemble → View
//! ```
//!
//! O único estado é o conjunto de formas já vistas da deduplicação, que nasce
//! e morre dentro de cada chamada. Por isso documentos independentes podem ser
//! processados em paralelo sem nenhuma sincronização
//! (ver [`UniqueTerms::respond_batch`](crate::service::UniqueTerms::respond_batch)).

use crate::annotation::{build, Annotation};
use crate::dedup::dedup;
use crate::document::Document;
use crate::tokenizer::tokenize;
use crate::view::{assemble, assemble_with_id, View};

/// Produz a view de termos únicos para um texto.
pub fn annotate(text: &str) -> View {
    assemble(unique_annotations(text))
}

/// Anota o texto do documento e adiciona a view produzida ao final.
///
/// As views já existentes são preservadas; a nova recebe um id livre.
pub fn annotate_document(mut doc: Document) -> Document {
    let view = assemble_with_id(doc.next_view_id(), unique_annotations(doc.text()));
    doc.push_view(view);
    doc
}

fn unique_annotations(text: &str) -> Vec<Annotation> {
    build(&dedup(&tokenize(text)))
}
