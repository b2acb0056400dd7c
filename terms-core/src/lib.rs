//! # terms-core — Serviço Unique Terms
//!
//! Este crate anota a **primeira ocorrência de cada termo** de um texto e
//! devolve o resultado como um container LIF, seguindo o contrato de serviços
//! LAPPS (envelope `Data` + metadados de serviço).
//!
//! ## Arquitetura do Sistema
//!
//! O núcleo é um pipeline linear de funções puras, sem estado entre requisições:
//!
//! 1.  **Entrada**: envelope `Data` com texto puro ou container LIF ([`envelope`]).
//! 2.  **Tokenização** ([`tokenizer`]): sequências máximas sem espaço viram tokens, com offsets de caractere.
//! 3.  **Deduplicação** ([`dedup`]): só a primeira ocorrência de cada forma superficial segue adiante.
//! 4.  **Anotação** ([`annotation`]): cada token único vira uma anotação `Token` com a feature `word`.
//! 5.  **View** ([`view`]): as anotações são agrupadas em uma view que declara conter `Token`.
//! 6.  **Saída**: o [`Document`] com a view nova, empacotado em um envelope LIF.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use terms_core::{Data, UniqueTerms, WebService};
//!
//! let service = UniqueTerms::new();
//! let input = Data::text("apple pie apple").to_json().unwrap();
//!
//! let output = Data::from_json(&service.execute(&input)).unwrap();
//! let annotations = &output.payload["views"][0]["annotations"];
//!
//! assert_eq!(annotations[0]["features"]["word"], "apple");
//! assert_eq!(annotations[1]["features"]["word"], "pie");
//! assert_eq!(annotations[1]["end"], 9);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: composição dos quatro estágios.
//! - [`service`]: trait [`WebService`] e a implementação [`UniqueTerms`].
//! - [`vocab`]: URIs e nomes de features do contrato externo.

pub mod annotation;
pub mod dedup;
pub mod document;
pub mod envelope;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod service;
pub mod tokenizer;
pub mod view;
pub mod vocab;

pub use annotation::Annotation;
pub use document::Document;
pub use envelope::{Data, Request};
pub use error::{Error, Result};
pub use metadata::ServiceMetadata;
pub use pipeline::{annotate, annotate_document};
pub use service::{UniqueTerms, WebService};
pub use tokenizer::Token;
pub use view::View;
