//! # Serviço Unique Terms
//!
//! Ponto de entrada do contrato de serviço: metadados e execução, ambos
//! trocando JSON serializado. A lógica fica no [`pipeline`](crate::pipeline);
//! aqui só se desempacota a requisição, chama o pipeline e empacota a resposta.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::envelope::{unwrap_request, wrap_document, Data, Request};
use crate::error::Result;
use crate::metadata::ServiceMetadata;
use crate::pipeline::annotate_document;
use crate::vocab::discriminator;

/// Envelope usado quando nem a resposta de erro consegue ser serializada.
const FALLBACK_ERROR_JSON: &str =
    r#"{"discriminator":"http://vocab.lappsgrid.org/ns/error","payload":"Falha ao serializar a resposta"}"#;

/// Contrato de um serviço de anotação.
pub trait WebService {
    /// Metadados do serviço, em JSON, dentro de um envelope `META`.
    fn get_metadata(&self) -> String;

    /// Executa o serviço sobre um envelope de entrada em JSON.
    ///
    /// Nunca falha: rejeições viram um envelope `ERROR`.
    fn execute(&self, input: &str) -> String;
}

/// Serviço que anota a primeira ocorrência de cada termo do texto.
///
/// Não guarda estado: uma instância pode atender requisições concorrentes
/// de várias threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueTerms;

impl UniqueTerms {
    pub fn new() -> Self {
        Self
    }

    pub fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata::unique_terms()
    }

    /// Envelope `META` com os metadados.
    pub fn metadata_envelope(&self) -> Result<Data> {
        Ok(Data::new(discriminator::META, serde_json::to_value(self.metadata())?))
    }

    /// Processa um envelope já parseado, propagando rejeições como `Err`.
    pub fn process(&self, input: Data) -> Result<Data> {
        match unwrap_request(input)? {
            Request::PassThrough(data) => {
                debug!("Erro recebido de serviço anterior, repassando");
                Ok(data)
            }
            Request::Annotate(doc) => {
                debug!(
                    chars = doc.text().chars().count(),
                    views = doc.views().len(),
                    "Anotando termos únicos"
                );
                wrap_document(&annotate_document(doc))
            }
        }
    }

    /// Como [`process`](Self::process), mas convertendo rejeições em envelope `ERROR`.
    pub fn respond(&self, input: Data) -> Data {
        self.process(input).unwrap_or_else(|err| {
            warn!(error = %err, "Requisição rejeitada");
            Data::from(&err)
        })
    }

    /// Processa vários envelopes independentes em paralelo via Rayon.
    ///
    /// A saída tem a mesma ordem da entrada; cada item falha ou não sozinho.
    pub fn respond_batch(&self, inputs: Vec<Data>) -> Vec<Data> {
        inputs.into_par_iter().map(|input| self.respond(input)).collect()
    }
}

impl WebService for UniqueTerms {
    fn get_metadata(&self) -> String {
        self.metadata_envelope()
            .and_then(|data| data.to_json())
            .unwrap_or_else(|err| serialize_or_fallback(&Data::from(&err)))
    }

    fn execute(&self, input: &str) -> String {
        let response = match Data::from_json(input) {
            Ok(data) => self.respond(data),
            Err(err) => {
                warn!(error = %err, "Envelope de entrada inválido");
                Data::from(&err)
            }
        };
        serialize_or_fallback(&response)
    }
}

fn serialize_or_fallback(data: &Data) -> String {
    data.to_json().unwrap_or_else(|_| FALLBACK_ERROR_JSON.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::annotation_type;

    #[test]
    fn test_execute_text() {
        let service = UniqueTerms::new();
        let out = service.execute(&Data::text("a a a a").to_json().unwrap());
        let data = Data::from_json(&out).unwrap();
        assert_eq!(data.discriminator, discriminator::LIF);
        let annotations = &data.payload["views"][0]["annotations"];
        assert_eq!(annotations.as_array().map(Vec::len), Some(1));
        assert_eq!(annotations[0]["features"]["word"], "a");
        assert_eq!(annotations[0]["@type"], annotation_type::TOKEN);
    }

    #[test]
    fn test_execute_garbage_returns_error_envelope() {
        let out = UniqueTerms::new().execute("isto não é json");
        let data = Data::from_json(&out).unwrap();
        assert!(data.is_error());
        assert!(data.payload.as_str().unwrap_or_default().starts_with("Payload malformado"));
    }

    #[test]
    fn test_respond_batch_keeps_order_and_isolates_failures() {
        let inputs = vec![
            Data::text("x y x"),
            Data::new("http://example.org/unknown", "?"),
            Data::text(""),
        ];
        let out = UniqueTerms::new().respond_batch(inputs);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].payload["views"][0]["annotations"].as_array().map(Vec::len), Some(2));
        assert!(out[1].is_error());
        assert_eq!(out[2].payload["views"][0]["annotations"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_get_metadata_is_meta_envelope() {
        let data = Data::from_json(&UniqueTerms::new().get_metadata()).unwrap();
        assert_eq!(data.discriminator, discriminator::META);
        assert_eq!(data.payload["produces"]["annotations"][0], annotation_type::TOKEN);
    }
}
