//! # Vocabulário LAPPS
//!
//! URIs de discriminadores, tipos de anotação e nomes de features usados no
//! contrato externo. São constantes fixas do protocolo: nunca são resolvidas
//! dinamicamente.

/// Discriminadores de envelope (`Data.discriminator`).
pub mod discriminator {
    /// Texto puro: o payload é uma string.
    pub const TEXT: &str = "http://vocab.lappsgrid.org/ns/media/text";
    /// Container LIF (JSON-LD): o payload é um objeto `Container`.
    pub const LIF: &str = "http://vocab.lappsgrid.org/ns/media/jsonld#lif";
    /// Alias antigo do container LIF, ainda emitido por serviços legados.
    pub const LAPPS: &str = "http://vocab.lappsgrid.org/ns/media/jsonld#lapps";
    /// JSON-LD genérico, aceito como container.
    pub const JSON_LD: &str = "http://vocab.lappsgrid.org/ns/media/jsonld";
    /// Metadados de serviço.
    pub const META: &str = "http://vocab.lappsgrid.org/ns/meta";
    /// Falha: o payload é a mensagem de erro.
    pub const ERROR: &str = "http://vocab.lappsgrid.org/ns/error";

    /// Verdadeiro para qualquer discriminador que transporta um container LIF.
    pub fn is_container(uri: &str) -> bool {
        matches!(uri, LIF | LAPPS | JSON_LD)
    }
}

/// Tipos de anotação (`@type`).
pub mod annotation_type {
    /// Token: o único tipo produzido por este serviço.
    pub const TOKEN: &str = "http://vocab.lappsgrid.org/Token";
}

/// Nomes de features.
pub mod features {
    /// Forma superficial do token (`Features.Token.WORD`).
    pub const WORD: &str = "word";
}

/// Contexto JSON-LD declarado em todo container LIF.
pub const LIF_CONTEXT: &str = "http://vocab.lappsgrid.org/context-1.0.0.jsonld";

/// Schema do descritor de metadados de serviço.
pub const SERVICE_SCHEMA: &str = "https://vocab.lappsgrid.org/schema/service-schema-1.1.0.json";

/// Licença declarada nos metadados.
pub const LICENSE_MIT: &str = "http://vocab.lappsgrid.org/ns/license/mit";

/// Política de acesso: qualquer uso permitido.
pub const ALLOW_ANY: &str = "http://vocab.lappsgrid.org/ns/allow#any";

/// Valor de `type` em `contains` para a tokenização deduplicada.
pub const TOKENIZATION_UNIQUE: &str = "tokenization:unique";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_aliases() {
        assert!(discriminator::is_container(discriminator::LIF));
        assert!(discriminator::is_container(discriminator::LAPPS));
        assert!(discriminator::is_container(discriminator::JSON_LD));
        assert!(!discriminator::is_container(discriminator::TEXT));
        assert!(!discriminator::is_container(discriminator::ERROR));
    }
}
