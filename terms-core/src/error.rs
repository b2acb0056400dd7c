//! Erros da fronteira do adaptador.
//!
//! O núcleo (tokenizar, deduplicar, anotar, montar a view) é total e nunca
//! falha. Só o desempacotamento do envelope de entrada pode rejeitar uma
//! requisição, e nesse caso o núcleo não é executado.

use thiserror::Error;

/// Tipo `Result` do serviço.
pub type Result<T> = std::result::Result<T, Error>;

/// Motivos de rejeição de uma requisição.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// O JSON recebido não é um envelope `Data` válido.
    #[error("Payload malformado: {0}")]
    Malformed(String),

    /// O payload não corresponde ao formato declarado pelo discriminador.
    #[error("Payload incompatível com {discriminator}: {reason}")]
    PayloadMismatch {
        discriminator: String,
        reason: String,
    },

    /// Discriminador fora dos formatos aceitos (texto ou LIF).
    #[error("Formato não suportado: {0}")]
    UnsupportedFormat(String),

    /// Falha de serialização ao montar a resposta.
    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    pub fn payload_mismatch(discriminator: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::PayloadMismatch {
            discriminator: discriminator.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_format(discriminator: impl Into<String>) -> Self {
        Error::UnsupportedFormat(discriminator.into())
    }

    /// Verdadeiro quando a culpa é da requisição (e não do serviço).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Serialization(_))
    }
}
