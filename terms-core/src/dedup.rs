//! # Deduplicação de Termos
//!
//! Mantém apenas a primeira ocorrência de cada forma superficial, preservando
//! a ordem original. Ocorrências posteriores são descartadas sem contagem nem
//! fusão de offsets.
//!
//! ```rust
//! use terms_core::{dedup::dedup, tokenizer::tokenize};
//!
//! let unique = dedup(&tokenize("apple pie apple"));
//! let words: Vec<&str> = unique.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, vec!["apple", "pie"]);
//! ```

use std::collections::HashSet;

use crate::tokenizer::Token;

/// Retorna os tokens cuja forma superficial ainda não apareceu, na ordem de entrada.
///
/// O conjunto de formas já vistas é local à chamada. A entrada não é alterada.
pub fn dedup(tokens: &[Token]) -> Vec<Token> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .filter(|token| seen.insert(token.text.as_str()))
        .cloned()
        .collect()
}
