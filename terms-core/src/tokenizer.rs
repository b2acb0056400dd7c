//! # Tokenizador por Espaços
//!
//! Divide o texto bruto em tokens usando apenas espaços em branco como
//! delimitador: cada sequência máxima de caracteres que não são espaço vira um
//! token. Nenhuma normalização é aplicada (caixa, pontuação e acentos ficam
//! como estão no texto original).
//!
//! ## Offsets
//!
//! O contrato LIF mede posições em **caracteres**, não em bytes. Cada token
//! guarda os dois sistemas:
//!
//! - `start`/`end`: offsets de caractere (intervalo semiaberto), publicados
//!   nas anotações;
//! - `byte_start`/`byte_end`: offsets de byte, para fatiar o `&str` original
//!   sem recontar caracteres.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use terms_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("maçã  torta");
//! assert_eq!(tokens[1].text, "torta");
//! assert_eq!((tokens[1].start, tokens[1].end), (6, 11));
//! assert_eq!(tokens[1].byte_start, 8); // "ç" e "ã" ocupam 2 bytes cada
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Um token extraído do texto original.
///
/// O token é efêmero: é produzido e consumido dentro de uma única requisição.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Forma superficial, idêntica à fatia do texto original.
    pub text: String,
    /// Offset de caractere inicial (inclusivo).
    pub start: usize,
    /// Offset de caractere final (exclusivo).
    pub end: usize,
    /// Offset de byte inicial (inclusivo).
    pub byte_start: usize,
    /// Offset de byte final (exclusivo).
    pub byte_end: usize,
    /// Índice sequencial do token no fluxo tokenizado (0, 1, 2...).
    pub index: usize,
}

impl Token {
    /// Intervalo de bytes do token no texto original.
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    /// Número de caracteres do token.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Tokeniza um texto separando em sequências máximas de espaço em branco.
///
/// Texto vazio ou só com espaços produz uma lista vazia.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending: Option<(usize, usize)> = None; // (char_start, byte_start)
    let mut char_pos = 0;

    for (byte_pos, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some((start, byte_start)) = pending.take() {
                flush_token(&mut tokens, text, start, char_pos, byte_start, byte_pos);
            }
        } else if pending.is_none() {
            pending = Some((char_pos, byte_pos));
        }
        char_pos += 1;
    }

    if let Some((start, byte_start)) = pending {
        flush_token(&mut tokens, text, start, char_pos, byte_start, text.len());
    }

    tokens
}

/// Fecha o token acumulado e adiciona à lista
fn flush_token(
    tokens: &mut Vec<Token>,
    text: &str,
    start: usize,
    end: usize,
    byte_start: usize,
    byte_end: usize,
) {
    let index = tokens.len();
    tokens.push(Token {
        text: text[byte_start..byte_end].to_string(),
        start,
        end,
        byte_start,
        byte_end,
        index,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(tokens: &[Token]) -> Vec<(&str, usize, usize)> {
        tokens.iter().map(|t| (t.text.as_str(), t.start, t.end)).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("one two three");
        assert_eq!(spans(&tokens), vec![("one", 0, 3), ("two", 4, 7), ("three", 8, 13)]);
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        let tokens = tokenize("  apple\t\tpie \n");
        assert_eq!(spans(&tokens), vec![("apple", 2, 7), ("pie", 9, 12)]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation_and_case() {
        let tokens = tokenize("Olá, mundo! olá");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Olá,", "mundo!", "olá"]);
    }

    #[test]
    fn test_tokenize_char_offsets_with_multibyte() {
        let text = "café com pão";
        let tokens = tokenize(text);
        assert_eq!(spans(&tokens), vec![("café", 0, 4), ("com", 5, 8), ("pão", 9, 12)]);
        for token in &tokens {
            assert_eq!(&text[token.byte_range()], token.text);
            let by_chars: String = text.chars().skip(token.start).take(token.char_len()).collect();
            assert_eq!(by_chars, token.text);
        }
    }

    #[test]
    fn test_tokenize_unicode_whitespace() {
        // U+00A0 (no-break space) e U+3000 (espaço ideográfico) também delimitam
        let tokens = tokenize("a\u{00A0}b\u{3000}c");
        assert_eq!(spans(&tokens), vec![("a", 0, 1), ("b", 2, 3), ("c", 4, 5)]);
    }
}
