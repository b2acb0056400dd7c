//! Propriedades do pipeline para entradas arbitrárias: determinismo, offsets
//! corretos, unicidade, ordem de primeira ocorrência e idempotência do dedup.

use std::collections::HashSet;

use proptest::prelude::*;
use terms_core::dedup::dedup;
use terms_core::pipeline::annotate;
use terms_core::tokenizer::tokenize;

/// Textos com muitas repetições: palavras curtas separadas por espaços variados.
fn repetitive_text() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-cé]{1,2}", "[ \t\n\u{00A0}]{1,3}"), 0..30).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![".{0,200}", repetitive_text()]
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn annotate_is_deterministic(text in any_text()) {
        prop_assert_eq!(annotate(&text), annotate(&text));
    }

    #[test]
    fn offsets_reproduce_word(text in any_text()) {
        for annotation in annotate(&text).annotations {
            let (start, end) = (annotation.start.unwrap(), annotation.end.unwrap());
            prop_assert!(end > start);
            prop_assert_eq!(char_slice(&text, start, end), annotation.word().unwrap());
        }
    }

    #[test]
    fn words_are_unique(text in any_text()) {
        let view = annotate(&text);
        let mut seen = HashSet::new();
        for annotation in &view.annotations {
            prop_assert!(seen.insert(annotation.word().unwrap().to_string()));
        }
        let ids: HashSet<&str> = view.annotations.iter().map(|a| a.id.as_str()).collect();
        prop_assert_eq!(ids.len(), view.annotations.len());
    }

    #[test]
    fn order_is_first_occurrence(text in any_text()) {
        let mut seen = HashSet::new();
        let expected: Vec<&str> = text.split_whitespace().filter(|w| seen.insert(*w)).collect();
        let view = annotate(&text);
        let got: Vec<&str> = view.annotations.iter().filter_map(|a| a.word()).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn dedup_is_idempotent(text in any_text()) {
        let once = dedup(&tokenize(&text));
        prop_assert_eq!(dedup(&once), once);
    }
}
