// Invariants over the shipped word table.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use secret_word::WORD_LIST;

#[test]
fn word_list_is_nonempty() {
    assert!(!WORD_LIST.is_empty());
}

#[test]
fn categories_are_named_unique_and_populated() {
    let mut seen = HashSet::new();
    for (category, list) in WORD_LIST {
        assert!(!category.is_empty(), "unnamed category in WORD_LIST");
        assert!(seen.insert(*category), "duplicate category '{}'", category);
        assert!(!list.is_empty(), "category '{}' has no words", category);
    }
}

#[test]
fn words_are_lowercase_ascii_and_unique_per_category() {
    for (category, list) in WORD_LIST {
        let mut seen = HashSet::new();
        for word in *list {
            assert!(!word.is_empty(), "empty word in category '{}'", category);
            assert!(
                seen.insert(*word),
                "duplicate word '{}' in category '{}'",
                word,
                category
            );
            for c in word.chars() {
                assert!(
                    c.is_ascii_lowercase(),
                    "invalid char '{}' in word '{}' of category '{}'",
                    c,
                    word,
                    category
                );
            }
        }
    }
}
