//! Parse failures.

use thiserror::Error;

use crate::tokenizer::token::LanguageToken;

/// Errors that abort a parse. Generic over the language's token kind so
/// messages can name the kinds involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError<K: LanguageToken> {
    /// The next token (or its absence) did not match what the grammar
    /// allows at this point. `actual` is `None` when the token sequence
    /// was exhausted.
    #[error("expected {} but found {}", describe_expected(.expected), describe_actual(.actual))]
    Syntax {
        expected: Vec<K>,
        actual: Option<K>,
    },

    /// Two sibling declarations share a name.
    #[error("duplicate identifier `{0}`")]
    DuplicateIdentifier(String),
}

impl<K: LanguageToken> ParseError<K> {
    pub(crate) fn syntax(expected: &[K], actual: Option<K>) -> Self {
        Self::Syntax {
            expected: expected.to_vec(),
            actual,
        }
    }
}

fn describe_expected<K: LanguageToken>(expected: &[K]) -> String {
    match expected {
        [] => "any token".to_owned(),
        [kind] => kind.to_string(),
        kinds => {
            let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

fn describe_actual<K: LanguageToken>(actual: &Option<K>) -> String {
    match actual {
        Some(kind) => kind.to_string(),
        None => "end of input".to_owned(),
    }
}
