//! Serializable documents
//!
//! A decision tree is written as nested arrays: `[letters, {pattern: subtree, ...}]`,
//! where `pattern` is the word as revealed after guessing `letters` (`_` marks hidden
//! positions) and a finished game is the string `"WON!"`.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::collections::BTreeMap;

/// Marker written for a finished game
pub const WON: &str = "WON!";

/// One node of a serialized decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceJson {
    Won,
    Guess {
        letters: String,
        outcomes: BTreeMap<String, ChoiceJson>,
    },
}

impl Serialize for ChoiceJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Won => serializer.serialize_str(WON),
            Self::Guess { letters, outcomes } => {
                let mut node = serializer.serialize_tuple(2)?;
                node.serialize_element(letters)?;
                node.serialize_element(outcomes)?;
                node.end()
            }
        }
    }
}

/// A solved game of equal-length words
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StrategyDocument {
    pub max_errors: u32,
    pub alphabet: String,
    pub words: Vec<String>,
    pub strategy: ChoiceJson,
}

/// Solved games for every hint of a mixed word list
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HintedDocument {
    pub words: Vec<String>,
    pub strategies: BTreeMap<String, ChoiceJson>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn won_is_a_string() {
        assert_eq!(serde_json::to_value(ChoiceJson::Won).unwrap(), json!("WON!"));
    }

    #[test]
    fn guess_is_a_pair() {
        let node = ChoiceJson::Guess {
            letters: "a".to_string(),
            outcomes: BTreeMap::from([
                ("a_".to_string(), ChoiceJson::Won),
                (
                    "__".to_string(),
                    ChoiceJson::Guess {
                        letters: "b".to_string(),
                        outcomes: BTreeMap::from([("_b".to_string(), ChoiceJson::Won)]),
                    },
                ),
            ]),
        };

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!(["a", {"a_": "WON!", "__": ["b", {"_b": "WON!"}]}])
        );
    }

    #[test]
    fn document_fields() {
        let document = StrategyDocument {
            max_errors: 0,
            alphabet: "ab".to_string(),
            words: vec!["ab".to_string()],
            strategy: ChoiceJson::Won,
        };
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({"max_errors": 0, "alphabet": "ab", "words": ["ab"], "strategy": "WON!"})
        );
    }
}
