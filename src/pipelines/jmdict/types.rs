//! Normalized word entries.
use serde::{Deserialize, Serialize};

/// One word of the dictionary.
///
/// Optional fields are serialized as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub kanji: Option<String>,
    pub reading: String,
    pub meanings: Vec<String>,
    /// Deduplicated, in order of first appearance.
    pub parts_of_speech: Vec<String>,
    pub examples: Option<Vec<Example>>,
}

/// Usage example: a source-language text and its target-language translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "japanese")]
    pub source: String,
    #[serde(rename = "english")]
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_null() {
        let entry = WordEntry {
            kanji: None,
            reading: "する".to_string(),
            meanings: vec!["to do".to_string()],
            parts_of_speech: vec![],
            examples: None,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"kanji":null,"reading":"する","meanings":["to do"],"parts_of_speech":[],"examples":null}"#
        );
    }

    #[test]
    fn example_keys() {
        let ex = Example {
            source: "ご飯を食べる".to_string(),
            target: "I eat rice.".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&ex).unwrap(),
            r#"{"japanese":"ご飯を食べる","english":"I eat rice."}"#
        );
    }
}
