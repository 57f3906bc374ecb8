//! Language classification of glosses and meanings.
use std::fmt;

use super::Filter;

/// Language of a gloss, as declared by its source markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language<'a> {
    /// No language attribute: the dictionary's default language.
    Unmarked,
    /// Explicit language code.
    Tagged(&'a str),
}

impl<'a> Language<'a> {
    /// Classify the value of a language attribute.
    pub fn classify(attribute: Option<&'a str>) -> Self {
        match attribute {
            None => Self::Unmarked,
            Some(code) => Self::Tagged(code.trim()),
        }
    }
}

/// The single language whose glosses are kept.
///
/// Unmarked glosses always belong to the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage {
    code: String,
}

impl TargetLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Default for TargetLanguage {
    /// JMdict's default gloss language.
    fn default() -> Self {
        Self::new("eng")
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl<'a> Filter<Language<'a>> for TargetLanguage {
    fn detect(&self, lang: Language<'a>) -> bool {
        match lang {
            Language::Unmarked => true,
            Language::Tagged(code) => code == self.code,
        }
    }
}
