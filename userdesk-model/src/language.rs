//! Interface language codes and the closed set the editor offers.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A language code such as `en`. Stored lower-cased and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self, ModelError> {
        let normalized = code.as_ref().trim().to_ascii_lowercase();
        if normalized.is_empty()
            || !normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ModelError::InvalidLanguageCode(
                code.as_ref().to_string(),
            ));
        }
        Ok(LanguageCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed-world enumeration of the language codes the editor may select.
///
/// The set is supplied by configuration; this type only answers membership
/// questions and preserves the configured order for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    codes: Vec<LanguageCode>,
}

impl SupportedLanguages {
    pub fn new<I, S>(codes: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<LanguageCode> = Vec::new();
        for raw in codes {
            let code = LanguageCode::new(raw)?;
            if !parsed.contains(&code) {
                parsed.push(code);
            }
        }
        if parsed.is_empty() {
            return Err(ModelError::EmptyLanguageSet);
        }
        Ok(Self { codes: parsed })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// Look up the member matching `code`, if any.
    pub fn resolve(&self, code: &str) -> Option<&LanguageCode> {
        let needle = code.trim().to_ascii_lowercase();
        self.codes.iter().find(|candidate| candidate.0 == needle)
    }

    pub fn as_slice(&self) -> &[LanguageCode] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
