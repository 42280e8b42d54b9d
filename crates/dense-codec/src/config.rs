// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Text layout settings loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! precision = 4
//! width = 8
//! separator = " "
//! ```
//! Every key is optional and falls back to the default shown above.

use crate::CodecError;
use dense_core::{DEFAULT_PRECISION, DEFAULT_SEPARATOR, DEFAULT_WIDTH};
use std::path::Path;

/// How values are rendered in, and split out of, text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextFormat {
    /// Fractional digits for floating-point values (ignored for integers).
    ///
    /// Float text round trips are exact only for values representable at this
    /// many digits; the default of 4 rounds `0.123456` to `0.1235`.
    pub precision: usize,
    /// Minimum column width in characters; values are left-aligned.
    pub width: usize,
    /// Character written between values. Readers also split on whitespace.
    pub separator: char,
}

impl TextFormat {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CodecError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodecError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CodecError> {
        let format: Self = toml::from_str(toml_str)
            .map_err(|e| CodecError::Config(format!("TOML parse error: {e}")))?;
        format.validate()?;
        Ok(format)
    }

    /// Serialises settings to TOML.
    pub fn to_toml(&self) -> Result<String, CodecError> {
        toml::to_string_pretty(self)
            .map_err(|e| CodecError::Config(format!("TOML serialise error: {e}")))
    }

    /// Rejects separators that would collide with headers, numbers, or line
    /// breaks.
    pub fn validate(&self) -> Result<(), CodecError> {
        let sep = self.separator;
        if sep.is_alphanumeric() || matches!(sep, ',' | '.' | '-' | '+' | '\n' | '\r') {
            return Err(CodecError::Config(format!(
                "separator {sep:?} is not allowed; use whitespace or punctuation other than ',.-+'"
            )));
        }
        Ok(())
    }

    pub(crate) fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || c == self.separator
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            width: DEFAULT_WIDTH,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let f = TextFormat::default();
        assert_eq!(f.precision, 4);
        assert_eq!(f.width, 8);
        assert_eq!(f.separator, ' ');
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
precision = 2
width = 10
separator = ";"
"#;
        let f = TextFormat::from_toml(toml).unwrap();
        assert_eq!(f.precision, 2);
        assert_eq!(f.width, 10);
        assert_eq!(f.separator, ';');
    }

    #[test]
    fn test_from_toml_partial() {
        let f = TextFormat::from_toml("precision = 6").unwrap();
        assert_eq!(f.precision, 6);
        assert_eq!(f.width, 8);
        assert_eq!(f.separator, ' ');
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let f = TextFormat {
            precision: 3,
            width: 5,
            separator: '\t',
        };
        let toml = f.to_toml().unwrap();
        assert_eq!(TextFormat::from_toml(&toml).unwrap(), f);
    }

    #[test]
    fn test_rejects_comma_separator() {
        let result = TextFormat::from_toml("separator = \",\"");
        assert!(matches!(result, Err(CodecError::Config(_))));
    }

    #[test]
    fn test_rejects_digit_separator() {
        let f = TextFormat {
            separator: '7',
            ..Default::default()
        };
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            TextFormat::from_toml("precision = \"four\""),
            Err(CodecError::Config(_))
        ));
    }

    #[test]
    fn test_is_separator() {
        let f = TextFormat {
            separator: ';',
            ..Default::default()
        };
        assert!(f.is_separator(';'));
        assert!(f.is_separator('\t'));
        assert!(!f.is_separator('1'));
    }
}
