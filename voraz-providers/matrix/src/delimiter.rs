//! Cell delimiter selection.

use std::str::FromStr;

use crate::errors::DistanceMatrixError;

const CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Separator between matrix cells.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Delimiter {
    /// Pick whichever of `,`, `;`, or tab occurs most in the header row.
    #[default]
    Auto,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// Horizontal tab.
    Tab,
}

impl Delimiter {
    /// Returns the separator byte to use for a matrix whose header is `header`.
    ///
    /// Auto-detection prefers `,` then `;` then tab on ties and falls back to
    /// `,` when the header contains none of them.
    ///
    /// # Examples
    /// ```
    /// use voraz_providers_matrix::Delimiter;
    ///
    /// assert_eq!(Delimiter::Auto.resolve("city;Lima;Cusco"), b';');
    /// assert_eq!(Delimiter::Tab.resolve("a,b,c"), b'\t');
    /// ```
    #[must_use]
    pub fn resolve(self, header: &str) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
            Self::Tab => b'\t',
            Self::Auto => detect(header),
        }
    }
}

fn detect(header: &str) -> u8 {
    let mut best = (CANDIDATES[0], 0_usize);
    for candidate in CANDIDATES {
        let count = header.bytes().filter(|byte| *byte == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

impl FromStr for Delimiter {
    type Err = DistanceMatrixError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "comma" | "," => Ok(Self::Comma),
            "semicolon" | ";" => Ok(Self::Semicolon),
            "tab" | "\\t" => Ok(Self::Tab),
            _ => Err(DistanceMatrixError::UnsupportedDelimiter {
                value: value.to_owned(),
            }),
        }
    }
}
