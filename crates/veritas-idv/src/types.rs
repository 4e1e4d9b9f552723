//! Document types, field selectors, and the two-decimal score type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdvError;

/// Kind of identity document captured during verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Driver's license.
    DrivingLicense,
    /// National identity card.
    IdCard,
    /// Passport (single data page, no back side).
    Passport,
}

impl DocumentType {
    /// Every document type, in declaration order.
    pub const ALL: [DocumentType; 3] = [Self::DrivingLicense, Self::IdCard, Self::Passport];

    /// Wire name of the document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DrivingLicense => "driving_license",
            Self::IdCard => "id_card",
            Self::Passport => "passport",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = IdvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|doc_type| doc_type.as_str() == s)
            .ok_or_else(|| IdvError::UnknownDocumentType(s.to_string()))
    }
}

/// Selector naming one field of [`CollectedData`](crate::CollectedData).
///
/// Used to address a field generically, for clearing it or for reporting
/// which fields have been collected, without exposing its value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    BiometricConsent,
    Face,
    IdDocumentBack,
    IdDocumentFront,
    IdDocumentType,
}

impl FieldType {
    /// Every field selector, in declaration order.
    pub const ALL: [FieldType; 5] = [
        Self::BiometricConsent,
        Self::Face,
        Self::IdDocumentBack,
        Self::IdDocumentFront,
        Self::IdDocumentType,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BiometricConsent => "biometric_consent",
            Self::Face => "face",
            Self::IdDocumentBack => "id_document_back",
            Self::IdDocumentFront => "id_document_front",
            Self::IdDocumentType => "id_document_type",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = IdvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| IdvError::UnknownFieldType(s.to_string()))
    }
}

/// Decimal value with two-decimal-place precision.
///
/// Magnitudes are limited to [`MAX_HUNDREDTHS`](Self::MAX_HUNDREDTHS).
///
/// Stored as a whole number of hundredths so equality and hashing are exact.
/// On the wire it is a plain JSON number (`0.87`). Intended for analytics
/// scores, not monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TwoDecimalFloat {
    hundredths: i64,
}

impl TwoDecimalFloat {
    /// Largest magnitude, in hundredths, accepted by every constructor.
    ///
    /// Up to this bound `hundredths / 100.0` scaled back by `100.0` stays
    /// within a small fraction of a hundredth, so the `f64` wire form
    /// decodes to the same value.
    pub const MAX_HUNDREDTHS: i64 = 1_000_000_000_000;

    /// Round `value` to two decimal places.
    pub fn new(value: f64) -> Result<Self, IdvError> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled.abs() > Self::MAX_HUNDREDTHS as f64 {
            return Err(IdvError::InvalidScore(format!(
                "{} is outside the supported score range",
                value
            )));
        }
        Ok(Self {
            hundredths: scaled as i64,
        })
    }

    /// Create from a whole number of hundredths (`87` is `0.87`).
    pub fn from_hundredths(hundredths: i64) -> Result<Self, IdvError> {
        if hundredths.unsigned_abs() > Self::MAX_HUNDREDTHS.unsigned_abs() {
            return Err(IdvError::InvalidScore(format!(
                "{} hundredths is outside the supported score range",
                hundredths
            )));
        }
        Ok(Self { hundredths })
    }

    /// The value in hundredths.
    pub fn hundredths(&self) -> i64 {
        self.hundredths
    }

    /// The value as a float.
    pub fn value(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl TryFrom<f64> for TwoDecimalFloat {
    type Error = IdvError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TwoDecimalFloat> for f64 {
    fn from(score: TwoDecimalFloat) -> Self {
        score.value()
    }
}

impl fmt::Display for TwoDecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
