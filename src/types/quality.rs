use std::{fmt, str::FromStr};

use crate::types::error::{QualityTypeError, Result};

/// Bitrate control strategy of an encoder.
///
/// The integer values are part of the public contract: they are what gets stored
/// wherever a quality type is persisted as a raw number, so they never change.
///
/// # Examples
///
/// ```
/// use quality_type::QualityType;
///
/// assert_eq!(QualityType::Cbr.as_i32(), 1);
/// assert_eq!(QualityType::try_from(0i32), Ok(QualityType::Vbr));
/// assert!(QualityType::try_from(2i32).is_err());
///
/// let parsed: QualityType = "vbr".parse().unwrap();
/// assert_eq!(parsed, QualityType::Vbr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(i32)]
pub enum QualityType {
    /// Variable bitrate
    Vbr = 0,
    /// Constant bitrate
    Cbr = 1,
}

impl QualityType {
    /// Raw value of [`QualityType::Vbr`].
    pub const VBR: i32 = 0;
    /// Raw value of [`QualityType::Cbr`].
    pub const CBR: i32 = 1;

    /// Every quality type, ordered by raw value.
    pub const ALL: [QualityType; 2] = [QualityType::Vbr, QualityType::Cbr];

    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Decodes a raw value, `None` when it is not a known quality type.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            Self::VBR => Some(QualityType::Vbr),
            Self::CBR => Some(QualityType::Cbr),
            _ => None,
        }
    }

    /// Short upper-case name, the form used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            QualityType::Vbr => "VBR",
            QualityType::Cbr => "CBR",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            QualityType::Vbr => "Variable bitrate",
            QualityType::Cbr => "Constant bitrate",
        }
    }

    pub const fn is_variable(self) -> bool {
        matches!(self, QualityType::Vbr)
    }

    pub const fn is_constant(self) -> bool {
        matches!(self, QualityType::Cbr)
    }
}

impl From<QualityType> for i32 {
    fn from(quality: QualityType) -> Self {
        quality.as_i32()
    }
}

impl TryFrom<i64> for QualityType {
    type Error = QualityTypeError;

    fn try_from(value: i64) -> Result<Self> {
        i32::try_from(value)
            .ok()
            .and_then(QualityType::from_i32)
            .ok_or(QualityTypeError::InvalidValue(value))
    }
}

impl TryFrom<i32> for QualityType {
    type Error = QualityTypeError;

    fn try_from(value: i32) -> Result<Self> {
        QualityType::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for QualityType {
    type Error = QualityTypeError;

    fn try_from(value: u8) -> Result<Self> {
        QualityType::try_from(i64::from(value))
    }
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QualityType {
    type Err = QualityTypeError;

    /// Accepts `VBR`/`CBR` in any case, or the raw values `0`/`1`.
    /// Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();

        let parsed = if let Some(quality) = QualityType::ALL
            .into_iter()
            .find(|quality| input.eq_ignore_ascii_case(quality.name()))
        {
            Ok(quality)
        } else {
            match input.parse::<i64>() {
                Ok(value) => QualityType::try_from(value),
                Err(_) => Err(QualityTypeError::InvalidName(input.to_string())),
            }
        };

        if let Err(e) = &parsed {
            log::debug!("Rejected quality type input {s:?}: {e}");
        }
        parsed
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every integer outside {0, 1} is rejected
        #[test]
        fn out_of_set_integers_rejected(value in any::<i64>().prop_filter("outside the set", |v| !(0..=1).contains(v))) {
            prop_assert_eq!(QualityType::try_from(value), Err(QualityTypeError::InvalidValue(value)));
        }

        /// Property: textual integers behave like their numeric value
        #[test]
        fn textual_integers_match_numeric(value in any::<i32>()) {
            prop_assert_eq!(value.to_string().parse::<QualityType>(), QualityType::try_from(value));
        }

        /// Property: parsing never panics on arbitrary input
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = s.parse::<QualityType>();
        }
    }
}
