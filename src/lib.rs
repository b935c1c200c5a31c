//! # quality-type
//!
//! `quality-type` defines the bitrate control mode used by media encoding settings.
//! A [`QualityType`] is either variable bitrate or constant bitrate, and nothing
//! else: out-of-range raw values cannot be stored in it.
//!
//! ## Features
//!
//! - Stable raw values (`VBR = 0`, `CBR = 1`) for persisted settings
//! - Checked conversion from integers and text at input boundaries
//! - Optional `serde` support using the raw integer representation
//!
//! ## Example
//!
//! ```rust
//! use quality_type::{QualityType, QualityTypeError};
//!
//! fn main() -> Result<(), QualityTypeError> {
//!     // Value coming from a command-line flag
//!     let quality: QualityType = "CBR".parse()?;
//!     assert_eq!(quality, QualityType::Cbr);
//!
//!     // Value coming from a settings store
//!     let stored = QualityType::try_from(0i32)?;
//!     assert_eq!(stored.description(), "Variable bitrate");
//!
//!     // Anything else is rejected
//!     assert!(QualityType::try_from(7i32).is_err());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod types;

pub use types::{
    error::{QualityTypeError, Result},
    quality::QualityType,
};
