//! Human-readable text forms.
//!
//! Identifiers and objects use a checksummed Bech32m string whose
//! human-readable part names the type. Field, group and scalar elements are
//! written as a decimal integer followed by a type suffix (`5field`).

mod bech32m;
pub mod numeric;

pub use bech32m::{Bech32Codec, Bech32m};

use crate::ser::CodecResult;

/// Canonical text codec shared by every primitive with a text form.
pub trait TextCodec: Sized {
    /// Renders the canonical text form.
    fn to_text(&self) -> String;

    /// Parses the canonical text form.
    fn from_text(text: &str) -> CodecResult<Self>;
}
