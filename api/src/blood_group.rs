//! Defines the blood groups recognized by the platform.

use serde::Deserialize;
use serde::Serialize;

/// One of the eight ABO/Rh blood groups.
///
/// Serializes to the short clinical form ("A+", "O-", ...) used by the
/// backend and shown everywhere in the interface.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APositive,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    #[strum(serialize = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    #[strum(serialize = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    #[strum(serialize = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    #[strum(serialize = "O-")]
    ONegative,
}

impl BloodGroup {
    /// Returns the short clinical code for the group (e.g., "AB-").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}
