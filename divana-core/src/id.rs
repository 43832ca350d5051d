use std::fmt::Display;

/// Normalised form of a vendor-assigned device identifier.
///
/// Raw identifiers may arrive as fixed-width byte buffers padded with zeros. Every zero
/// byte is removed before the bytes are interpreted as text, so two identifiers compare
/// equal exactly when their stripped string forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn from_raw(raw: &[u8]) -> Self {
        let stripped: Vec<u8> = raw.iter().copied().filter(|b| *b != 0).collect();
        Self(String::from_utf8_lossy(&stripped).into_owned())
    }

    /// Build an identifier from a persisted string, applying the same normalisation.
    pub fn from_stored(stored: &str) -> Self {
        Self::from_raw(stored.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
