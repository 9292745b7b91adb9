use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "********";

/// Wrapper for sensitive fields (passport numbers) that hides the value from
/// Debug and Display while leaving serialization untouched.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the real value, e.g. for field-level validation.
    pub fn inner(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Result payloads carry the real value for the terminal display; the
        // mask only guards log macros like tracing::debug!("{:?}", record).
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_masked() {
        let passport = Masked::new("A1234567890".to_string());
        assert_eq!(format!("{:?}", passport), "********");
        assert_eq!(format!("{}", passport), "********");
    }

    #[test]
    fn test_serializes_real_value() {
        let passport = Masked::new("A1234567890".to_string());
        let json = serde_json::to_string(&passport).unwrap();
        assert_eq!(json, "\"A1234567890\"");
    }
}
