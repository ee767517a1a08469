use serde::{Serialize, Serializer};
use std::fmt;

/// Contact data that must not show up in log output. `Debug` prints a fixed
/// mask; serialization passes the real value to the booking endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_contact() {
        let email = Masked("someone@example.com".to_string());
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(email.expose(), "someone@example.com");
    }

    #[test]
    fn test_serialize_sends_real_value() {
        let email = Masked("someone@example.com".to_string());
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"someone@example.com\""
        );
    }
}
