//! Wire shape of a credentials request body

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// `{"username": ..., "password": ...}`
///
/// Unknown fields are ignored and missing fields decode as empty strings, so
/// `{"username": "alice"}` is a valid lookup body. Field names match ASCII
/// case-insensitively and a repeated field keeps its last value. `null`,
/// either as the whole body or as a field value, leaves the field untouched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialsPayload {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for CredentialsPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsPayload")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

enum Field {
    Username,
    Password,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("username") {
            Self::Username
        } else if key.eq_ignore_ascii_case("password") {
            Self::Password
        } else {
            Self::Other
        }
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = CredentialsPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a credentials object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CredentialsPayload::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut payload = CredentialsPayload::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = match Field::from_key(&key) {
                Field::Username => &mut payload.username,
                Field::Password => &mut payload.password,
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(payload)
    }
}

impl<'de> Deserialize<'de> for CredentialsPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}
