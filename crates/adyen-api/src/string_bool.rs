//! Boolean carried on the wire as the string `"true"` or `"false"`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Boolean that Adyen sends as a string (`"live"`, `"success"`).
///
/// Decoding trims whitespace, ignores case and accepts `true`/`false`/`1`/`0`
/// as well as a native JSON boolean. Anything else is a decode error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringBool(pub bool);

impl StringBool {
    pub fn as_str(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

impl From<bool> for StringBool {
    fn from(value: bool) -> Self {
        StringBool(value)
    }
}

impl From<StringBool> for bool {
    fn from(value: StringBool) -> Self {
        value.0
    }
}

impl PartialEq<bool> for StringBool {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StringBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StringBool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(StringBool(true)),
            "false" | "0" => Ok(StringBool(false)),
            other => Err(format!("invalid boolean string '{other}'")),
        }
    }
}

impl Serialize for StringBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StringBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StringBoolVisitor;

        impl Visitor<'_> for StringBoolVisitor {
            type Value = StringBool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"true\", \"false\", \"1\", \"0\" or a boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<StringBool, E> {
                Ok(StringBool(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StringBool, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StringBoolVisitor)
    }
}
