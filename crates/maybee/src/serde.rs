//! Field-level encodings that ignore the active [`SerializationFormat`].
//!
//! ```
//! use maybee::Maybe;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     #[serde(with = "maybee::serde::array", default)]
//!     nickname: Maybe<String>,
//!     #[serde(with = "maybee::serde::nullable", default)]
//!     age: Maybe<u8>,
//! }
//!
//! let json = serde_json::to_string(&Profile { nickname: Maybe::is("b".into()), age: Maybe::empty() }).unwrap();
//! assert_eq!(json, r#"{"nickname":["b"],"age":null}"#);
//! ```
//!
//! A field using `with` is a required field for serde; add `default` to read
//! a missing key as empty.
//!
//! [`SerializationFormat`]: crate::SerializationFormat

macro_rules! field_encoding {
    ($name:ident, $encoding:ty) => {
        pub mod $name {
            use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

            use crate::encoding::MaybeEncoding;
            use crate::Maybe;

            pub fn serialize<T, S>(value: &Maybe<T>, serializer: S) -> Result<S::Ok, S::Error>
            where
                T: Serialize,
                S: Serializer,
            {
                <$encoding>::encode(value, serializer)
            }

            pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Maybe<T>, D::Error>
            where
                T: Deserialize<'de>,
                D: Deserializer<'de>,
            {
                <$encoding>::decode(deserializer)
            }
        }
    };
}

field_encoding!(nullable, crate::encoding::AsNullable);
field_encoding!(array, crate::encoding::AsArray);
