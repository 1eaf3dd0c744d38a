//! JSON pipeline settings carrying the `Maybe` serialization format.

use std::io;

use maybee::SerializationFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Settings for a JSON pipeline.
///
/// The format is fixed when the settings are built and applies to every
/// `Maybe` reached while encoding or decoding through them, however deeply
/// nested.
///
/// ```
/// use maybee::{Maybe, SerializationFormat};
/// use maybee_json::JsonSettings;
///
/// let settings = JsonSettings::new().configure_maybe(SerializationFormat::Array);
/// assert_eq!(settings.to_string(&Maybe::is(42)).unwrap(), "[42]");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonSettings {
    format: SerializationFormat,
    pretty: bool,
}

impl JsonSettings {
    /// Nullable format, compact output.
    pub fn new() -> Self { Self::default() }

    pub fn configure_maybe(mut self, format: SerializationFormat) -> Self {
        self.format = format;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format(&self) -> SerializationFormat { self.format }

    pub fn to_string<T: ?Sized + Serialize>(&self, value: &T) -> Result<String> {
        log::trace!("encoding json string with maybe format {}", self.format);
        let json = self.format.scope(|| {
            if self.pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            }
        })?;
        Ok(json)
    }

    pub fn to_vec<T: ?Sized + Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        log::trace!("encoding json bytes with maybe format {}", self.format);
        let bytes = self.format.scope(|| {
            if self.pretty {
                serde_json::to_vec_pretty(value)
            } else {
                serde_json::to_vec(value)
            }
        })?;
        Ok(bytes)
    }

    pub fn to_writer<W, T>(&self, writer: W, value: &T) -> Result<()>
    where
        W: io::Write,
        T: ?Sized + Serialize,
    {
        log::trace!("encoding json to writer with maybe format {}", self.format);
        self.format.scope(|| {
            if self.pretty {
                serde_json::to_writer_pretty(writer, value)
            } else {
                serde_json::to_writer(writer, value)
            }
        })?;
        Ok(())
    }

    pub fn to_value<T: ?Sized + Serialize>(&self, value: &T) -> Result<Value> {
        log::trace!("encoding json value with maybe format {}", self.format);
        Ok(serde_json::to_value(self.format.wrap(value))?)
    }

    pub fn from_str<'a, T: Deserialize<'a>>(&self, s: &'a str) -> Result<T> {
        log::trace!("decoding json string with maybe format {}", self.format);
        Ok(self.format.scope(|| serde_json::from_str(s))?)
    }

    pub fn from_slice<'a, T: Deserialize<'a>>(&self, v: &'a [u8]) -> Result<T> {
        log::trace!("decoding json bytes with maybe format {}", self.format);
        Ok(self.format.scope(|| serde_json::from_slice(v))?)
    }

    pub fn from_reader<R, T>(&self, reader: R) -> Result<T>
    where
        R: io::Read,
        T: serde::de::DeserializeOwned,
    {
        log::trace!("decoding json from reader with maybe format {}", self.format);
        Ok(self.format.scope(|| serde_json::from_reader(reader))?)
    }

    pub fn from_value<T: serde::de::DeserializeOwned>(&self, value: Value) -> Result<T> {
        log::trace!("decoding json value with maybe format {}", self.format);
        Ok(self.format.scope(|| serde_json::from_value(value))?)
    }
}
