//! Attaching a `Maybe` format to an existing `serde_json` serializer or
//! deserializer.

use std::io;

use maybee::SerializationFormat;
use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::Result;

/// Fluent entry point, mirroring [`JsonSettings::configure_maybe`](crate::JsonSettings::configure_maybe)
/// for serializer instances.
pub trait ConfigureMaybe: Sized {
    fn configure_maybe(self, format: SerializationFormat) -> Configured<Self>;
}

impl<W, F> ConfigureMaybe for serde_json::Serializer<W, F> {
    fn configure_maybe(self, format: SerializationFormat) -> Configured<Self> {
        Configured { inner: self, format }
    }
}

impl<R> ConfigureMaybe for serde_json::Deserializer<R> {
    fn configure_maybe(self, format: SerializationFormat) -> Configured<Self> {
        Configured { inner: self, format }
    }
}

/// A serializer or deserializer that applies its format to every call.
pub struct Configured<S> {
    inner: S,
    format: SerializationFormat,
}

impl<S> Configured<S> {
    pub fn format(&self) -> SerializationFormat { self.format }
}

impl<W: io::Write, F: Formatter> Configured<serde_json::Serializer<W, F>> {
    pub fn serialize<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.format.wrap(value).serialize(&mut self.inner)?;
        Ok(())
    }

    pub fn into_inner(self) -> W { self.inner.into_inner() }
}

impl<'de, R: serde_json::de::Read<'de>> Configured<serde_json::Deserializer<R>> {
    /// Reads the next value; call [`end`](Self::end) to reject trailing input.
    pub fn deserialize<T: Deserialize<'de>>(&mut self) -> Result<T> {
        Ok(self.format.seed::<T>().deserialize(&mut self.inner)?)
    }

    pub fn end(&mut self) -> Result<()> {
        self.inner.end()?;
        Ok(())
    }
}
