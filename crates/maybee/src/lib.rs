//! maybee: an explicit present/absent container for Rust.
//!
//! `Maybe<T>` either holds a value or is empty, with combinators for mapping
//! and chaining, a bridge from expected errors to emptiness, and two serde
//! encodings (nullable and array) selectable per pipeline or per field.

pub mod attempt;
pub mod combinators;
pub mod encoding;
pub mod error;
pub mod maybe;
pub mod nullable;
pub mod serde;

pub use attempt::{Attempt, ErrorKind};
pub use encoding::{AsArray, AsNullable, MaybeEncoding, PresenceTagged, SerializationFormat};
pub use error::{MaybeError, ParseFormatError};
pub use maybe::Maybe;
pub use nullable::Nullable;
