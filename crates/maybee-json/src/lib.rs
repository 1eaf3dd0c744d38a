//! maybee-json: `serde_json` pipelines with a chosen `Maybe` serialization
//! format.

pub mod configured;
pub mod error;
pub mod settings;

pub use configured::{ConfigureMaybe, Configured};
pub use error::{CodecError, Result};
pub use maybee::SerializationFormat;
pub use settings::JsonSettings;
