//! Reads documents written in the legacy array format and rewrites them in the
//! nullable format.
//!
//! Run with `RUST_LOG=trace` to see the codec calls.

use maybee::Maybe;
use maybee_json::{JsonSettings, SerializationFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Contact {
    name: String,
    email: Maybe<String>,
    age: Maybe<u8>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let target: SerializationFormat = std::env::args().nth(1).as_deref().unwrap_or("nullable").parse()?;
    let legacy = JsonSettings::new().configure_maybe(SerializationFormat::Array);
    let current = JsonSettings::new().configure_maybe(target).pretty(true);

    let stored = [
        r#"{"name":"Ada","email":["ada@example.org"],"age":[]}"#,
        r#"{"name":"Grace","email":[],"age":[85]}"#,
    ];

    for doc in stored {
        let contact: Contact = legacy.from_str(doc)?;
        println!("{} email={} age={}", contact.name, contact.email, contact.age);
        println!("{}", current.to_string(&contact)?);
    }
    Ok(())
}
