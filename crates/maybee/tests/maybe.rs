use std::collections::HashSet;
use std::fmt;

use maybee::{Maybe, MaybeError};
use serde_json::json;

#[derive(Debug)]
struct TimeZoneMissing;

impl fmt::Display for TimeZoneMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("time zone missing") }
}

impl std::error::Error for TimeZoneMissing {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Inner(String);

#[test]
#[allow(deprecated)]
fn empty_maybe_of_value_type() {
    let maybe = Maybe::<i32>::empty();
    assert!(maybe.is_empty());
    assert!(!maybe.exists());
    assert_eq!(maybe.it_or_default(), 0);
    assert_eq!(maybe.it(), Err(MaybeError::Empty));
    assert!(matches!(maybe.it_or_throw(|| TimeZoneMissing), Err(TimeZoneMissing)));
    assert!(matches!(maybe.it_or_throw_error(TimeZoneMissing), Err(TimeZoneMissing)));
    assert_eq!(maybe.as_nullable(), None);
    assert_eq!(maybe.as_list().len(), 0);
}

#[test]
fn empty_maybe_of_owned_type() {
    let maybe = Maybe::<String>::empty();
    assert!(maybe.is_empty());
    assert_eq!(maybe.clone().into_it(), Err(MaybeError::Empty));
    assert_eq!(maybe.clone().it_or_default(), "");
    assert!(maybe.as_list().is_empty());
}

#[test]
#[allow(deprecated)]
fn existing_maybe_of_value_type() {
    let maybe = Maybe::is(34.2);
    assert!(maybe.exists());
    assert!(!maybe.is_empty());
    assert_eq!(maybe.it(), Ok(&34.2));
    assert_eq!(maybe.it_or_default(), 34.2);
    assert_eq!(maybe.it_or_throw(|| TimeZoneMissing).unwrap(), 34.2);
    assert_eq!(maybe.it_or_throw_error(TimeZoneMissing).unwrap(), 34.2);
    assert_eq!(maybe.as_nullable(), Some(34.2));
    assert_eq!(maybe.as_list(), &[34.2]);
}

#[test]
fn existing_maybe_of_owned_type() {
    let maybe = Maybe::is("Hello".to_owned());
    assert_eq!(maybe.it().map(String::as_str), Ok("Hello"));
    assert_eq!(maybe.as_list(), &["Hello".to_owned()]);
    assert_eq!(maybe.into_it(), Ok("Hello".to_owned()));
}

#[test]
fn error_factory_runs_only_when_empty() {
    let mut calls = 0;
    let value = Maybe::is(1).it_or_throw(|| {
        calls += 1;
        TimeZoneMissing
    });
    assert_eq!(value.unwrap(), 1);
    assert_eq!(calls, 0);
}

#[test]
fn from_nullable_bridges_both_categories() {
    assert_eq!(Maybe::from_nullable(Some("Hello")).it(), Ok(&"Hello"));
    assert!(Maybe::from_nullable(None::<String>).is_empty());
    assert_eq!(Maybe::from_nullable(None::<String>).it_or_default(), "");

    let empty_int = Maybe::from_nullable(None::<i32>);
    assert_eq!(empty_int, Maybe::empty());
    assert_eq!(empty_int.it_or_default(), 0);
    assert_eq!(Maybe::from_nullable(Some(0)), Maybe::is(0));
}

#[test]
fn from_nullable_json_value() {
    assert_eq!(Maybe::from_nullable(json!(null)), Maybe::empty());
    assert_eq!(Maybe::from_nullable(json!(false)), Maybe::is(json!(false)));
}

#[test]
fn try_is_rejects_null_marker() {
    assert_eq!(Maybe::try_is(None::<u8>), Err(MaybeError::NullValue));
    assert_eq!(Maybe::try_is(json!(null)), Err(MaybeError::NullValue));
    assert_eq!(Maybe::try_is(Some(3u8)), Ok(Maybe::is(3)));
    assert_eq!(Maybe::try_is(json!([])), Ok(Maybe::is(json!([]))));
}

#[test]
fn it_or_provides_fallback() {
    assert_eq!(Maybe::is("Hello").it_or("Foo"), "Hello");
    assert_eq!(Maybe::empty().it_or("Foo"), "Foo");
}

#[test]
fn equality_passes_through_to_values() {
    assert_eq!(Maybe::is(Inner("one".into())), Maybe::is(Inner("one".into())));
    assert_ne!(Maybe::is(Inner("one".into())), Maybe::is(Inner("two".into())));
    assert_eq!(Maybe::<Inner>::empty(), Maybe::<Inner>::empty());
    assert_ne!(Maybe::<Inner>::empty(), Maybe::is(Inner(String::new())));
}

#[test]
fn hash_set_deduplicates_by_value() {
    let set: HashSet<Maybe<Inner>> = [
        Maybe::is(Inner("a".into())),
        Maybe::is(Inner("a".into())),
        Maybe::empty(),
        Maybe::empty(),
        Maybe::is(Inner("b".into())),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn option_conversions() {
    let maybe: Maybe<u8> = Some(5).into();
    assert_eq!(maybe, Maybe::is(5));
    let back: Option<u8> = Maybe::<u8>::empty().into();
    assert_eq!(back, None);
    assert_eq!(Maybe::<u8>::default(), Maybe::empty());
}

#[test]
fn iterates_zero_or_one_time() {
    assert_eq!(Maybe::is(9).into_iter().collect::<Vec<_>>(), vec![9]);
    assert_eq!((&Maybe::<i32>::empty()).into_iter().count(), 0);
    let total: i32 = [Maybe::is(1), Maybe::empty(), Maybe::is(2)].iter().flatten().sum();
    assert_eq!(total, 3);
}

#[test]
fn shared_across_threads() {
    let maybe = std::sync::Arc::new(Maybe::is("shared".to_owned()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let maybe = maybe.clone();
            std::thread::spawn(move || maybe.by_ref().select(|s| s.len()).it_or_default())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}
