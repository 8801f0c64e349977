use std::cell::Cell;

use outcome::{O, R};

#[test]
fn ok_option_keeps_success_only() {
    assert_eq!(R::<i32, &str>::ok(3).ok_option().unwrap(), 3);
    assert!(R::<i32, &str>::err("gone").ok_option().is_empty());
}

#[test]
fn err_option_keeps_failure_only() {
    assert_eq!(R::<i32, &str>::err("kept").err_option().unwrap(), "kept");
    assert!(R::<i32, &str>::ok(3).err_option().is_empty());
}

#[test]
fn ok_or_maps_presence_to_discriminant() {
    assert_eq!(O::of(1).ok_or("missing").unwrap(), 1);
    assert_eq!(O::<i32>::empty().ok_or("missing").unwrap_err(), "missing");
}

#[test]
fn ok_or_else_builds_error_lazily() {
    let calls = Cell::new(0);
    let make_err = || {
        calls.set(calls.get() + 1);
        "missing"
    };

    assert_eq!(O::of(1).ok_or_else(make_err), R::ok(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(O::<i32>::empty().ok_or_else(make_err), R::err("missing"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn bridges_to_core_types() {
    assert_eq!(O::of(2).into_option(), Some(2));
    assert_eq!(O::<i32>::empty().into_option(), None);
    assert_eq!(O::from(Some(4)), O::of(4));

    let parsed: R<i32, _> = "17".parse::<i32>().into();
    assert_eq!(parsed.ok_option(), O::of(17));

    let back: Result<i32, &str> = R::err("e").into();
    assert_eq!(back, Err("e"));
    assert_eq!(R::<i32, &str>::ok(1).into_result(), Ok(1));
}

#[test]
fn core_results_compose_through_r() {
    fn read_port(raw: &str) -> R<u16, String> {
        R::from(raw.parse::<u16>()).map_err(|e| e.to_string())
    }

    assert_eq!(read_port("8080").unwrap_or(0), 8080);
    assert!(read_port("99999").is_err());
    assert!(read_port("").err_option().is_present());
}
