use std::panic::panic_any;

use outcome::error::UNWRAP_NONE;
use outcome::{Raised, O, R};

#[test]
fn normal_return_is_ok() {
    let r = R::catch(|| 40 + 2);
    assert!(r.is_ok());
    assert_eq!(r.unwrap(), 42);
}

#[test]
fn static_str_panic_is_err() {
    let r: R<i32, Raised> = R::catch(|| panic!("oh no!"));
    assert!(r.is_err());
    assert_eq!(r.unwrap_err(), "oh no!");
}

#[test]
fn raised_compares_with_unsized_str() {
    let raised = R::<(), Raised>::catch(|| panic!("broken pipe")).unwrap_err();
    let expected: &str = "broken pipe";
    assert!(<Raised as PartialEq<str>>::eq(&raised, expected));
    assert!(raised == *expected);
    assert!(raised != *"other");
}

#[test]
fn formatted_panic_keeps_message() {
    let code = 7;
    let r: R<(), Raised> = R::catch(|| panic!("failed with code {code}"));
    assert_eq!(r.unwrap_err().message(), Some("failed with code 7"));
}

#[test]
fn catch_with_passes_arguments() {
    let divide = |(a, b): (i32, i32)| {
        if b == 0 {
            panic!("division by zero");
        }
        a / b
    };

    assert_eq!(R::catch_with(divide, (10, 2)).unwrap(), 5);
    assert_eq!(R::catch_with(divide, (1, 0)).unwrap_err(), "division by zero");
}

#[test]
fn non_string_payload_is_kept() {
    let r: R<(), Raised> = R::catch(|| panic_any(404u16));
    let raised = r.unwrap_err();
    assert_eq!(raised.message(), None);
    assert_eq!(raised.downcast_ref::<u16>(), Some(&404));
    assert_eq!(raised.to_string(), "<non-string panic payload>");
}

#[test]
fn extraction_failures_are_caught() {
    let r = R::catch(|| O::<i32>::empty().unwrap());
    assert_eq!(r.unwrap_err(), UNWRAP_NONE);

    let r = R::catch(|| R::<i32, bool>::err(true).unwrap());
    assert_eq!(r.unwrap_err(), "boolean error (true)");
}

#[test]
#[should_panic(expected = "inner failure")]
fn unwrapping_caught_panic_reraises_its_message() {
    R::<i32, Raised>::catch(|| panic!("inner failure")).unwrap();
}

#[test]
fn payload_can_be_resumed() {
    let raised = R::<(), Raised>::catch(|| panic!("again")).unwrap_err();
    let resumed = R::<(), Raised>::catch(move || std::panic::resume_unwind(raised.into_payload()));
    assert_eq!(resumed.unwrap_err(), "again");
}
