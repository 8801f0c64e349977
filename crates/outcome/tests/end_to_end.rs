use outcome::{O, R};

#[test]
fn map_then_unwrap() {
    assert_eq!(O::of(1).map(|v| v + 1).unwrap(), 2);
}

#[test]
fn empty_unwrap_or() {
    assert_eq!(O::empty().unwrap_or("foo"), "foo");
}

#[test]
fn err_survives_map() {
    let r = R::<i32, &str>::err("bad").map(|v| v + 1);
    assert!(r.is_err());
    assert_eq!(r.unwrap_err(), "bad");
}

#[test]
fn ok_flatmap_then_unwrap() {
    assert_eq!(R::<i32, &str>::ok(1).flatmap(|v| R::ok(v + 1)).unwrap(), 2);
}

#[cfg(feature = "std")]
#[test]
fn raising_call_becomes_err() {
    use outcome::Raised;

    fn explode() -> i32 {
        panic!("oh no!")
    }

    let r: R<i32, Raised> = R::catch(explode);
    assert!(r.is_err());
    assert_eq!(r.unwrap_err(), "oh no!");
}

#[test]
fn round_trips_between_containers() {
    assert_eq!(R::<_, ()>::ok("x").ok_option().unwrap(), "x");
    assert_eq!(R::<(), _>::err("e").err_option().unwrap(), "e");
    assert_eq!(O::of("x").ok_or("e2").unwrap(), "x");
    assert_eq!(O::<&str>::empty().ok_or("e2").unwrap_err(), "e2");
}

#[test]
fn lookup_pipeline() {
    let users = [("ada", 36), ("linus", 54)];
    let find = |name: &str| O::from_nullable(users.iter().find(|(n, _)| *n == name).map(|(_, age)| *age));

    let age_next_year = find("ada")
        .ok_or("unknown user")
        .map(|age| age + 1)
        .unwrap_or(0);
    assert_eq!(age_next_year, 37);

    let missing = find("grace").ok_or("unknown user").map(|age| age + 1);
    assert_eq!(missing.err_option(), O::of("unknown user"));
}
