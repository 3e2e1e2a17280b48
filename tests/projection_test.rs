//! Tests for `Ref`/`RefMut` projections and the `as_ref`/`as_mut` surface.

use sumcell::{Fallible, Optional, Ref, RefMut};

// =============================================================================
// Ref / RefMut Primitives
// =============================================================================

#[test]
fn test_ref_views_named_binding() {
    let value = 42;
    let projected = Ref::new(&value);

    assert_eq!(*projected.get(), 42);
    assert_eq!(*projected, 42);
}

#[test]
fn test_ref_is_copy() {
    let value = String::from("shared");
    let first = Ref::new(&value);
    let second = first;

    assert_eq!(first.get(), second.get());
}

#[test]
fn test_ref_forwards_calls_through_deref() {
    let double = |x: i32| x * 2;
    let projected = Ref::new(&double);

    assert_eq!((projected.get())(21), 42);
}

#[test]
fn test_ref_mut_writes_through() {
    let mut value = 1;

    {
        let mut projected = RefMut::new(&mut value);
        *projected.get_mut() += 1;
        *projected += 10;
    }

    assert_eq!(value, 12);
}

#[test]
fn test_ref_mut_into_mut_keeps_lifetime() {
    let mut value = 5;
    let inner: &mut i32 = RefMut::new(&mut value).into_mut();
    *inner = 6;

    assert_eq!(value, 6);
}

// =============================================================================
// Facade Projections
// =============================================================================

#[test]
fn test_optional_as_ref_borrows_without_consuming() {
    let optional = Optional::some(String::from("payload"));

    let borrowed = optional.as_ref();
    assert!(borrowed.is_some_and(|r| r.get() == "payload"));

    // Source is intact after projecting.
    assert!(optional.is_some());
    assert_eq!(optional.unwrap(), "payload");
}

#[test]
fn test_optional_as_ref_on_none() {
    let optional: Optional<String> = Optional::none();

    assert!(optional.as_ref().is_none());
}

#[test]
fn test_optional_as_mut_edits_in_place() {
    let mut optional = Optional::some(String::from("pay"));

    optional
        .as_mut()
        .map(|mut r| r.get_mut().push_str("load"))
        .unwrap();

    assert_eq!(optional.unwrap(), "payload");
}

#[test]
fn test_fallible_as_ref_keeps_both_sides() {
    let ok: Fallible<i32, String> = Fallible::from_ok(5);
    assert!(ok.as_ref().is_ok_and(|r| *r.get() == 5));
    assert!(ok.is_ok());

    let err: Fallible<i32, String> = Fallible::from_err("bad".to_string());
    assert!(err.as_ref().is_err_and(|r| r.get() == "bad"));
    assert!(err.is_err());
}

#[test]
fn test_fallible_as_mut_edits_in_place() {
    let mut err: Fallible<i32, String> = Fallible::from_err("bad".to_string());

    err.as_mut()
        .inspect_err(|r| assert_eq!(r.get(), "bad"))
        .err()
        .map(|mut r| r.get_mut().push('!'))
        .unwrap();

    assert_eq!(err.unwrap_err(), "bad!");
}
