//! Behavioural tests for the `Fallible` facade.

use core::cell::Cell;

use sumcell::{Fallible, Optional};

// =============================================================================
// Construction and Queries
// =============================================================================

#[test]
fn test_from_ok() {
    let fallible: Fallible<i32, &str> = Fallible::from_ok(5);

    assert!(fallible.is_ok());
    assert!(!fallible.is_err());
    assert_eq!(fallible.unwrap(), 5);
}

#[test]
fn test_from_err() {
    let fallible: Fallible<i32, &str> = Fallible::from_err("bad");

    assert!(!fallible.is_ok());
    assert!(fallible.is_err());
    assert_eq!(fallible.unwrap_err(), "bad");
}

#[test]
fn test_is_ok_and_is_err_and() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert!(ok.is_ok_and(|x| *x > 3));
    assert!(!ok.is_ok_and(|x| *x > 9));
    assert!(!ok.is_err_and(|_| true));

    assert!(err.is_err_and(|e| e.len() == 3));
    assert!(!err.is_ok_and(|_| true));
}

#[test]
fn test_exists_aliases_mirror_is_and_queries() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert!(ok.exists(|x| *x > 3));
    assert!(!ok.exists_err(|_| true));

    assert!(err.exists_err(|e| e.len() == 3));
    assert!(!err.exists(|_| true));
}

#[test]
fn test_contains_both_sides() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert!(ok.contains(&5));
    assert!(!ok.contains(&6));
    assert!(!ok.contains_err(&"bad"));

    assert!(err.contains_err(&"bad"));
    assert!(!err.contains(&5));
}

#[test]
fn test_debug_rendering() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert_eq!(format!("{ok:?}"), "Ok(5)");
    assert_eq!(format!("{err:?}"), "Err(\"bad\")");
}

// =============================================================================
// Mapping
// =============================================================================

#[test]
fn test_map_err_transforms_error() {
    // Scenario C
    let fallible: Fallible<i32, String> = Fallible::from_err("bad".to_string());
    let upper = fallible.map_err(|e| e.to_uppercase());

    assert_eq!(upper.unwrap_err(), "BAD");
}

#[test]
fn test_map_on_err_never_invokes_function() {
    let calls = Cell::new(0);

    let fallible: Fallible<i32, &str> = Fallible::from_err("bad");
    let mapped = fallible.map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(calls.get(), 0);
    assert!(mapped.is_err());
}

#[test]
fn test_map_err_on_ok_never_invokes_function() {
    let calls = Cell::new(0);

    let fallible: Fallible<i32, &str> = Fallible::from_ok(5);
    let mapped = fallible.map_err(|e| {
        calls.set(calls.get() + 1);
        e
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.unwrap(), 5);
}

#[test]
fn test_map_or_family() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert_eq!(ok.clone().map_or(0, |x| x * 2), 10);
    assert_eq!(err.clone().map_or(0, |x| x * 2), 0);

    assert_eq!(ok.map_or_else(|e| e.len() as i32, |x| x * 2), 10);
    assert_eq!(err.map_or_else(|e| e.len() as i32, |x| x * 2), 3);
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn test_and_then_chains_success() {
    let parse = |x: i32| -> Fallible<i32, &'static str> {
        if x % 2 == 0 {
            Fallible::from_ok(x / 2)
        } else {
            Fallible::from_err("odd")
        }
    };

    assert_eq!(Fallible::<i32, &str>::from_ok(8).and_then(parse).unwrap(), 4);
    assert_eq!(
        Fallible::<i32, &str>::from_ok(3).and_then(parse).unwrap_err(),
        "odd"
    );

    let calls = Cell::new(0);
    let short_circuited = Fallible::<i32, &str>::from_err("bad").and_then(|x| {
        calls.set(calls.get() + 1);
        parse(x)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(short_circuited.unwrap_err(), "bad");
}

#[test]
fn test_and_or() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert_eq!(ok.clone().and(Fallible::<&str, &str>::from_ok("a")).unwrap(), "a");
    assert_eq!(
        err.clone().and(Fallible::<&str, &str>::from_ok("a")).unwrap_err(),
        "bad"
    );

    assert_eq!(ok.or(Fallible::<i32, i32>::from_err(0)).unwrap(), 5);
    assert_eq!(err.or(Fallible::<i32, i32>::from_err(0)).unwrap_err(), 0);
}

#[test]
fn test_or_else_recovers_with_error_in_hand() {
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    let recovered = err.or_else(|e| Fallible::<i32, usize>::from_ok(e.len() as i32));
    assert_eq!(recovered.unwrap(), 3);

    let calls = Cell::new(0);
    let untouched = Fallible::<i32, &str>::from_ok(5).or_else(|_| {
        calls.set(calls.get() + 1);
        Fallible::<i32, usize>::from_err(0)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(untouched.unwrap(), 5);
}

// =============================================================================
// Inspection
// =============================================================================

#[test]
fn test_inspect_sides() {
    let seen = Cell::new(0);
    let errors = Cell::new(0);

    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let ok = ok
        .inspect(|x| seen.set(*x))
        .inspect_err(|_| errors.set(errors.get() + 1));

    assert_eq!(seen.get(), 5);
    assert_eq!(errors.get(), 0);
    assert_eq!(ok.unwrap(), 5);

    let err: Fallible<i32, &str> = Fallible::from_err("bad");
    err.inspect(|_| seen.set(99))
        .inspect_err(|_| errors.set(errors.get() + 1));

    assert_eq!(seen.get(), 5);
    assert_eq!(errors.get(), 1);
}

// =============================================================================
// Projections and Fallbacks
// =============================================================================

#[test]
fn test_ok_err_projections() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert_eq!(ok.clone().ok(), Optional::some(5));
    assert!(ok.err().is_none());

    assert!(err.clone().ok().is_none());
    assert_eq!(err.err(), Optional::some("bad"));
}

#[test]
fn test_unwrap_fallbacks() {
    let ok: Fallible<i32, &str> = Fallible::from_ok(5);
    let err: Fallible<i32, &str> = Fallible::from_err("bad");

    assert_eq!(ok.clone().unwrap_or(7), 5);
    assert_eq!(err.clone().unwrap_or(7), 7);
    assert_eq!(err.clone().unwrap_or_else(|e| e.len() as i32), 3);
    assert_eq!(err.unwrap_or_default(), 0);
    assert_eq!(ok.unwrap_or_default(), 5);
}

#[test]
fn test_unwrap_err_or_default() {
    let ok: Fallible<i32, String> = Fallible::from_ok(5);
    let err: Fallible<i32, String> = Fallible::from_err("bad".to_string());

    assert_eq!(err.unwrap_err_or_default(), "bad");
    assert_eq!(ok.unwrap_err_or_default(), "");
}

#[test]
fn test_non_clone_payloads_move_through_combinators() {
    struct Opaque(i32);

    let unwrapped: i32 = Fallible::<Opaque, &str>::from_ok(Opaque(5))
        .map(|Opaque(x)| Opaque(x * 2))
        .and_then(|Opaque(x)| Fallible::from_ok(x))
        .unwrap();

    assert_eq!(unwrapped, 10);
}
