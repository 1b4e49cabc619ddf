use super::*;
use crate::foundation::error::FolioError;

#[test]
fn passes_through_success() {
    let mut b = Boundary::new("scene");
    assert_eq!(b.guard(|| Ok(7)), Some(7));
    assert!(!b.is_tripped());
    assert_eq!(b.name(), "scene");
}

#[test]
fn errors_render_nothing_and_trip() {
    let mut b = Boundary::new("scene");
    let out: Option<()> = b.guard(|| Err(FolioError::animation("no gpu context")));
    assert_eq!(out, None);
    assert!(b.is_tripped());
    assert!(b.failure().unwrap().contains("no gpu context"));

    let mut called = false;
    let out = b.guard(|| {
        called = true;
        Ok(1)
    });
    assert_eq!(out, None);
    assert!(!called);
}

#[test]
fn panics_are_contained() {
    let mut b = Boundary::new("scene");
    let out: Option<u8> = b.guard(|| panic!("shader exploded"));
    assert_eq!(out, None);
    assert_eq!(b.failure(), Some("panic: shader exploded"));
}

#[test]
fn reset_allows_retry() {
    let mut b = Boundary::new("scene");
    let _ = b.guard::<()>(|| Err(FolioError::animation("x")));
    b.reset();
    assert_eq!(b.guard(|| Ok("back")), Some("back"));
}
