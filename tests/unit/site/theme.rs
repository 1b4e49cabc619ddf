use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn toggle_flips_and_is_shared_between_clones() {
    let theme = ThemeState::default();
    let other = theme.clone();
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(other.toggle(), Theme::Dark);
    assert!(theme.is_dark());
    assert_eq!(theme.toggle(), Theme::Light);
}

#[test]
fn listeners_see_changes_only() {
    let theme = ThemeState::new(Theme::Dark);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = theme.subscribe(move |t| sink.borrow_mut().push(*t));

    theme.set(Theme::Dark);
    theme.set(Theme::Light);
    theme.toggle();
    assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);

    drop(sub);
    theme.toggle();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn theme_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}
