use super::*;
use crate::palette::command::{CommandAction, SiteLinks};

fn palette() -> CommandPalette {
    let commands = vec![
        Command::new("home", "Go Home", "home", CommandAction::Navigate("/".into())),
        Command::new("blog", "Read the Blog", "book", CommandAction::Navigate("/blog".into())),
        Command::new("theme", "Toggle Theme", "moon", CommandAction::ToggleTheme),
    ];
    CommandPalette::new(CommandRegistry::new(commands).unwrap())
}

fn key(k: Key) -> KeyEvent {
    KeyEvent::plain(k)
}

fn type_str(p: &mut CommandPalette, s: &str) {
    for c in s.chars() {
        p.handle_key(key(Key::Char(c)));
    }
}

fn assert_selection_valid(p: &CommandPalette) {
    let s = p.state();
    if s.filtered.is_empty() {
        assert_eq!(s.selected_index, 0);
    } else {
        assert!(s.selected_index < s.filtered.len());
    }
}

#[test]
fn shortcut_toggles_with_ctrl_or_meta() {
    let mut p = palette();
    assert_eq!(
        p.handle_key(KeyEvent::new(Key::Char('k'), Modifiers::CTRL)),
        PaletteOutcome::Handled
    );
    assert!(p.is_open());
    assert!(p.take_focus_request());
    assert!(!p.take_focus_request());

    p.handle_key(KeyEvent::new(Key::Char('k'), Modifiers::META));
    assert!(!p.is_open());
}

#[test]
fn opening_resets_query_and_selection() {
    let mut p = palette();
    p.open();
    type_str(&mut p, "o");
    p.select_next();
    p.close();
    p.open();
    assert_eq!(p.state().query, "");
    assert_eq!(p.state().selected_index, 0);
    assert_eq!(p.state().filtered.len(), 3);
}

#[test]
fn keys_are_ignored_while_closed() {
    let mut p = palette();
    assert_eq!(p.handle_key(key(Key::ArrowDown)), PaletteOutcome::Ignored);
    assert_eq!(p.handle_key(key(Key::Char('x'))), PaletteOutcome::Ignored);
    assert_eq!(p.dismiss_backdrop(), PaletteOutcome::Ignored);
}

#[test]
fn typing_filters_case_insensitively_and_resets_selection() {
    let mut p = palette();
    p.open();
    p.handle_key(key(Key::ArrowDown));
    assert_eq!(p.state().selected_index, 1);

    type_str(&mut p, "THE");
    let ids: Vec<_> = p.state().filtered.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["blog", "theme"]);
    assert_eq!(p.state().selected_index, 0);

    p.handle_key(key(Key::Backspace));
    assert_eq!(p.state().query, "TH");
    assert_selection_valid(&p);
}

#[test]
fn arrows_wrap_around() {
    let mut p = palette();
    p.open();
    p.handle_key(key(Key::ArrowDown));
    p.handle_key(key(Key::ArrowDown));
    assert_eq!(p.state().selected_index, 2);
    p.handle_key(key(Key::ArrowDown));
    assert_eq!(p.state().selected_index, 0);
    p.handle_key(key(Key::ArrowUp));
    assert_eq!(p.state().selected_index, 2);
}

#[test]
fn arrows_on_empty_list_do_not_panic() {
    let mut p = palette();
    p.open();
    type_str(&mut p, "zzz");
    assert!(p.state().filtered.is_empty());
    p.handle_key(key(Key::ArrowDown));
    p.handle_key(key(Key::ArrowUp));
    assert_eq!(p.state().selected_index, 0);
    assert!(p.selected().is_none());
}

#[test]
fn enter_executes_selection_and_closes() {
    let mut p = palette();
    p.open();
    type_str(&mut p, "blog");
    match p.handle_key(key(Key::Enter)) {
        PaletteOutcome::Execute(c) => assert_eq!(c.id, "blog"),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(!p.is_open());
}

#[test]
fn enter_with_no_match_just_closes() {
    let mut p = palette();
    p.open();
    type_str(&mut p, "nothing");
    assert_eq!(p.handle_key(key(Key::Enter)), PaletteOutcome::Dismissed);
    assert!(!p.is_open());
}

#[test]
fn escape_and_backdrop_dismiss() {
    let mut p = palette();
    p.open();
    assert_eq!(p.handle_key(key(Key::Escape)), PaletteOutcome::Dismissed);
    assert!(!p.is_open());
    p.open();
    assert_eq!(p.dismiss_backdrop(), PaletteOutcome::Dismissed);
    assert!(!p.is_open());
}

#[test]
fn selection_stays_valid_through_random_interaction() {
    let mut p = CommandPalette::new(CommandRegistry::standard(&SiteLinks::default()));
    let script = [
        Key::Char('k'),
        Key::ArrowDown,
        Key::Char('o'),
        Key::ArrowUp,
        Key::ArrowUp,
        Key::Char('x'),
        Key::ArrowDown,
        Key::Backspace,
        Key::Backspace,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::Char('e'),
        Key::Other,
        Key::ArrowUp,
    ];
    p.open();
    for k in script {
        p.handle_key(key(k));
        assert_selection_valid(&p);
    }
}
