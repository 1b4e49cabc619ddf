use super::*;

fn sample(raw_offset: f64) -> ScrollSample {
    ScrollSample {
        raw_offset,
        viewport_height: 800.0,
        target_top: 1000.0,
        target_height: 400.0,
    }
}

#[test]
fn enter_exit_window_spans_entry_to_exit() {
    let off = ScrollOffset::ENTER_EXIT;
    // Enters when scroll = 1000 - 800 = 200, leaves when scroll = 1400.
    assert_eq!(off.progress(&sample(0.0)), Progress::ZERO);
    assert_eq!(off.progress(&sample(200.0)), Progress::ZERO);
    assert!((off.progress(&sample(800.0)).get() - 0.5).abs() < 1e-9);
    assert_eq!(off.progress(&sample(1400.0)), Progress::ONE);
    assert_eq!(off.progress(&sample(5000.0)), Progress::ONE);
}

#[test]
fn progress_is_monotonic_in_scroll() {
    let off = ScrollOffset::parse("start end", "end start").unwrap();
    let mut prev = 0.0;
    for s in (0..2000).step_by(10) {
        let p = off.progress(&sample(s as f64)).get();
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn parses_named_fractional_and_percent_edges() {
    let off = ScrollOffset::parse("start 75%", "center 0.5").unwrap();
    assert_eq!(off.start.element, Edge::Start);
    assert_eq!(off.start.viewport, Edge::Fraction(0.75));
    assert_eq!(off.end.element, Edge::Center);
    assert_eq!(off.end.viewport, Edge::Fraction(0.5));
}

#[test]
fn rejects_malformed_offsets() {
    assert!(OffsetPoint::parse("start").is_err());
    assert!(OffsetPoint::parse("start end center").is_err());
    assert!(OffsetPoint::parse("start sideways").is_err());
    assert!(OffsetPoint::parse("start 150%").is_err());
}

#[test]
fn degenerate_window_is_a_step() {
    let off = ScrollOffset {
        start: OffsetPoint::new(Edge::Start, Edge::Start),
        end: OffsetPoint::new(Edge::Start, Edge::Start),
    };
    assert_eq!(off.progress(&sample(999.0)), Progress::ZERO);
    assert_eq!(off.progress(&sample(1000.0)), Progress::ONE);
}
