use super::*;

#[test]
fn first_slice_starts_at_zero_and_starts_never_decrease() {
    for n in 2..12 {
        let s = slices(n, DEFAULT_OVERLAP).unwrap();
        assert_eq!(s[0].range_start, 0.0);
        for w in s.windows(2) {
            assert!(w[0].range_start <= w[1].range_start);
            assert!(w[0].range_end <= w[1].range_end);
        }
    }
}

#[test]
fn single_item_spans_full_domain() {
    let s = slices(1, DEFAULT_OVERLAP).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].range_start, 0.0);
    assert_eq!(s[0].range_end, 1.0);
}

#[test]
fn zero_items_is_empty() {
    assert!(slices(0, DEFAULT_OVERLAP).unwrap().is_empty());
    let orch = StaggerOrchestrator::fade_up(0, 0.5, 40.0, SpringConfig::default()).unwrap();
    assert!(orch.is_empty());
}

#[test]
fn consecutive_windows_overlap() {
    let s = slices(4, 0.5).unwrap();
    assert_eq!(s[1].range_start, 0.125);
    assert_eq!(s[1].range_end, 0.625);
    for w in s.windows(2) {
        assert!(w[1].range_start < w[0].range_end);
    }
}

#[test]
fn rejects_out_of_range_overlap() {
    assert!(slices(3, 0.0).is_err());
    assert!(slices(3, 1.5).is_err());
    assert!(slices(3, f64::NAN).is_err());
    assert!(slices(3, 1.0).is_ok());
}

#[test]
fn local_progress_maps_window_onto_unit_interval() {
    let s = StaggerSlice::new(2, 4, 0.5);
    assert_eq!(s.local(Progress::new(0.1)), Progress::ZERO);
    assert!((s.local(Progress::new(0.5)).get() - 0.5).abs() < 1e-9);
    assert_eq!(s.local(Progress::ONE), Progress::ONE);
}

#[test]
fn lower_index_is_never_behind() {
    let orch = StaggerOrchestrator::fade_up(5, 0.5, 40.0, SpringConfig::default()).unwrap();
    for step in 0..=100 {
        let p = Progress::new(step as f64 / 100.0);
        for i in 0..4 {
            let a = orch.target(i, p).unwrap();
            let b = orch.target(i + 1, p).unwrap();
            assert!(a.opacity >= b.opacity);
            assert!(a.translate.y <= b.translate.y);
        }
    }
}

#[test]
fn smoothed_items_settle_on_full_reveal() {
    let mut orch = StaggerOrchestrator::fade_up(3, 0.5, 40.0, SpringConfig::snappy()).unwrap();
    assert_eq!(orch.frame(0).unwrap().opacity, 0.0);

    for _ in 0..600 {
        orch.update(Progress::ONE, 1.0 / 60.0);
    }
    assert!(!orch.update(Progress::ONE, 1.0 / 60.0));
    for frame in orch.frames() {
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.translate.y, 0.0);
    }
}

#[test]
fn reduced_motion_reveals_without_frames() {
    let mut orch = StaggerOrchestrator::fade_up(3, 0.5, 40.0, SpringConfig::default()).unwrap();
    orch.set_reduced_motion(true);
    assert!(!orch.update(Progress::ZERO, 1.0 / 60.0));
    assert!(orch.frames().iter().all(|f| f.opacity == 1.0));
}
