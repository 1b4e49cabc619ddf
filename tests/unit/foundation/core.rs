use super::*;

#[test]
fn progress_clamps_into_unit_interval() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(7.0).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN), Progress::ZERO);
    assert_eq!(Progress::new(f64::INFINITY), Progress::ONE);
    assert_eq!(Progress::new(f64::NEG_INFINITY), Progress::ZERO);
}

#[test]
fn element_box_rejects_negative_height() {
    let b = ElementBox::new(100.0, -20.0);
    assert_eq!(b.height, 0.0);
    assert_eq!(b.bottom(), 100.0);
}
