pub mod ease;
pub mod interp;
pub mod spring;
pub mod stagger;
pub mod style;
pub mod tween;
