//! Damped-spring smoothing for mapped animation values.
//!
//! Raw scroll-mapped targets jump whenever the scroll position is re-sampled; a [`Spring`]
//! follows the target as a mass on a damped spring so the rendered value moves smoothly.

use crate::foundation::error::{FolioError, FolioResult};

/// Integration substep upper bound, in seconds.
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
/// Frame deltas above this are treated as this long, so a resumed loop does not leap.
pub const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Overdamped follower used for scroll-linked values.
    pub fn smooth() -> Self {
        Self::default()
    }

    /// Quick, barely underdamped response for hover and palette motion.
    pub fn snappy() -> Self {
        Self::new(300.0, 30.0, 1.0)
    }

    /// Slightly softer spring for section reveals.
    pub fn gentle() -> Self {
        Self::new(200.0, 25.0, 1.0)
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    pub fn validate(&self) -> FolioResult<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(FolioError::validation(format!(
                    "spring {name} must be finite"
                )));
            }
        }
        if self.stiffness <= 0.0 {
            return Err(FolioError::validation("spring stiffness must be > 0"));
        }
        if self.damping <= 0.0 {
            return Err(FolioError::validation("spring damping must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(FolioError::validation("spring mass must be > 0"));
        }
        if self.rest_delta <= 0.0 || self.rest_speed <= 0.0 {
            return Err(FolioError::validation(
                "spring rest thresholds must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringState {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    state: SpringState,
}

impl Spring {
    /// A spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            state: SpringState {
                value: initial,
                velocity: 0.0,
                target: initial,
            },
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn state(&self) -> SpringState {
        self.state
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn target(&self) -> f64 {
        self.state.target
    }

    /// Retarget without touching value or velocity; motion continues from where it is.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.state.target = target;
        }
    }

    /// Teleport to `value` and rest there.
    pub fn jump(&mut self, value: f64) {
        self.state = SpringState {
            value,
            velocity: 0.0,
            target: value,
        };
    }

    pub fn is_settled(&self) -> bool {
        (self.state.target - self.state.value).abs() < self.config.rest_delta
            && self.state.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt` seconds. Returns `true` while the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.snap();
            return false;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return true;
        }

        let dt = dt.min(MAX_FRAME_SECS);
        let n = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0);
        let h = dt / n;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        for _ in 0..n as u32 {
            let s = &mut self.state;
            let accel = ((s.target - s.value) * stiffness - s.velocity * damping) / mass;
            s.velocity += accel * h;
            s.value += s.velocity * h;
        }

        if self.is_settled() {
            self.snap();
            return false;
        }
        true
    }

    fn snap(&mut self) {
        self.state.value = self.state.target;
        self.state.velocity = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
