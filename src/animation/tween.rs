use crate::{
    animation::ease::Ease,
    foundation::error::{FolioError, FolioResult},
};

/// Duration and curve of a time-based animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenSpec {
    pub duration_secs: f64,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            duration_secs,
            ease,
        }
    }

    pub fn instant() -> Self {
        Self::new(0.0, Ease::Linear)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(FolioError::validation(
                "tween duration must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Eased interpolation from `from` to `to` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    spec: TweenSpec,
    elapsed: f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, spec: TweenSpec) -> Self {
        Self {
            from,
            to,
            spec,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.spec.duration_secs.max(0.0));
        }
        self.value()
    }

    /// Linear time fraction in `[0, 1]`. Zero-length tweens are always complete.
    pub fn fraction(&self) -> f64 {
        if self.spec.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.spec.duration_secs).clamp(0.0, 1.0)
    }

    pub fn eased(&self) -> f64 {
        self.spec.ease.apply(self.fraction())
    }

    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.eased()
    }

    pub fn is_finished(&self) -> bool {
        self.fraction() >= 1.0
    }

    pub fn has_started(&self) -> bool {
        self.elapsed > 0.0
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
