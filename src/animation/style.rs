use crate::{
    animation::{
        interp::AnimationRange,
        spring::{Spring, SpringConfig},
    },
    foundation::{
        core::{Progress, Vec2},
        error::{FolioError, FolioResult},
    },
};

/// Visual properties a scroll or transition animation can drive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleFrame {
    pub opacity: f64, // 0..1
    pub translate: Vec2,
    pub rotate_deg: f64,
    pub scale: f64,
    pub blur_px: f64,
}

impl StyleFrame {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        rotate_deg: 0.0,
        scale: 1.0,
        blur_px: 0.0,
    };

    pub fn is_finite(&self) -> bool {
        [
            self.opacity,
            self.translate.x,
            self.translate.y,
            self.rotate_deg,
            self.scale,
            self.blur_px,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Pass the frame through, or fail if any property is NaN or infinite.
    pub fn checked(self) -> FolioResult<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(FolioError::animation(format!(
                "style frame has non-finite properties: {self:?}"
            )))
        }
    }
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Per-property progress mappings. Properties without a range keep their identity value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StyleMap {
    pub opacity: Option<AnimationRange>,
    pub translate_x: Option<AnimationRange>,
    pub translate_y: Option<AnimationRange>,
    pub rotate_deg: Option<AnimationRange>,
    pub scale: Option<AnimationRange>,
    pub blur_px: Option<AnimationRange>,
}

impl StyleMap {
    /// Fade in while rising `distance` px over `[start, end]` of progress.
    pub fn fade_up(start: f64, end: f64, distance: f64) -> FolioResult<Self> {
        Ok(Self {
            opacity: Some(AnimationRange::between(start, end, 0.0, 1.0)?),
            translate_y: Some(AnimationRange::between(start, end, distance, 0.0)?),
            ..Self::default()
        })
    }

    /// Visible only around the middle of the scroll window.
    pub fn fade_in_out() -> FolioResult<Self> {
        Ok(Self {
            opacity: Some(AnimationRange::new(
                vec![0.0, 0.5, 1.0],
                vec![0.0, 1.0, 0.0],
            )?),
            ..Self::default()
        })
    }

    /// Vertical drift of `distance` px across the whole window.
    pub fn parallax(distance: f64) -> FolioResult<Self> {
        Ok(Self {
            translate_y: Some(AnimationRange::between(0.0, 1.0, 0.0, -distance)?),
            ..Self::default()
        })
    }

    /// Grow from 80% with a short blur-in.
    pub fn scale_in() -> FolioResult<Self> {
        Ok(Self {
            opacity: Some(AnimationRange::between(0.0, 0.6, 0.0, 1.0)?),
            scale: Some(AnimationRange::between(0.0, 1.0, 0.8, 1.0)?),
            blur_px: Some(AnimationRange::between(0.0, 0.6, 8.0, 0.0)?),
            ..Self::default()
        })
    }

    pub fn sample(&self, progress: Progress) -> StyleFrame {
        let p = progress.get();
        let pick = |range: &Option<AnimationRange>, identity: f64| {
            range.as_ref().map_or(identity, |r| r.map(p))
        };
        let id = StyleFrame::IDENTITY;
        StyleFrame {
            opacity: pick(&self.opacity, id.opacity).clamp(0.0, 1.0),
            translate: Vec2::new(
                pick(&self.translate_x, id.translate.x),
                pick(&self.translate_y, id.translate.y),
            ),
            rotate_deg: pick(&self.rotate_deg, id.rotate_deg),
            scale: pick(&self.scale, id.scale),
            blur_px: pick(&self.blur_px, id.blur_px).max(0.0),
        }
    }
}

/// One spring per [`StyleFrame`] property, following mapped targets.
#[derive(Clone, Debug)]
pub struct StyleSprings {
    opacity: Spring,
    translate_x: Spring,
    translate_y: Spring,
    rotate_deg: Spring,
    scale: Spring,
    blur_px: Spring,
}

impl StyleSprings {
    pub fn new(config: SpringConfig, initial: StyleFrame) -> Self {
        Self {
            opacity: Spring::new(config, initial.opacity),
            translate_x: Spring::new(config, initial.translate.x),
            translate_y: Spring::new(config, initial.translate.y),
            rotate_deg: Spring::new(config, initial.rotate_deg),
            scale: Spring::new(config, initial.scale),
            blur_px: Spring::new(config, initial.blur_px),
        }
    }

    pub fn set_target(&mut self, target: StyleFrame) {
        self.opacity.set_target(target.opacity);
        self.translate_x.set_target(target.translate.x);
        self.translate_y.set_target(target.translate.y);
        self.rotate_deg.set_target(target.rotate_deg);
        self.scale.set_target(target.scale);
        self.blur_px.set_target(target.blur_px);
    }

    /// Snap every property to `frame` (reduced motion, first paint).
    pub fn jump(&mut self, frame: StyleFrame) {
        self.opacity.jump(frame.opacity);
        self.translate_x.jump(frame.translate.x);
        self.translate_y.jump(frame.translate.y);
        self.rotate_deg.jump(frame.rotate_deg);
        self.scale.jump(frame.scale);
        self.blur_px.jump(frame.blur_px);
    }

    /// Returns `true` while any property is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let mut moving = false;
        for spring in self.springs_mut() {
            moving |= spring.step(dt);
        }
        moving
    }

    pub fn frame(&self) -> StyleFrame {
        StyleFrame {
            opacity: self.opacity.value().clamp(0.0, 1.0),
            translate: Vec2::new(self.translate_x.value(), self.translate_y.value()),
            rotate_deg: self.rotate_deg.value(),
            scale: self.scale.value(),
            blur_px: self.blur_px.value().max(0.0),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 6] {
        [
            &mut self.opacity,
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.rotate_deg,
            &mut self.scale,
            &mut self.blur_px,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
