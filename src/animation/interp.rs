use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Progress, Vec2},
        error::{FolioError, FolioResult},
    },
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Piecewise-linear mapping from a progress domain onto output values.
///
/// `input` holds the control points (strictly increasing), `output` the value at each of
/// them. Values before the first control point hold `output[0]`, values after the last hold
/// `output[last]`. Each segment is shaped by `ease` (linear by default).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationRange<T = f64> {
    input: Vec<f64>,
    output: Vec<T>,
    ease: Ease,
}

impl<T> AnimationRange<T>
where
    T: Lerp + Clone,
{
    pub fn new(input: Vec<f64>, output: Vec<T>) -> FolioResult<Self> {
        if input.len() != output.len() {
            return Err(FolioError::validation(format!(
                "animation range needs parallel arrays (input has {}, output has {})",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(FolioError::validation(
                "animation range needs at least two control points",
            ));
        }
        if input.iter().any(|x| !x.is_finite()) {
            return Err(FolioError::validation(
                "animation range input must be finite",
            ));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(FolioError::validation(
                "animation range input must be strictly increasing",
            ));
        }
        Ok(Self {
            input,
            output,
            ease: Ease::Linear,
        })
    }

    /// Two-point range `[from, to] -> [a, b]`.
    pub fn between(from: f64, to: f64, a: T, b: T) -> FolioResult<Self> {
        Self::new(vec![from, to], vec![a, b])
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn output(&self) -> &[T] {
        &self.output
    }

    pub fn map(&self, progress: f64) -> T {
        let idx = self.input.partition_point(|&x| x <= progress);

        if idx == 0 {
            return self.output[0].clone();
        }
        if idx >= self.input.len() {
            return self.output[self.output.len() - 1].clone();
        }

        let a = self.input[idx - 1];
        let b = self.input[idx];
        let t = (progress - a) / (b - a);
        T::lerp(&self.output[idx - 1], &self.output[idx], self.ease.apply(t))
    }

    pub fn map_progress(&self, progress: Progress) -> T {
        self.map(progress.get())
    }
}

/// One-shot scalar mapping, for callers that do not keep the range around.
pub fn map(progress: f64, input: &[f64], output: &[f64]) -> FolioResult<f64> {
    Ok(AnimationRange::new(input.to_vec(), output.to_vec())?.map(progress))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
