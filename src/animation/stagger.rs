//! Cascading reveals driven by one shared progress value.
//!
//! Item `i` of `n` animates over `[i / n * overlap, i / n * overlap + overlap]` of the parent
//! progress. Consecutive windows intersect, so the reveal cascades rather than running
//! strictly one after another. Every item reads the same progress, so items can never drift
//! apart in time.

use crate::{
    animation::{
        spring::SpringConfig,
        style::{StyleFrame, StyleMap, StyleSprings},
    },
    foundation::{
        core::Progress,
        error::{FolioError, FolioResult},
    },
};

pub const DEFAULT_OVERLAP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StaggerSlice {
    pub index: usize,
    pub item_count: usize,
    pub range_start: f64,
    pub range_end: f64,
}

impl StaggerSlice {
    /// Window of item `index` among `item_count`. A lone item spans the full `[0, 1]`.
    ///
    /// `overlap` is clamped into `(0, 1]`; use [`slices`] for validated construction.
    pub fn new(index: usize, item_count: usize, overlap: f64) -> Self {
        if item_count <= 1 {
            return Self {
                index,
                item_count,
                range_start: 0.0,
                range_end: 1.0,
            };
        }
        let overlap = overlap.clamp(f64::EPSILON, 1.0);
        let range_start = index as f64 / item_count as f64 * overlap;
        Self {
            index,
            item_count,
            range_start,
            range_end: range_start + overlap,
        }
    }

    /// Parent progress re-expressed inside this window.
    pub fn local(&self, parent: Progress) -> Progress {
        let span = self.range_end - self.range_start;
        Progress::new((parent.get() - self.range_start) / span)
    }
}

pub fn validate_overlap(overlap: f64) -> FolioResult<f64> {
    if !overlap.is_finite() || overlap <= 0.0 || overlap > 1.0 {
        return Err(FolioError::validation(format!(
            "stagger overlap must be in (0, 1], got {overlap}"
        )));
    }
    Ok(overlap)
}

pub fn slices(item_count: usize, overlap: f64) -> FolioResult<Vec<StaggerSlice>> {
    let overlap = validate_overlap(overlap)?;
    Ok((0..item_count)
        .map(|i| StaggerSlice::new(i, item_count, overlap))
        .collect())
}

#[derive(Clone, Debug)]
struct StaggerItem {
    slice: StaggerSlice,
    map: StyleMap,
    springs: StyleSprings,
}

/// Drives a collection's per-item styles from one progress source, smoothing each through
/// its own springs.
#[derive(Clone, Debug)]
pub struct StaggerOrchestrator {
    items: Vec<StaggerItem>,
    reduced_motion: bool,
}

impl StaggerOrchestrator {
    /// Fade-and-rise reveal: each item fades in while moving up `distance` px.
    pub fn fade_up(
        item_count: usize,
        overlap: f64,
        distance: f64,
        spring: SpringConfig,
    ) -> FolioResult<Self> {
        Self::with_style(item_count, overlap, spring, |slice| {
            StyleMap::fade_up(slice.range_start, slice.range_end, distance)
        })
    }

    /// Build each item's mapping from its slice.
    pub fn with_style(
        item_count: usize,
        overlap: f64,
        spring: SpringConfig,
        build: impl Fn(&StaggerSlice) -> FolioResult<StyleMap>,
    ) -> FolioResult<Self> {
        spring.validate()?;
        let items = slices(item_count, overlap)?
            .into_iter()
            .map(|slice| {
                let map = build(&slice)?;
                let springs = StyleSprings::new(spring, map.sample(Progress::ZERO));
                Ok(StaggerItem {
                    slice,
                    map,
                    springs,
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;
        Ok(Self {
            items,
            reduced_motion: false,
        })
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slices(&self) -> impl Iterator<Item = &StaggerSlice> + '_ {
        self.items.iter().map(|i| &i.slice)
    }

    /// Unsmoothed style of item `index` at `progress`.
    pub fn target(&self, index: usize, progress: Progress) -> Option<StyleFrame> {
        self.items.get(index).map(|i| i.map.sample(progress))
    }

    /// Feed the shared progress and advance every item by `dt` seconds.
    /// Returns `true` while any item is still settling.
    pub fn update(&mut self, progress: Progress, dt: f64) -> bool {
        let mut moving = false;
        for item in &mut self.items {
            if self.reduced_motion {
                item.springs.jump(item.map.sample(Progress::ONE));
                continue;
            }
            item.springs.set_target(item.map.sample(progress));
            moving |= item.springs.step(dt);
        }
        moving
    }

    pub fn frame(&self, index: usize) -> Option<StyleFrame> {
        self.items.get(index).map(|i| i.springs.frame())
    }

    pub fn frames(&self) -> Vec<StyleFrame> {
        self.items.iter().map(|i| i.springs.frame()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
