use std::{cell::Cell, rc::Rc};

use crate::{
    animation::{
        spring::SpringConfig,
        style::{StyleFrame, StyleMap, StyleSprings},
    },
    foundation::{
        core::Progress,
        signal::{Signal, Subscription},
    },
    scroll::{
        hub::{ScrollHub, sample},
        offset::ScrollOffset,
    },
};

/// Live scroll progress of one element through its offset window.
///
/// Holds a hub subscription for as long as it lives; dropping the sampler (or calling
/// [`ScrollSampler::detach`]) stops all updates. When the tracked element is unmounted the
/// sampler keeps its last value and stops updating until the element returns.
#[derive(Debug)]
pub struct ScrollSampler {
    element_id: String,
    offset: ScrollOffset,
    progress: Signal<Progress>,
    sampling: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl ScrollSampler {
    pub fn attach(hub: &ScrollHub, element_id: impl Into<String>, offset: ScrollOffset) -> Self {
        let element_id = element_id.into();
        let progress = Signal::new(Progress::ZERO);
        let sampling = Rc::new(Cell::new(false));

        if let Some(s) = hub.sample_for(&element_id) {
            progress.set(offset.progress(&s));
            sampling.set(true);
        }

        let subscription = {
            let registry = hub.registry();
            let id = element_id.clone();
            let progress = progress.clone();
            let sampling = Rc::clone(&sampling);
            hub.subscribe(move |viewport| {
                let Some(el) = registry.borrow().get(&id).copied() else {
                    if sampling.replace(false) {
                        tracing::debug!(element = %id, "scroll target unmounted, sampling paused");
                    }
                    return;
                };
                sampling.set(true);
                let p = offset.progress(&sample(*viewport, el));
                if p != progress.get() {
                    progress.set(p);
                }
            })
        };

        Self {
            element_id,
            offset,
            progress,
            sampling,
            subscription,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn progress(&self) -> Progress {
        self.progress.get()
    }

    /// Whether the tracked element is currently mounted and being sampled.
    pub fn is_sampling(&self) -> bool {
        self.sampling.get() && self.subscription.is_active()
    }

    /// Observe progress changes. The returned guard must be kept alive.
    pub fn on_change<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Progress) + 'static,
    {
        self.progress.subscribe(listener)
    }

    /// Stop sampling and release the hub subscription.
    pub fn detach(self) {
        self.subscription.release();
    }
}

/// Sampler, style mapping and spring smoothing wired together for one element.
#[derive(Debug)]
pub struct ScrollMotion {
    sampler: ScrollSampler,
    map: StyleMap,
    springs: StyleSprings,
    reduced_motion: bool,
}

impl ScrollMotion {
    pub fn new(sampler: ScrollSampler, map: StyleMap, spring: SpringConfig) -> Self {
        let initial = map.sample(sampler.progress());
        Self {
            sampler,
            map,
            springs: StyleSprings::new(spring, initial),
            reduced_motion: false,
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn sampler(&self) -> &ScrollSampler {
        &self.sampler
    }

    /// Re-target from the latest progress and advance the springs by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> StyleFrame {
        let target = self.map.sample(self.sampler.progress());
        if self.reduced_motion {
            self.springs.jump(target);
        } else {
            self.springs.set_target(target);
            self.springs.step(dt);
        }
        self.springs.frame()
    }

    pub fn frame(&self) -> StyleFrame {
        self.springs.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
