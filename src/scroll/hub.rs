use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::foundation::{
    core::{ElementBox, ScrollSample},
    signal::{Signal, Subscription},
};

/// Scroll position and visible height of the page viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Viewport {
    pub offset: f64,
    pub height: f64,
}

pub(crate) type ElementRegistry = Rc<RefCell<BTreeMap<String, ElementBox>>>;

/// The page's scroll source: current viewport plus the layout of every mounted element.
///
/// Scrolling, resizing and layout changes all notify subscribers, which is how samplers
/// learn they must re-sample.
#[derive(Clone, Debug)]
pub struct ScrollHub {
    viewport: Signal<Viewport>,
    elements: ElementRegistry,
}

impl ScrollHub {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport: Signal::new(Viewport {
                offset: 0.0,
                height: viewport_height.max(0.0),
            }),
            elements: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn document_height(&self) -> f64 {
        let content = self
            .elements
            .borrow()
            .values()
            .map(|e| e.bottom())
            .fold(0.0, f64::max);
        content.max(self.viewport.with(|v| v.height))
    }

    pub fn max_offset(&self) -> f64 {
        (self.document_height() - self.viewport.with(|v| v.height)).max(0.0)
    }

    /// Jump to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        let offset = offset.clamp(0.0, self.max_offset());
        self.viewport.update(|v| v.offset = offset);
    }

    pub fn resize(&self, height: f64) {
        if !height.is_finite() {
            return;
        }
        self.viewport.update(|v| v.height = height.max(0.0));
    }

    /// Register or re-measure an element.
    pub fn mount(&self, id: impl Into<String>, layout: ElementBox) {
        self.elements.borrow_mut().insert(id.into(), layout);
        self.viewport.update(|_| {});
    }

    pub fn unmount(&self, id: &str) -> bool {
        let removed = self.elements.borrow_mut().remove(id).is_some();
        if removed {
            self.viewport.update(|_| {});
        }
        removed
    }

    pub fn element(&self, id: &str) -> Option<ElementBox> {
        self.elements.borrow().get(id).copied()
    }

    pub fn sample_for(&self, id: &str) -> Option<ScrollSample> {
        let el = self.element(id)?;
        Some(sample(self.viewport(), el))
    }

    /// Run `listener` after every scroll, resize or layout change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Viewport) + 'static,
    {
        self.viewport.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.viewport.listener_count()
    }

    pub(crate) fn registry(&self) -> ElementRegistry {
        Rc::clone(&self.elements)
    }
}

pub(crate) fn sample(viewport: Viewport, el: ElementBox) -> ScrollSample {
    ScrollSample {
        raw_offset: viewport.offset,
        viewport_height: viewport.height,
        target_top: el.top,
        target_height: el.height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/hub.rs"]
mod tests;
