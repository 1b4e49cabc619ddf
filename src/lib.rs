//! Folio is the motion and navigation core of a portfolio site.
//!
//! It turns scroll positions into normalized progress, maps progress onto visual styles,
//! smooths them with springs and staggers them across groups of items. On top of that sit
//! client-side routes with exit-then-enter page transitions, a keyboard command palette and
//! a blog index normalized from an external content table.
//!
//! - Build a [`FolioConfig`] (or load one from JSON)
//! - Create a [`Site`] and drive it with [`Site::navigate`], [`Site::handle_key`] and
//!   [`Site::tick`]
//! - Draw whatever [`Site::render`] returns
#![forbid(unsafe_code)]

/// Progress mapping, springs, tweens and staggered reveals.
pub mod animation;
/// Site configuration.
pub mod config;
/// Blog rows, posts and content sources.
pub mod content;
pub mod foundation;
/// Routes, page transitions and smooth scrolling.
pub mod navigation;
/// Command registry and palette state machine.
pub mod palette;
/// Scroll offsets, the scroll hub and progress samplers.
pub mod scroll;
/// Theme, error boundary and the site shell.
pub mod site;

pub use crate::animation::{
    ease::Ease,
    interp::{AnimationRange, map},
    spring::{Spring, SpringConfig},
    stagger::{StaggerOrchestrator, StaggerSlice},
    style::{StyleFrame, StyleMap},
    tween::{Tween, TweenSpec},
};
pub use crate::config::FolioConfig;
pub use crate::content::{
    blog::{BlogIndex, BlogPage},
    post::Post,
    source::{ContentSource, StaticContentSource},
};
#[cfg(feature = "http")]
pub use crate::content::source::HttpContentSource;
pub use crate::foundation::core::{ElementBox, Progress, ScrollSample, Vec2};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::foundation::signal::{Signal, Subscription};
pub use crate::navigation::{
    route::{Route, ScrollDirective},
    transition::{PageTransitionController, TransitionConfig},
};
pub use crate::palette::{
    command::{Command, CommandAction, CommandHost, CommandRegistry},
    state::{CommandPalette, Key, KeyEvent, Modifiers, PaletteOutcome},
};
pub use crate::scroll::{
    hub::ScrollHub,
    offset::ScrollOffset,
    sampler::{ScrollMotion, ScrollSampler},
};
pub use crate::site::{
    shell::{PageView, Site},
    theme::{Theme, ThemeState},
};
