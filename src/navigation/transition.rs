//! Exit-then-enter page transitions keyed by route identity.
//!
//! A route change first plays the outgoing view's exit, and only when that finishes mounts
//! the incoming view and plays its enter. A newer route change abandons whatever is in
//! flight and starts again from idle. Animations are cosmetic: zero-length (or reduced
//! motion) transitions complete inside the call that started them, so navigation never
//! waits on a frame.

use crate::{
    animation::{
        ease::Ease,
        tween::{Tween, TweenSpec},
    },
    foundation::error::FolioResult,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransitionPhase {
    Idle,
    ExitRunning,
    EnterRunning,
}

/// Lifecycle of a single view as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RouteTransitionState {
    Initial,
    Entering,
    Entered,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub exit: TweenSpec,
    pub enter: TweenSpec,
    /// Vertical travel (px) of entering and exiting views.
    pub distance: f64,
    pub reduced_motion: bool,
}

impl TransitionConfig {
    pub fn validate(&self) -> FolioResult<()> {
        self.exit.validate()?;
        self.enter.validate()
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            exit: TweenSpec::new(0.25, Ease::OutCubic),
            enter: TweenSpec::new(0.35, Ease::OutCubic),
            distance: 20.0,
            reduced_motion: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransitionEvent {
    ExitStarted { from: String, to: String },
    ExitCompleted { key: String },
    EnterStarted { key: String },
    EnterCompleted { key: String },
    /// A newer navigation superseded the transition towards `key`.
    Abandoned { key: String },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PresenceStyle {
    pub opacity: f64,
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewPresence {
    pub key: String,
    pub state: RouteTransitionState,
    pub style: PresenceStyle,
}

/// What the renderer should draw this frame. In wait mode at most one view is present.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Presence {
    pub outgoing: Option<ViewPresence>,
    pub incoming: Option<ViewPresence>,
}

#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Exiting {
        outgoing: String,
        incoming: String,
        tween: Tween,
    },
    Entering {
        key: String,
        tween: Tween,
    },
}

#[derive(Clone, Debug)]
pub struct PageTransitionController {
    config: TransitionConfig,
    current: String,
    phase: Phase,
    generation: u64,
    events: Vec<TransitionEvent>,
}

impl PageTransitionController {
    /// Mount `initial` and start its enter animation.
    pub fn new(config: TransitionConfig, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut this = Self {
            config,
            current: initial.clone(),
            phase: Phase::Idle,
            generation: 0,
            events: Vec::new(),
        };
        this.begin_enter(initial);
        this.advance(0.0);
        this
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.reduced_motion = reduced;
        if reduced {
            // Whatever is running finishes now.
            self.phase = match std::mem::replace(&mut self.phase, Phase::Idle) {
                Phase::Exiting {
                    outgoing, incoming, ..
                } => Phase::Exiting {
                    outgoing,
                    incoming,
                    tween: Tween::new(0.0, 1.0, TweenSpec::instant()),
                },
                Phase::Entering { key, .. } => Phase::Entering {
                    key,
                    tween: Tween::new(0.0, 1.0, TweenSpec::instant()),
                },
                Phase::Idle => Phase::Idle,
            };
            self.advance(0.0);
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        match self.phase {
            Phase::Idle => TransitionPhase::Idle,
            Phase::Exiting { .. } => TransitionPhase::ExitRunning,
            Phase::Entering { .. } => TransitionPhase::EnterRunning,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Key of the view currently mounted (the outgoing one while exiting).
    pub fn current_key(&self) -> &str {
        &self.current
    }

    /// Key the controller is heading towards.
    pub fn target_key(&self) -> &str {
        match &self.phase {
            Phase::Idle => &self.current,
            Phase::Exiting { incoming, .. } => incoming,
            Phase::Entering { key, .. } => key,
        }
    }

    /// Bumped on every accepted navigation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State of the view for the target route.
    pub fn view_state(&self) -> RouteTransitionState {
        match &self.phase {
            Phase::Idle => RouteTransitionState::Entered,
            Phase::Exiting { .. } => RouteTransitionState::Exiting,
            Phase::Entering { tween, .. } if !tween.has_started() => RouteTransitionState::Initial,
            Phase::Entering { .. } => RouteTransitionState::Entering,
        }
    }

    /// Start a transition towards `key`. Returns `false` when already there or heading there.
    pub fn navigate(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key == self.target_key() {
            return false;
        }
        self.generation += 1;

        let outgoing = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => self.current.clone(),
            Phase::Exiting {
                outgoing, incoming, ..
            } => {
                tracing::debug!(stale = %incoming, next = %key, "abandoning page transition");
                self.events.push(TransitionEvent::Abandoned { key: incoming });
                outgoing
            }
            Phase::Entering { key: stale, .. } => {
                tracing::debug!(stale = %stale, next = %key, "abandoning page transition");
                self.events.push(TransitionEvent::Abandoned { key: stale.clone() });
                stale
            }
        };

        self.current = outgoing.clone();
        self.events.push(TransitionEvent::ExitStarted {
            from: outgoing.clone(),
            to: key.clone(),
        });
        self.phase = Phase::Exiting {
            outgoing,
            incoming: key,
            tween: Tween::new(0.0, 1.0, self.spec(self.config.exit)),
        };
        self.advance(0.0);
        true
    }

    /// Advance the running animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.advance(dt);
    }

    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn presence(&self) -> Presence {
        let d = self.config.distance;
        match &self.phase {
            Phase::Idle => Presence {
                outgoing: None,
                incoming: Some(ViewPresence {
                    key: self.current.clone(),
                    state: RouteTransitionState::Entered,
                    style: PresenceStyle {
                        opacity: 1.0,
                        offset_y: 0.0,
                    },
                }),
            },
            Phase::Exiting {
                outgoing, tween, ..
            } => {
                let e = tween.eased();
                Presence {
                    outgoing: Some(ViewPresence {
                        key: outgoing.clone(),
                        state: RouteTransitionState::Exiting,
                        style: PresenceStyle {
                            opacity: 1.0 - e,
                            offset_y: -d * e,
                        },
                    }),
                    incoming: None,
                }
            }
            Phase::Entering { key, tween } => {
                let e = if tween.has_started() { tween.eased() } else { 0.0 };
                Presence {
                    outgoing: None,
                    incoming: Some(ViewPresence {
                        key: key.clone(),
                        state: self.view_state(),
                        style: PresenceStyle {
                            opacity: e,
                            offset_y: d * (1.0 - e),
                        },
                    }),
                }
            }
        }
    }

    fn spec(&self, spec: TweenSpec) -> TweenSpec {
        if self.config.reduced_motion {
            TweenSpec::instant()
        } else {
            spec
        }
    }

    fn begin_enter(&mut self, key: String) {
        self.current = key.clone();
        self.events.push(TransitionEvent::EnterStarted { key: key.clone() });
        self.phase = Phase::Entering {
            key,
            tween: Tween::new(0.0, 1.0, self.spec(self.config.enter)),
        };
    }

    fn advance(&mut self, dt: f64) {
        let mut dt = dt;
        loop {
            match &mut self.phase {
                Phase::Idle => return,
                Phase::Exiting {
                    outgoing,
                    incoming,
                    tween,
                } => {
                    tween.advance(dt);
                    if !tween.is_finished() {
                        return;
                    }
                    let completed = TransitionEvent::ExitCompleted {
                        key: outgoing.clone(),
                    };
                    let incoming = incoming.clone();
                    self.events.push(completed);
                    self.begin_enter(incoming);
                }
                Phase::Entering { key, tween } => {
                    tween.advance(dt);
                    if !tween.is_finished() {
                        return;
                    }
                    let completed = TransitionEvent::EnterCompleted { key: key.clone() };
                    self.events.push(completed);
                    self.phase = Phase::Idle;
                    return;
                }
            }
            // Leftover frame time is not carried into the next phase.
            dt = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/transition.rs"]
mod tests;
