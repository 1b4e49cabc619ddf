//! The site shell: routing, page transitions, palette, theme and blog in one place.
//!
//! A host drives it with [`Site::navigate`], [`Site::handle_key`] and [`Site::tick`], and
//! draws whatever [`Site::render`] returns. Nothing cosmetic can make those calls fail.

use crate::{
    animation::{
        spring::MAX_FRAME_SECS,
        stagger::StaggerOrchestrator,
        style::{StyleFrame, StyleMap},
        tween::Tween,
    },
    config::FolioConfig,
    content::{
        blog::{BlogIndex, BlogPage},
        source::ContentSource,
    },
    foundation::{
        core::{ElementBox, Progress},
        error::FolioResult,
    },
    navigation::{
        route::{Route, ScrollDirective},
        smooth::SmoothScroll,
        transition::{PageTransitionController, Presence, TransitionEvent, TransitionPhase},
    },
    palette::{
        command::{CommandHost, CommandRegistry, execute},
        state::{CommandPalette, KeyEvent, PaletteOutcome, PaletteState},
    },
    scroll::hub::ScrollHub,
    site::{
        boundary::Boundary,
        theme::{Theme, ThemeState},
    },
};

/// Renders the decorative hero scene from whole-page scroll progress.
pub type SceneRenderer = Box<dyn FnMut(Progress) -> FolioResult<StyleFrame>>;

const HERO_PARALLAX_PX: f64 = 120.0;

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageView {
    /// Route of the view on screen (lags the target while the old page exits).
    pub route: Route,
    pub presence: Presence,
    /// Present on `/blog` and `/blog/:slug`.
    pub blog: Option<BlogPage>,
    /// Reveal styles of the blog grid cards, index-aligned with the post list.
    pub cards: Vec<StyleFrame>,
    /// `None` when the scene is unavailable; the page renders without it.
    pub hero: Option<StyleFrame>,
    pub theme: Theme,
    pub palette: PaletteState,
    pub scroll_offset: f64,
}

pub struct Site {
    config: FolioConfig,
    hub: ScrollHub,
    theme: ThemeState,
    palette: CommandPalette,
    transitions: PageTransitionController,
    scroller: SmoothScroll,
    blog: BlogIndex,
    grid: StaggerOrchestrator,
    /// Running while the blog index is on screen; drives the grid's shared progress.
    grid_reveal: Option<Tween>,
    target: Route,
    displayed: Route,
    pending_scroll: Option<ScrollDirective>,
    opened_links: Vec<String>,
    scene: SceneRenderer,
    scene_boundary: Boundary,
}

impl Site {
    /// Build the shell showing `/` with an already-loaded blog index.
    pub fn new(config: FolioConfig, blog: BlogIndex, viewport_height: f64) -> FolioResult<Self> {
        config.validate()?;
        let motion = config.motion;
        let hero = StyleMap::parallax(HERO_PARALLAX_PX)?;
        let grid = Self::build_grid(&config, blog.len())?;
        let mut scroller = SmoothScroll::default();
        scroller.set_reduced_motion(motion.reduced_motion);
        let home = Route::Home { section: None };

        let mut site = Self {
            palette: CommandPalette::new(CommandRegistry::standard(&config.site.links)),
            transitions: PageTransitionController::new(motion.transition(), home.key()),
            hub: ScrollHub::new(viewport_height),
            theme: ThemeState::default(),
            scroller,
            blog,
            grid,
            grid_reveal: None,
            target: home.clone(),
            displayed: home,
            pending_scroll: None,
            opened_links: Vec::new(),
            scene: Box::new(move |p| hero.sample(p).checked()),
            scene_boundary: Boundary::new("hero-scene"),
            config,
        };
        site.process_transition_events();
        Ok(site)
    }

    /// Build the shell and load posts from `source`. Content failures yield an empty blog.
    pub fn with_source(
        config: FolioConfig,
        source: &dyn ContentSource,
        viewport_height: f64,
    ) -> FolioResult<Self> {
        Self::new(config, BlogIndex::load(source), viewport_height)
    }

    fn build_grid(config: &FolioConfig, items: usize) -> FolioResult<StaggerOrchestrator> {
        let m = &config.motion;
        let mut grid =
            StaggerOrchestrator::fade_up(items, m.stagger_overlap, m.reveal_distance, m.spring)?;
        grid.set_reduced_motion(m.reduced_motion);
        Ok(grid)
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn hub(&self) -> &ScrollHub {
        &self.hub
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn transitions(&self) -> &PageTransitionController {
        &self.transitions
    }

    pub fn blog(&self) -> &BlogIndex {
        &self.blog
    }

    /// Route the site is heading to.
    pub fn route(&self) -> &Route {
        &self.target
    }

    /// Register the layout of an in-page section (or any scroll-tracked element).
    pub fn mount(&self, id: impl Into<String>, layout: ElementBox) {
        self.hub.mount(id, layout);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.motion.reduced_motion = reduced;
        self.transitions.set_reduced_motion(reduced);
        self.scroller.set_reduced_motion(reduced);
        self.grid.set_reduced_motion(reduced);
        self.process_transition_events();
    }

    /// Replace the hero scene and give it a fresh boundary.
    pub fn set_scene(&mut self, scene: impl FnMut(Progress) -> FolioResult<StyleFrame> + 'static) {
        self.scene = Box::new(scene);
        self.scene_boundary.reset();
    }

    pub fn scene_boundary(&self) -> &Boundary {
        &self.scene_boundary
    }

    /// Links opened since the last call, oldest first.
    pub fn take_opened_links(&mut self) -> Vec<String> {
        std::mem::take(&mut self.opened_links)
    }

    /// Go to `path`. A hash change on the current page scrolls without a transition.
    #[tracing::instrument(skip(self))]
    pub fn navigate(&mut self, path: &str) -> FolioResult<()> {
        let route = Route::parse(path)?;
        let directive = route.scroll_directive();

        if route.key() == self.target.key() {
            self.target = route;
            self.scroll_when_mounted(directive);
            return Ok(());
        }

        tracing::debug!(from = %self.target.path(), to = %route.path(), "route change");
        self.scroller.cancel();
        self.pending_scroll = Some(directive);
        let key = route.key();
        self.target = route;
        self.transitions.navigate(key);
        self.process_transition_events();
        Ok(())
    }

    /// Feed a key press to the palette, running any command it confirms.
    pub fn handle_key(&mut self, event: KeyEvent) -> PaletteOutcome {
        let outcome = self.palette.handle_key(event);
        if let PaletteOutcome::Execute(command) = &outcome {
            tracing::debug!(command = %command.id, "executing palette command");
            execute(command, self);
        }
        outcome
    }

    /// Backdrop click while the palette is open.
    pub fn dismiss_palette(&mut self) -> PaletteOutcome {
        self.palette.dismiss_backdrop()
    }

    pub fn set_palette_query(&mut self, query: impl Into<String>) {
        self.palette.set_query(query);
    }

    /// Advance every frame-driven part by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };
        self.transitions.tick(dt);
        self.process_transition_events();
        self.scroller.tick(&self.hub, dt);
        let grid_progress = self
            .grid_reveal
            .as_mut()
            .map_or(Progress::ZERO, |reveal| Progress::new(reveal.advance(dt)));
        self.grid.update(grid_progress, dt);
    }

    pub fn render(&mut self) -> PageView {
        let max = self.hub.max_offset();
        let offset = self.hub.viewport().offset;
        let page_progress = Progress::new(if max > 0.0 { offset / max } else { 0.0 });
        let hero = self
            .scene_boundary
            .guard(|| (self.scene)(page_progress));

        let blog = match &self.displayed {
            Route::Blog => Some(self.blog.index_page()),
            Route::Post { slug } => Some(self.blog.post_page(slug)),
            _ => None,
        };
        let cards = if matches!(self.displayed, Route::Blog) {
            self.grid.frames()
        } else {
            Vec::new()
        };

        PageView {
            route: self.displayed.clone(),
            presence: self.transitions.presence(),
            blog,
            cards,
            hero,
            theme: self.theme.current(),
            palette: self.palette.state().clone(),
            scroll_offset: offset,
        }
    }

    /// Scroll now if the target view is already mounted (idle or entering), otherwise
    /// once its enter starts.
    fn scroll_when_mounted(&mut self, directive: ScrollDirective) -> bool {
        if self.transitions.phase() == TransitionPhase::ExitRunning {
            self.pending_scroll = Some(directive);
            return true;
        }
        self.pending_scroll = None;
        self.displayed = self.target.clone();
        self.scroller.apply(&self.hub, &directive)
    }

    fn process_transition_events(&mut self) {
        for event in self.transitions.drain_events() {
            match event {
                TransitionEvent::EnterStarted { key } if key == self.target.key() => {
                    self.displayed = self.target.clone();
                    self.grid_reveal = matches!(self.displayed, Route::Blog)
                        .then(|| Tween::new(0.0, 1.0, self.config.motion.grid_reveal));
                    if let Some(directive) = self.pending_scroll.take() {
                        self.scroller.apply(&self.hub, &directive);
                    }
                }
                TransitionEvent::ExitStarted { .. } => {
                    self.grid_reveal = None;
                }
                other => tracing::debug!(event = ?other, "page transition"),
            }
        }
    }
}

impl CommandHost for Site {
    fn navigate(&mut self, path: &str) {
        if let Err(err) = Site::navigate(self, path) {
            tracing::warn!(path, error = %err, "ignoring navigation to invalid path");
        }
    }

    /// Smooth-scroll to a section on the home page, leaving other pages first.
    fn scroll_to(&mut self, section: &str) -> bool {
        if matches!(self.target, Route::Home { .. }) {
            if self.hub.element(section).is_none() {
                tracing::warn!(section, "scroll target not found");
                return false;
            }
            self.target = Route::Home {
                section: Some(section.to_owned()),
            };
            return self.scroll_when_mounted(ScrollDirective::Section(section.to_owned()));
        }
        if !self.config.site.sections.iter().any(|s| s == section) {
            tracing::warn!(section, "scroll target not found");
            return false;
        }
        Site::navigate(self, &format!("/#{section}")).is_ok()
    }

    fn open_link(&mut self, url: &str) {
        tracing::debug!(url, "opening link");
        self.opened_links.push(url.to_owned());
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/shell.rs"]
mod tests;
