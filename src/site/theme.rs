use crate::foundation::signal::{Signal, Subscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Shared dark/light flag. Clones observe and mutate the same cell.
#[derive(Clone, Debug)]
pub struct ThemeState {
    theme: Signal<Theme>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Signal::new(initial),
        }
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.current() == Theme::Dark
    }

    /// The only setter. Listeners fire only when the theme actually changes.
    pub fn set(&self, theme: Theme) {
        if self.current() != theme {
            tracing::debug!(?theme, "theme changed");
            self.theme.set(theme);
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.set(next);
        next
    }

    pub fn subscribe(&self, listener: impl FnMut(&Theme) + 'static) -> Subscription {
        self.theme.subscribe(listener)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/theme.rs"]
mod tests;
