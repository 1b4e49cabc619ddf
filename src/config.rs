//! Site configuration, read from JSON.

use std::{path::Path, time::Duration};

use crate::{
    animation::{
        ease::Ease,
        spring::SpringConfig,
        stagger::{DEFAULT_OVERLAP, validate_overlap},
        tween::TweenSpec,
    },
    foundation::error::{FolioError, FolioResult},
    navigation::transition::TransitionConfig,
    palette::command::SiteLinks,
};

pub const ENV_CONTENT_ENDPOINT: &str = "FOLIO_CONTENT_ENDPOINT";
pub const ENV_TABLE_ID: &str = "FOLIO_TABLE_ID";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub motion: MotionConfig,
    pub content: ContentConfig,
    pub site: SiteConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reduced_motion: bool,
    pub stagger_overlap: f64,
    pub spring: SpringConfig,
    pub page_exit: TweenSpec,
    pub page_enter: TweenSpec,
    /// Vertical travel (px) of reveal items.
    pub reveal_distance: f64,
    /// Sweep of the shared progress behind the blog grid's staggered reveal.
    pub grid_reveal: TweenSpec,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            stagger_overlap: DEFAULT_OVERLAP,
            spring: SpringConfig::default(),
            page_exit: TweenSpec::new(0.25, Ease::OutCubic),
            page_enter: TweenSpec::new(0.35, Ease::OutCubic),
            reveal_distance: 40.0,
            grid_reveal: TweenSpec::new(0.8, Ease::Linear),
        }
    }
}

impl MotionConfig {
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig {
            exit: self.page_exit,
            enter: self.page_enter,
            reduced_motion: self.reduced_motion,
            ..TransitionConfig::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base URL of the table proxy. Empty disables remote content.
    pub endpoint: String,
    pub table_id: String,
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            table_id: String::new(),
            timeout_secs: 10,
        }
    }
}

impl ContentConfig {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.table_id.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(flatten)]
    pub links: SiteLinks,
    /// In-page section ids, top to bottom.
    pub sections: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            links: SiteLinks::default(),
            sections: ["about", "projects", "experience", "contact"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

impl FolioConfig {
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Other(anyhow::Error::new(e).context(format!("reading {}", path.display())))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FolioResult<()> {
        let m = &self.motion;
        validate_overlap(m.stagger_overlap)?;
        m.spring.validate()?;
        m.page_exit.validate()?;
        m.page_enter.validate()?;
        m.grid_reveal.validate()?;
        if !m.reveal_distance.is_finite() {
            return Err(FolioError::validation("reveal_distance must be finite"));
        }
        if self.content.timeout_secs == 0 {
            return Err(FolioError::validation("content timeout_secs must be > 0"));
        }
        if let Some(dup) = self
            .site
            .sections
            .iter()
            .enumerate()
            .find(|(i, s)| s.is_empty() || self.site.sections[..*i].contains(s))
            .map(|(_, s)| s)
        {
            return Err(FolioError::validation(format!(
                "section ids must be unique and non-empty, got '{dup}'"
            )));
        }
        Ok(())
    }

    /// Apply `FOLIO_CONTENT_ENDPOINT` / `FOLIO_TABLE_ID` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = set(ENV_CONTENT_ENDPOINT) {
            self.content.endpoint = endpoint;
        }
        if let Some(table_id) = set(ENV_TABLE_ID) {
            self.content.table_id = table_id;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
