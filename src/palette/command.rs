use std::collections::BTreeSet;

use crate::foundation::error::{FolioError, FolioResult};

/// What a palette entry does when executed. The payload travels with its variant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum CommandAction {
    /// Route change to an absolute path.
    Navigate(String),
    /// Smooth-scroll to an in-page section id.
    ScrollTo(String),
    /// Open an external URL (or static asset) in a new context.
    OpenLink(String),
    ToggleTheme,
}

impl CommandAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::ScrollTo(_) => "scroll_to",
            Self::OpenLink(_) => "open_link",
            Self::ToggleTheme => "toggle_theme",
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Self::Navigate(p) | Self::ScrollTo(p) | Self::OpenLink(p) => p,
            Self::ToggleTheme => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub id: String,
    pub label: String,
    /// Icon name understood by the renderer.
    pub icon: String,
    #[serde(flatten)]
    pub action: CommandAction,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        action: CommandAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            action,
        }
    }

    /// Case-insensitive substring match over label and id.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&q) || self.id.to_lowercase().contains(&q)
    }
}

/// Receives executed palette commands. Implemented by the site shell.
pub trait CommandHost {
    fn navigate(&mut self, path: &str);
    /// Returns `false` when the section does not exist; callers treat that as a no-op.
    fn scroll_to(&mut self, section: &str) -> bool;
    fn open_link(&mut self, url: &str);
    fn toggle_theme(&mut self);
}

pub fn execute(command: &Command, host: &mut dyn CommandHost) {
    tracing::debug!(id = %command.id, action = command.action.kind(), "executing command");
    match &command.action {
        CommandAction::Navigate(path) => host.navigate(path),
        CommandAction::ScrollTo(section) => {
            host.scroll_to(section);
        }
        CommandAction::OpenLink(url) => host.open_link(url),
        CommandAction::ToggleTheme => host.toggle_theme(),
    }
}

/// Read-only, id-unique command list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new(commands: Vec<Command>) -> FolioResult<Self> {
        let mut seen = BTreeSet::new();
        for c in &commands {
            if c.id.trim().is_empty() {
                return Err(FolioError::validation("command id must be non-empty"));
            }
            if !seen.insert(c.id.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate command id '{}'",
                    c.id
                )));
            }
        }
        Ok(Self { commands })
    }

    /// The site's standard commands.
    pub fn standard(links: &SiteLinks) -> Self {
        use CommandAction::*;
        let mut commands = vec![
            Command::new("home", "Go Home", "home", Navigate("/".into())),
            Command::new("blog", "Read the Blog", "book-open", Navigate("/blog".into())),
            Command::new("about", "About Me", "user", ScrollTo("about".into())),
            Command::new("projects", "View Projects", "folder", ScrollTo("projects".into())),
            Command::new(
                "experience",
                "Work Experience",
                "briefcase",
                ScrollTo("experience".into()),
            ),
            Command::new("contact", "Get in Touch", "mail", ScrollTo("contact".into())),
        ];
        let externals = [
            ("github", "GitHub", "github", &links.github),
            ("linkedin", "LinkedIn", "linkedin", &links.linkedin),
            ("email", "Send an Email", "at-sign", &links.email),
        ];
        for (id, label, icon, url) in externals {
            if let Some(url) = url {
                commands.push(Command::new(id, label, icon, OpenLink(url.clone())));
            }
        }
        commands.push(Command::new(
            "resume",
            "Download Resume",
            "file-text",
            OpenLink(links.resume_path.clone()),
        ));
        commands.push(Command::new("theme", "Toggle Theme", "moon", ToggleTheme));
        Self { commands }
    }

    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Commands matching `query`, in registry order.
    pub fn filter(&self, query: &str) -> Vec<Command> {
        self.commands
            .iter()
            .filter(|c| c.matches(query))
            .cloned()
            .collect()
    }
}

/// External destinations offered by the standard registry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub resume_path: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            github: None,
            linkedin: None,
            email: None,
            resume_path: "/resume.pdf".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/command.rs"]
mod tests;
