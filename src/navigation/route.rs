use crate::foundation::error::{FolioError, FolioResult};

/// Client-side routes of the site.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// `/`, optionally with `#section`.
    Home { section: Option<String> },
    /// `/blog`
    Blog,
    /// `/blog/:slug`
    Post { slug: String },
    NotFound { path: String },
}

/// Where the page should scroll once a route's content is on screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ScrollDirective {
    Top,
    Section(String),
}

impl Route {
    /// Parse an absolute path such as `/blog/my-post` or `/#about`.
    pub fn parse(path: &str) -> FolioResult<Self> {
        let path = path.trim();
        if !path.starts_with('/') {
            return Err(FolioError::navigation(format!(
                "route path must be absolute, got '{path}'"
            )));
        }

        let (path_part, hash) = match path.split_once('#') {
            Some((p, h)) => (p, Some(h)),
            None => (path, None),
        };
        let path_part = path_part.split_once('?').map_or(path_part, |(p, _)| p);
        let segments: Vec<&str> = path_part.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Home {
                section: hash.filter(|h| !h.is_empty()).map(str::to_owned),
            },
            ["blog"] => Self::Blog,
            ["blog", slug] => Self::Post {
                slug: (*slug).to_owned(),
            },
            _ => Self::NotFound {
                path: path_part.to_owned(),
            },
        };
        Ok(route)
    }

    /// Canonical path, including the section hash for `Home`.
    pub fn path(&self) -> String {
        match self {
            Self::Home { section: None } => "/".to_owned(),
            Self::Home {
                section: Some(section),
            } => format!("/#{section}"),
            Self::Blog => "/blog".to_owned(),
            Self::Post { slug } => format!("/blog/{slug}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Identity used to key page transitions. Hash changes on `/` do not change it.
    pub fn key(&self) -> String {
        match self {
            Self::Home { .. } => "/".to_owned(),
            other => other.path(),
        }
    }

    pub fn scroll_directive(&self) -> ScrollDirective {
        match self {
            Self::Home {
                section: Some(section),
            } => ScrollDirective::Section(section.clone()),
            _ => ScrollDirective::Top,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/route.rs"]
mod tests;
