//! Normalization of raw content-table rows into blog posts.

use std::{cmp::Ordering, sync::LazyLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::{Map, Value};

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9_]+").expect("static slug pattern is valid")
});

pub const PUBLISHED: &str = "Published";
pub const UNTITLED: &str = "Untitled";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Date as provided by the source (ISO-8601), empty when missing.
    pub date: String,
    pub author: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover: Option<String>,
}

impl Post {
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// Lowercase, collapse every run of non-word characters into `-`, trim hyphens.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_WORD
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_owned()
}

/// RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS`, or plain `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn text(row: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match row.get(*k)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn tags(row: &Map<String, Value>) -> Vec<String> {
    match row.get("Tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.trim().to_owned()),
                Value::Object(o) => o
                    .get("title")
                    .or_else(|| o.get("name"))
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_owned()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn attachment_url(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Object(o) => o
            .get("thumbnails")
            .and_then(|t| t.get("large"))
            .and_then(|l| l.get("url"))
            .or_else(|| o.get("signedUrl"))
            .or_else(|| o.get("url"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}

fn cover(row: &Map<String, Value>) -> Option<String> {
    ["Cover", "Image"].iter().find_map(|k| match row.get(*k)? {
        Value::Array(items) => items.iter().find_map(attachment_url),
        other => attachment_url(other),
    })
}

pub fn is_published(row: &Value) -> bool {
    row.get("Status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.trim() == PUBLISHED)
}

/// Map one row onto a [`Post`]. Returns `None` for rows that are not JSON objects.
pub fn normalize_row(row: &Value) -> Option<Post> {
    let row = row.as_object()?;
    let title = text(row, &["Title", "Name"]).unwrap_or_else(|| UNTITLED.to_owned());
    let slug = text(row, &["Slug"]).unwrap_or_else(|| slugify(&title));
    let id = text(row, &["id", "Id", "ID"]).unwrap_or_else(|| slug.clone());

    Some(Post {
        id,
        title,
        date: text(row, &["Date"]).unwrap_or_default(),
        author: text(row, &["Author"]).unwrap_or_default(),
        excerpt: text(row, &["Description", "Excerpt"]).unwrap_or_default(),
        tags: tags(row),
        cover: cover(row),
        slug,
    })
}

/// Published rows, newest first. Rows without a parsable date sort last, in source order.
pub fn published_posts(rows: &[Value]) -> Vec<Post> {
    let mut posts: Vec<(Option<NaiveDateTime>, Post)> = rows
        .iter()
        .filter(|r| is_published(r))
        .filter_map(normalize_row)
        .map(|p| (p.parsed_date(), p))
        .collect();

    posts.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    posts.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/post.rs"]
mod tests;
