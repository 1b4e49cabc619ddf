use serde_json::json;

use super::*;

#[test]
fn slugify_strips_punctuation_and_edges() {
    assert_eq!(slugify("Hello World!"), "hello-world");
    assert_eq!(slugify("  --Rust & WebGPU: a tour--  "), "rust-webgpu-a-tour");
    assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn title_without_slug_derives_one() {
    let post = normalize_row(&json!({"Status": "Published", "Title": "Hello World!"})).unwrap();
    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.id, "hello-world");
    assert_eq!(post.title, "Hello World!");
}

#[test]
fn missing_title_falls_back_to_untitled() {
    let post = normalize_row(&json!({"Status": "Published"})).unwrap();
    assert_eq!(post.title, UNTITLED);
    assert_eq!(post.slug, "untitled");
    assert!(post.tags.is_empty());
    assert_eq!(post.cover, None);
}

#[test]
fn name_and_excerpt_are_accepted_alternates() {
    let post = normalize_row(&json!({
        "Name": "Alt Title",
        "Excerpt": "short",
        "Slug": "custom-slug",
        "id": 42
    }))
    .unwrap();
    assert_eq!(post.title, "Alt Title");
    assert_eq!(post.excerpt, "short");
    assert_eq!(post.slug, "custom-slug");
    assert_eq!(post.id, "42");
}

#[test]
fn cover_prefers_large_thumbnail() {
    let post = normalize_row(&json!({
        "Title": "x",
        "Cover": [{
            "url": "https://cdn/full.png",
            "thumbnails": {"large": {"url": "https://cdn/large.png"}}
        }]
    }))
    .unwrap();
    assert_eq!(post.cover.as_deref(), Some("https://cdn/large.png"));

    let post = normalize_row(&json!({"Title": "x", "Image": [{"url": "https://cdn/a.png"}]})).unwrap();
    assert_eq!(post.cover.as_deref(), Some("https://cdn/a.png"));

    let post = normalize_row(&json!({"Title": "x", "Cover": "https://cdn/b.png"})).unwrap();
    assert_eq!(post.cover.as_deref(), Some("https://cdn/b.png"));
}

#[test]
fn tags_accept_arrays_and_comma_strings() {
    let post = normalize_row(&json!({"Title": "x", "Tags": ["rust", " wasm ", ""]})).unwrap();
    assert_eq!(post.tags, vec!["rust", "wasm"]);

    let post = normalize_row(&json!({"Title": "x", "Tags": "a, b,,c"})).unwrap();
    assert_eq!(post.tags, vec!["a", "b", "c"]);
}

#[test]
fn non_object_rows_are_skipped() {
    assert_eq!(normalize_row(&json!("nope")), None);
    assert_eq!(normalize_row(&json!([1, 2])), None);
}

#[test]
fn parse_date_accepts_common_shapes() {
    assert!(parse_date("2024-03-01").is_some());
    assert!(parse_date("2024-03-01T10:20:30Z").is_some());
    assert!(parse_date("2024-03-01T10:20:30.500").is_some());
    assert!(parse_date("March 1st").is_none());
    assert!(parse_date("").is_none());
}

#[test]
fn published_posts_filters_and_sorts_newest_first() {
    let rows = vec![
        json!({"Status": "Published", "Title": "Old", "Date": "2023-01-01"}),
        json!({"Status": "Draft", "Title": "Hidden", "Date": "2025-01-01"}),
        json!({"Status": "Published", "Title": "Undated"}),
        json!({"Status": "Published", "Title": "New", "Date": "2024-06-01T08:00:00Z"}),
        json!({"Title": "No status", "Date": "2024-01-01"}),
        json!({"Status": "Published", "Title": "Mid", "Date": "2023-07-15"}),
    ];
    let titles: Vec<_> = published_posts(&rows).into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["New", "Mid", "Old", "Undated"]);
}

#[test]
fn published_posts_of_nothing_is_empty() {
    assert!(published_posts(&[]).is_empty());
}
