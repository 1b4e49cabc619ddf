use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = FolioConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.motion.stagger_overlap, 0.5);
    assert_eq!(cfg.motion.spring.stiffness, 100.0);
    assert_eq!(cfg.content.timeout_secs, 10);
    assert_eq!(cfg.motion.grid_reveal.duration_secs, 0.8);
    assert_eq!(cfg.site.links.resume_path, "/resume.pdf");
    assert!(!cfg.content.is_configured());
}

#[test]
fn empty_object_uses_defaults() {
    assert_eq!(FolioConfig::from_json("{}").unwrap(), FolioConfig::default());
}

#[test]
fn partial_documents_merge_with_defaults() {
    let cfg = FolioConfig::from_json(
        r#"{
            "motion": {"reduced_motion": true, "spring": {"stiffness": 300}},
            "site": {"github": "https://github.com/me", "sections": ["about"]}
        }"#,
    )
    .unwrap();
    assert!(cfg.motion.reduced_motion);
    assert_eq!(cfg.motion.spring.stiffness, 300.0);
    assert_eq!(cfg.motion.spring.damping, 30.0);
    assert_eq!(cfg.site.links.github.as_deref(), Some("https://github.com/me"));
    assert_eq!(cfg.site.sections, vec!["about"]);
    assert!(cfg.motion.transition().reduced_motion);
}

#[test]
fn out_of_range_values_are_rejected() {
    for json in [
        r#"{"motion": {"stagger_overlap": 0}}"#,
        r#"{"motion": {"stagger_overlap": 1.5}}"#,
        r#"{"motion": {"spring": {"mass": 0}}}"#,
        r#"{"motion": {"page_exit": {"duration_secs": -1, "ease": "linear"}}}"#,
        r#"{"motion": {"grid_reveal": {"duration_secs": -0.5, "ease": "linear"}}}"#,
        r#"{"content": {"timeout_secs": 0}}"#,
        r#"{"site": {"sections": ["a", "a"]}}"#,
    ] {
        let err = FolioConfig::from_json(json).unwrap_err();
        assert!(matches!(err, FolioError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        FolioConfig::from_json("{").unwrap_err(),
        FolioError::Serde(_)
    ));
}

#[test]
fn env_overrides_content_location() {
    let mut cfg = FolioConfig::default();
    cfg.content.table_id = "from-file".into();
    cfg.apply_env_from(|key| match key {
        ENV_CONTENT_ENDPOINT => Some("https://tables.example.com/api".into()),
        ENV_TABLE_ID => Some("  ".into()),
        _ => None,
    });
    assert_eq!(cfg.content.endpoint, "https://tables.example.com/api");
    assert_eq!(cfg.content.table_id, "from-file");
    assert!(cfg.content.is_configured());
}

#[test]
fn missing_file_is_reported() {
    let err = FolioConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
