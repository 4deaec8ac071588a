use super::*;
use crate::template::model::Keyframe;

fn template(id: &str) -> Template {
    Template {
        id: id.to_owned(),
        name: id.to_uppercase(),
        initial_camera: None,
        keyframes: vec![Keyframe::at(0.0), Keyframe::at(1.0)],
        auto_trigger: None,
        transition_to_studio: None,
        replayable: None,
        footer_hud: None,
    }
}

#[test]
fn builder_collects_and_lists_sorted() {
    let mut b = TemplateRegistry::builder();
    b.register(template("zeta")).unwrap();
    b.register(template("alpha")).unwrap();
    let reg = b.build();
    assert_eq!(reg.len(), 2);
    assert!(!reg.is_empty());
    assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    assert_eq!(reg.get("alpha").unwrap().name, "ALPHA");
    assert!(reg.contains("zeta"));
    assert!(reg.get("nonexistent").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut b = TemplateRegistry::builder();
    b.register(template("a")).unwrap();
    let err = b.register(template("a")).unwrap_err();
    assert!(matches!(err, CardMotionError::Registry(_)));
    assert!(err.to_string().contains("duplicate template id 'a'"));
}

#[test]
fn invalid_templates_are_rejected_before_insert() {
    let mut bad = template("bad");
    bad.keyframes = vec![Keyframe::at(0.7), Keyframe::at(0.2)];
    let mut b = TemplateRegistry::builder();
    let err = b.register(bad).unwrap_err();
    assert!(matches!(err, CardMotionError::Validation(_)));
    assert!(b.build().is_empty());
}

#[test]
fn builtin_catalog_is_valid() {
    let reg = TemplateRegistry::builtin().unwrap();
    for id in [builtin::COSMIC_REVEAL, builtin::STUDIO_SPOTLIGHT, builtin::PREVIEW_PULSE] {
        assert!(reg.contains(id), "{id}");
    }
}

#[test]
fn json_catalog_merges_over_builtins() {
    let json = r#"[{ "id": "extra", "name": "Extra", "keyframes": [{ "progress": 0 }] }]"#;
    let mut b = TemplateRegistry::builder();
    b.register_builtin().unwrap();
    assert_eq!(b.extend_from_reader(json.as_bytes()).unwrap(), 1);
    let reg = b.build();
    assert!(reg.contains("extra"));
    assert!(reg.contains(builtin::COSMIC_REVEAL));
}

#[test]
fn json_catalog_cannot_shadow_builtin() {
    let json = format!(r#"[{{ "id": "{}", "name": "Mine", "keyframes": [] }}]"#, builtin::COSMIC_REVEAL);
    let mut b = TemplateRegistry::builder();
    b.register_builtin().unwrap();
    let err = b.extend_from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CardMotionError::Registry(_)));
}

#[test]
fn failed_catalog_leaves_builder_untouched() {
    let json = r#"[
        { "id": "good", "name": "Good", "keyframes": [{ "progress": 0 }, { "progress": 1 }] },
        { "id": "bad", "name": "Bad", "keyframes": [{ "progress": 0.8 }, { "progress": 0.2 }] }
    ]"#;
    let mut b = TemplateRegistry::builder();
    let err = b.extend_from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CardMotionError::Validation(_)));
    let reg = b.build();
    assert!(!reg.contains("good"));
    assert!(reg.is_empty());
}

#[test]
fn catalog_with_repeated_id_adds_nothing() {
    let json = r#"[
        { "id": "twice", "name": "One", "keyframes": [] },
        { "id": "other", "name": "Other", "keyframes": [] },
        { "id": "twice", "name": "Two", "keyframes": [] }
    ]"#;
    let mut b = TemplateRegistry::builder();
    b.register(template("kept")).unwrap();
    let err = b.extend_from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CardMotionError::Registry(_)));
    assert!(err.to_string().contains("duplicate template id 'twice'"));
    let reg = b.build();
    assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["kept"]);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TemplateRegistry::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, CardMotionError::Serde(_)));
}

#[test]
fn missing_file_wraps_io_error() {
    let err = TemplateRegistry::from_path("definitely/missing/catalog.json").unwrap_err();
    assert!(matches!(err, CardMotionError::Other(_)));
    assert!(err.to_string().contains("open template catalog"));
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TemplateRegistry>();
}
