use super::*;
use crate::template::builtin::COSMIC_REVEAL;

#[test]
fn unknown_id_is_none() {
    let reg = TemplateRegistry::builtin().unwrap();
    let cfg = LoadConfig::new("nonexistent", PlaybackMode::Preview);
    assert!(load_template(&reg, &cfg).is_none());
}

#[test]
fn known_id_ignores_mode_and_trigger() {
    let reg = TemplateRegistry::builtin().unwrap();
    let loader = TemplateLoader::new(&reg);
    for mode in [PlaybackMode::Cinematic, PlaybackMode::Studio, PlaybackMode::Preview] {
        for cfg in [
            LoadConfig::new(COSMIC_REVEAL, mode),
            LoadConfig::new(COSMIC_REVEAL, mode).trigger_on_load(false),
        ] {
            let t = loader.load(&cfg).unwrap();
            assert_eq!(t.id, COSMIC_REVEAL);
            assert!(std::ptr::eq(t, reg.get(COSMIC_REVEAL).unwrap()));
        }
    }
}

#[test]
fn config_parses_external_shape() {
    let cfg: LoadConfig =
        serde_json::from_str(r#"{ "templateId": "x", "mode": "studio", "triggerOnLoad": true }"#)
            .unwrap();
    assert_eq!(cfg, LoadConfig::new("x", PlaybackMode::Studio).trigger_on_load(true));

    let cfg: LoadConfig = serde_json::from_str(r#"{ "templateId": "x" }"#).unwrap();
    assert_eq!(cfg.mode, PlaybackMode::Cinematic);
    assert_eq!(cfg.trigger_on_load, None);

    assert!(serde_json::from_str::<LoadConfig>(r#"{ "templateId": "x", "mode": "vr" }"#).is_err());
}
