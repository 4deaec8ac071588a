use super::*;
use crate::template::builtin::{COSMIC_REVEAL, PREVIEW_PULSE, STUDIO_SPOTLIGHT};
use crate::template::loader::PlaybackMode;
use crate::template::registry::TemplateRegistry;

fn opts(duration_secs: f64, ease: Ease) -> PlaybackOpts {
    PlaybackOpts {
        duration_secs,
        ease,
    }
}

#[test]
fn rejects_bad_duration() {
    let reg = TemplateRegistry::builtin().unwrap();
    let t = reg.get(COSMIC_REVEAL).unwrap();
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(Playback::new(t, opts(d, Ease::Linear)).is_err(), "{d}");
    }
}

#[test]
fn progress_is_clamped_and_eased() {
    let reg = TemplateRegistry::builtin().unwrap();
    let t = reg.get(COSMIC_REVEAL).unwrap();
    let linear = Playback::new(t, opts(2.0, Ease::Linear)).unwrap();
    assert_eq!(linear.progress_at(-1.0), 0.0);
    assert_eq!(linear.progress_at(f64::NAN), 0.0);
    assert_eq!(linear.progress_at(1.0), 0.5);
    assert_eq!(linear.progress_at(9.0), 1.0);

    let eased = Playback::new(t, opts(2.0, Ease::InQuad)).unwrap();
    assert_eq!(eased.progress_at(1.0), 0.25);
}

#[test]
fn sample_tracks_the_keyframes() {
    let reg = TemplateRegistry::builtin().unwrap();
    let t = reg.get(COSMIC_REVEAL).unwrap();
    let p = Playback::new(t, opts(4.0, Ease::Linear)).unwrap();
    assert_eq!(p.sample(1.0).card.unwrap().lean, 20.0);
    assert_eq!(p.sample(4.0).card.unwrap().lean, 80.0);
    assert!(!p.is_complete(3.9));
    assert!(p.is_complete(4.0));
}

#[test]
fn frames_cover_both_ends() {
    let reg = TemplateRegistry::builtin().unwrap();
    let t = reg.get(COSMIC_REVEAL).unwrap();
    let p = Playback::new(t, PlaybackOpts::default()).unwrap();

    let frames: Vec<_> = p.frames(5).collect();
    let leans: Vec<f64> = frames.iter().map(|f| f.card.as_ref().unwrap().lean).collect();
    assert_eq!(leans, vec![0.0, 20.0, 45.0, 65.0, 80.0]);

    assert_eq!(p.frames(0).count(), 0);
    let single: Vec<_> = p.frames(1).collect();
    assert_eq!(single[0].progress, 0.0);
}

#[test]
fn behaviour_flags_drive_completion() {
    let reg = TemplateRegistry::builtin().unwrap();

    let reveal = Playback::new(reg.get(COSMIC_REVEAL).unwrap(), PlaybackOpts::default()).unwrap();
    assert_eq!(reveal.completion(), Completion::TransitionToStudio);
    assert!(reveal.can_replay());

    let studio = Playback::new(reg.get(STUDIO_SPOTLIGHT).unwrap(), PlaybackOpts::default()).unwrap();
    assert_eq!(studio.completion(), Completion::Hold);
    let cfg = LoadConfig::new(STUDIO_SPOTLIGHT, PlaybackMode::Studio);
    assert!(!studio.starts_automatically(&cfg));
    assert!(studio.starts_automatically(&cfg.trigger_on_load(true)));

    let preview = Playback::new(reg.get(PREVIEW_PULSE).unwrap(), PlaybackOpts::default()).unwrap();
    assert!(!preview.can_replay());
    let cfg = LoadConfig::new(PREVIEW_PULSE, PlaybackMode::Preview);
    assert!(preview.starts_automatically(&cfg));
    assert!(!preview.starts_automatically(&cfg.trigger_on_load(false)));
}
