//! End-to-end frame production from configuration

use ndrender::config::{AppConfig, ShapeKind};
use ndrender::systems::AnimationSystem;
use ndrender_core::Preset;

#[test]
fn test_default_config_produces_frames() {
    let preset = AppConfig::default().preset().unwrap();
    let mut session = preset.create_session().unwrap();

    for _ in 0..5 {
        let result = AnimationSystem::step(&mut session, 1.0 / 60.0).unwrap();
        assert_eq!(result.triangle_count, 48);
    }
    assert_eq!(session.frames(), 5);
}

#[test]
fn test_every_shape_kind_runs() {
    for kind in [ShapeKind::Hypercube, ShapeKind::Hypertorus, ShapeKind::ComplexGraph] {
        let mut config = AppConfig::default();
        config.shape.kind = kind;
        config.shape.smoothness = 6;
        config.shape.grid_density = 10;

        let mut session = config.preset().unwrap().create_session().unwrap();
        let buffers = session.advance(0.1).unwrap();
        assert!(buffers.positions.iter().all(|c| c.is_finite()), "{:?}", kind);
        assert!(buffers.secondary.iter().all(|c| c.is_finite()), "{:?}", kind);
    }
}

#[test]
fn test_bundled_presets_load() {
    for path in [
        "presets/tesseract.ron",
        "presets/hypertorus_5d.ron",
        "presets/complex_square.ron",
    ] {
        let preset = Preset::load(path).unwrap();
        let mut session = preset.create_session().unwrap();
        assert!(session.advance(0.016).is_ok(), "{}", path);
    }
}

#[test]
fn test_invalid_projection_constant_is_reported() {
    let mut config = AppConfig::default();
    config.projection.constant = 0.5;
    assert!(config.preset().unwrap().create_session().is_err());
}
