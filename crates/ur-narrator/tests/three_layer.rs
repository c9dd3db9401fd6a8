//! Three-layer text over real engine readings.

use std::sync::Arc;

use ur_core::{Clock, DivinationInput, DivinationKind, EngineOptions, EnvironmentData, FixedClock};
use ur_engines::registry::{EngineConfig, cast_with};
use ur_narrator::{EnvironmentalContext, generate_three_layer_interpretation};

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::from_millis(1_710_000_000_000))
}

#[test]
fn every_kind_gets_three_layers() {
    let env = EnvironmentData::synthesize(clock().now());
    let context = EnvironmentalContext::from_environment(&env);
    for kind in DivinationKind::all() {
        let out = cast_with(
            *kind,
            &EngineConfig::default(),
            DivinationInput::new("山田花子"),
            Some(env.clone()),
            EngineOptions::default(),
            clock(),
        );
        let layers = generate_three_layer_interpretation(
            *kind,
            &out,
            &context,
            &out.configuration_label,
            clock().as_ref(),
        );
        assert!(layers.classical.contains(kind.traditional_source()), "{kind}");
        assert!(layers.modern.contains(context.moon_phase.label()), "{kind}");
        assert!(!layers.practical.is_empty(), "{kind}");
        assert_eq!(layers.meta.interpretation_confidence, 1.0, "{kind}");
        assert_eq!(layers.meta.environmental_confidence, 0.7, "{kind}");
    }
}

#[test]
fn serialises_with_camel_case_meta() {
    let out = cast_with(
        DivinationKind::Tarot,
        &EngineConfig::default(),
        DivinationInput::new("x"),
        None,
        EngineOptions::default(),
        clock(),
    );
    let layers = generate_three_layer_interpretation(
        DivinationKind::Tarot,
        &out,
        &EnvironmentalContext::default(),
        &out.configuration_label,
        clock().as_ref(),
    );
    let json = serde_json::to_value(&layers).unwrap();
    assert_eq!(json["meta"]["divinationKind"], "tarot");
    assert!(json["meta"]["generatedAt"].is_string());
    assert!(json["classical"].is_string());
}
