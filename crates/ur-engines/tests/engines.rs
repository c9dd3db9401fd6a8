//! Cross-engine behaviour: every engine runs on degraded input, readings
//! are reproducible, and different people get different readings.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use ur_core::{
    Clock, DivinationInput, DivinationKind, EngineOptions, EnvironmentData, FixedClock,
    QuestionCategory, SeedPolicy,
};
use ur_engines::registry::{EngineConfig, cast, cast_with};
use ur_engines::tarot::{DECK_SIZE, SpreadType, Tarot, available_spreads, deck};
use ur_engines::TarotEngine;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::from_millis(1_710_000_000_000))
}

fn person() -> DivinationInput {
    DivinationInput::new("山田花子")
        .with_birth_date(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        .with_birth_time("14:30")
        .with_question("新しい仕事はうまくいきますか")
        .with_category(QuestionCategory::Career)
}

#[test]
fn every_engine_handles_empty_input() {
    for kind in DivinationKind::all() {
        let json = cast(*kind, DivinationInput::default(), None, EngineOptions::default(), clock());
        assert!(json.is_object(), "{kind}");
        assert!(json.get("seed").is_some(), "{kind} reading has no seed");
    }
}

#[test]
fn every_engine_handles_unparseable_birth_data() {
    let input = DivinationInput::new("x")
        .with_birth_date_str("not a date")
        .with_birth_time("25:99");
    assert!(input.birth_date.is_none());
    for kind in DivinationKind::all() {
        let json = cast(*kind, input.clone(), None, EngineOptions::default(), clock());
        assert!(json.is_object(), "{kind}");
    }
}

#[test]
fn every_engine_accepts_partial_environment() {
    let env = EnvironmentData::from_json(r#"{"lunar": {"phase": 0.5}, "planetary": {"mercuryRetrograde": true}}"#)
        .unwrap();
    for kind in DivinationKind::all() {
        let json = cast(*kind, person(), Some(env.clone()), EngineOptions::default(), clock());
        assert!(json.is_object(), "{kind}");
    }
}

#[test]
fn deterministic_readings_repeat() {
    for kind in DivinationKind::all() {
        let a = cast(*kind, person(), None, EngineOptions::default(), clock());
        let b = cast(*kind, person(), None, EngineOptions::default(), clock());
        assert_eq!(a, b, "{kind}");
    }
}

#[test]
fn deterministic_policy_ignores_the_clock() {
    let later: Arc<dyn Clock> = Arc::new(FixedClock::from_millis(1_800_000_000_000));
    let a = cast(DivinationKind::Runes, person(), None, EngineOptions::default(), clock());
    let b = cast(DivinationKind::Runes, person(), None, EngineOptions::default(), later);
    assert_eq!(a["seed"], b["seed"]);
}

#[test]
fn session_policy_is_reproducible_with_a_fixed_clock() {
    let options = EngineOptions::default().with_seed_policy(SeedPolicy::Session);
    let a = cast(DivinationKind::Tarot, person(), None, options.clone(), clock());
    let b = cast(DivinationKind::Tarot, person(), None, options, clock());
    assert_eq!(a, b);
}

#[test]
fn different_people_get_different_seeds() {
    let other = DivinationInput::new("佐藤太郎")
        .with_birth_date(NaiveDate::from_ymd_opt(1985, 11, 3).unwrap());
    let a = cast(DivinationKind::Tarot, person(), None, EngineOptions::default(), clock());
    let b = cast(DivinationKind::Tarot, other, None, EngineOptions::default(), clock());
    assert_ne!(a["seed"], b["seed"]);
}

#[test]
fn seeds_stay_below_the_modulus() {
    for kind in DivinationKind::all() {
        let json = cast(*kind, person(), None, EngineOptions::default(), clock());
        let seed = json["seed"].as_u64().unwrap();
        assert!(seed < 1_000_000, "{kind} seed {seed}");
    }
}

#[test]
fn deck_has_78_unique_cards() {
    let cards = deck();
    assert_eq!(cards.len(), DECK_SIZE);
    let mut names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 78);
}

#[test]
fn celtic_cross_labels() {
    let out = cast_with(
        DivinationKind::Tarot,
        &EngineConfig::default().with_spread(SpreadType::CelticCross),
        person(),
        None,
        EngineOptions::default(),
        clock(),
    );
    let labels: Vec<&str> = out.reading["positions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["position"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "現在の状況",
            "直面する課題",
            "遠い過去/根本原因",
            "近い過去",
            "可能な未来",
            "近い未来",
            "あなたの立場",
            "外部からの影響",
            "希望と恐れ",
            "最終結果",
        ]
    );
}

#[test]
fn spreads_report_consistent_counts() {
    let spreads = available_spreads();
    assert_eq!(spreads.len(), 5);
    for s in spreads {
        assert_eq!(s.card_count, s.positions.len());
    }
}

proptest! {
    #[test]
    fn tarot_draws_never_repeat(seed in 0u64..1_000_000, spread in 0usize..5) {
        let spread = SpreadType::all()[spread];
        let reading = TarotEngine::new(Tarot::new(spread), DivinationInput::new("x"))
            .with_options(EngineOptions::default().with_seed(seed))
            .with_clock(FixedClock::from_millis(0))
            .calculate();
        let mut ids: Vec<usize> = reading.positions.iter().map(|p| p.card.id).collect();
        prop_assert_eq!(ids.len(), spread.card_count());
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), spread.card_count());
    }

    #[test]
    fn every_seed_produces_a_reading(seed in 0u64..1_000_000) {
        for kind in DivinationKind::all() {
            let json = cast(
                *kind,
                DivinationInput::new("x"),
                None,
                EngineOptions::default().with_seed(seed),
                Arc::new(FixedClock::from_millis(0)),
            );
            prop_assert_eq!(json["seed"].as_u64(), Some(seed));
        }
    }
}
