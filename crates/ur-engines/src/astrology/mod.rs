//! Western astrology readings.
//!
//! The sun sign comes from the birth date, the moon sign from environment
//! data. The planetary highlight and house focus are picked by seed unless
//! the environment names a dominant planet.

pub mod planets;
pub mod zodiac;

pub use planets::{HOUSES, House, PLANETS, Planet, parse_planet};
pub use zodiac::{Element, Modality, SIGNS, ZodiacSign, parse_sign, sun_sign};

use serde::Serialize;
use ur_core::engine::{Divination, DivinationEngine, Reading, ReadingContext};
use ur_core::interpret::{PositionKeys, interpret};
use ur_core::DivinationKind;

const SIGN_KEYS: PositionKeys = PositionKeys(&[("太陽星座", "sun"), ("月星座", "moon")]);

/// Astrology has no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Astrology;

/// Engine alias for astrology.
pub type AstrologyEngine = DivinationEngine<Astrology>;

/// Compact view of a sign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignView {
    /// Japanese name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Glyph.
    pub symbol: &'static str,
    /// Element.
    pub element: Element,
    /// Modality label.
    pub modality: &'static str,
    /// Ruling planet.
    pub ruler: &'static str,
}

impl From<&ZodiacSign> for SignView {
    fn from(s: &ZodiacSign) -> Self {
        Self {
            name: s.name,
            name_en: s.name_en,
            symbol: s.symbol,
            element: s.element,
            modality: s.modality.label(),
            ruler: s.ruler,
        }
    }
}

/// Count of signs per element among the placements.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBalance {
    /// Fire count.
    pub fire: u8,
    /// Earth count.
    pub earth: u8,
    /// Air count.
    pub air: u8,
    /// Water count.
    pub water: u8,
    /// Element with the most placements, ties going to the earlier element.
    pub dominant: Element,
    /// Message for the dominant element.
    pub message: &'static str,
}

impl ElementBalance {
    fn of(signs: &[&ZodiacSign]) -> Self {
        let count = |e: Element| signs.iter().filter(|s| s.element == e).count() as u8;
        let dominant = Element::all()
            .iter()
            .copied()
            .fold(Element::Fire, |best, e| if count(e) > count(best) { e } else { best });
        Self {
            fire: count(Element::Fire),
            earth: count(Element::Earth),
            air: count(Element::Air),
            water: count(Element::Water),
            dominant,
            message: dominant.emphasis(),
        }
    }
}

/// A finished astrology reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyReading {
    /// Sun sign; Aries text stands in when the birth date is unknown.
    pub sun_sign: SignView,
    /// Whether the birth date was given.
    pub birth_date_known: bool,
    /// Sun sign interpretation.
    pub sun_interpretation: String,
    /// Moon sign from environment data.
    pub moon_sign: Option<SignView>,
    /// How the moon colours the day.
    pub moon_influence: String,
    /// Highlighted planet.
    pub planetary_highlight: Planet,
    /// House in focus.
    pub house_focus: House,
    /// Element balance over sun, moon and the house's natural sign.
    pub element_balance: ElementBalance,
    /// Signs sharing the sun sign's element.
    pub compatible_signs: Vec<&'static str>,
    /// Retrograde cautions.
    pub cautions: Vec<&'static str>,
    /// Seed used.
    pub seed: u64,
}

impl Reading for AstrologyReading {
    fn summary(&self) -> String {
        let mut out = format!(
            "太陽星座は{}。{}今日は{}が輝き、第{}ハウス（{}）に焦点が当たります。",
            self.sun_sign.name,
            self.element_balance.message,
            self.planetary_highlight.name,
            self.house_focus.number,
            self.house_focus.theme
        );
        for c in &self.cautions {
            out.push_str(c);
        }
        out
    }

    fn key_symbols(&self) -> Vec<String> {
        let mut out = vec![self.sun_sign.name.to_string()];
        if let Some(m) = &self.moon_sign {
            out.push(m.name.to_string());
        }
        out.push(self.planetary_highlight.name.to_string());
        out
    }
}

impl Divination for Astrology {
    const KIND: DivinationKind = DivinationKind::Astrology;
    type Reading = AstrologyReading;

    fn cast(&self, ctx: &mut ReadingContext<'_>) -> AstrologyReading {
        let known = ctx.input.birth_date.is_some();
        let sun = ctx.input.birth_date.map_or(&SIGNS[0], sun_sign);
        let moon = parse_sign(&ctx.environment.lunar.moon_sign);

        let planet = ctx
            .environment
            .planetary
            .dominant_planet
            .as_deref()
            .and_then(parse_planet)
            .unwrap_or(&PLANETS[(ctx.seed % PLANETS.len() as u64) as usize]);
        let house = &HOUSES[((ctx.seed / 10) % HOUSES.len() as u64) as usize];
        tracing::debug!(
            sun = sun.name_en,
            moon = ?moon.map(|m| m.name_en),
            planet = planet.name_en,
            house = house.number,
            "astrology placements"
        );

        let category = ctx.category();
        let time = ctx.text_time();
        let sun_interpretation = interpret(sun, "太陽星座", &SIGN_KEYS, category, time, ctx.seed);
        let moon_influence = match moon {
            Some(m) => format!(
                "{}{}",
                interpret(m, "月星座", &SIGN_KEYS, category, None, ctx.variant(1)),
                ctx.moon_phase.influence()
            ),
            None => ctx.moon_phase.influence().to_string(),
        };

        let house_sign = &SIGNS[usize::from(house.number) - 1];
        let mut placed = vec![sun, house_sign];
        placed.extend(moon);
        let element_balance = ElementBalance::of(&placed);

        let compatible_signs = SIGNS
            .iter()
            .filter(|s| s.element == sun.element && s.number != sun.number)
            .map(|s| s.name)
            .collect();

        let p = &ctx.environment.planetary;
        let mut cautions = Vec::new();
        if p.mercury_retrograde {
            cautions.push("水星逆行中です。契約や連絡は念入りに確認しましょう。");
        }
        if p.venus_retrograde {
            cautions.push("金星逆行中です。恋愛や大きな買い物は慎重に。");
        }
        if p.mars_retrograde {
            cautions.push("火星逆行中です。衝突を避け、力を内に溜めましょう。");
        }

        AstrologyReading {
            sun_sign: SignView::from(sun),
            birth_date_known: known,
            sun_interpretation,
            moon_sign: moon.map(SignView::from),
            moon_influence,
            planetary_highlight: *planet,
            house_focus: *house,
            element_balance,
            compatible_signs,
            cautions,
            seed: ctx.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ur_core::{DivinationInput, EngineOptions, EnvironmentData, FixedClock};

    fn engine(input: DivinationInput) -> AstrologyEngine {
        DivinationEngine::new(Astrology, input)
            .with_options(EngineOptions::default().with_seed(123))
            .with_clock(FixedClock::from_millis(0))
    }

    #[test]
    fn sun_sign_from_birth_date() {
        let date = NaiveDate::from_ymd_opt(1990, 8, 1).unwrap();
        let r = engine(DivinationInput::new("x").with_birth_date(date)).calculate();
        assert_eq!(r.sun_sign.name_en, "Leo");
        assert!(r.birth_date_known);
        assert_eq!(r.compatible_signs, ["牡羊座", "射手座"]);
    }

    #[test]
    fn missing_birth_date_falls_back_to_aries() {
        let r = engine(DivinationInput::new("")).calculate();
        assert_eq!(r.sun_sign.name_en, "Aries");
        assert!(!r.birth_date_known);
        assert!(r.moon_sign.is_none());
    }

    #[test]
    fn seed_picks_planet_and_house() {
        let r = engine(DivinationInput::new("x")).calculate();
        // 123 % 10 = 3 (Venus), (123 / 10) % 12 = 0 (first house)
        assert_eq!(r.planetary_highlight.name_en, "Venus");
        assert_eq!(r.house_focus.number, 1);
    }

    #[test]
    fn environment_drives_moon_planet_and_cautions() {
        let mut env = EnvironmentData::default();
        env.lunar.moon_sign = "Scorpio".into();
        env.planetary.dominant_planet = Some("Saturn".into());
        env.planetary.mercury_retrograde = true;
        let r = engine(DivinationInput::new("x")).with_environment(env).calculate();
        assert_eq!(r.moon_sign.as_ref().map(|m| m.name_en), Some("Scorpio"));
        assert_eq!(r.planetary_highlight.name_en, "Saturn");
        assert_eq!(r.cautions.len(), 1);
        assert!(r.summary().contains("水星逆行"));
    }

    #[test]
    fn element_balance_counts() {
        let b = ElementBalance::of(&[&SIGNS[0], &SIGNS[4], &SIGNS[3]]);
        assert_eq!((b.fire, b.water, b.earth, b.air), (2, 1, 0, 0));
        assert_eq!(b.dominant, Element::Fire);
    }
}
