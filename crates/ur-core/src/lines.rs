//! Six-line casting primitives shared by the I Ching engine.
//!
//! A line is one of four values. 6 and 9 are "old" (changing) lines; when a
//! reading is transformed, 9 becomes 8 and 6 becomes 7.

use serde::{Deserialize, Serialize};

use crate::rng::Lcg;

/// Value of one cast line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LineValue {
    /// 6: old yin, changing.
    OldYin,
    /// 7: young yang, stable.
    YoungYang,
    /// 8: young yin, stable.
    YoungYin,
    /// 9: old yang, changing.
    OldYang,
}

impl LineValue {
    /// Numeric value (6-9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Line from a numeric value.
    pub fn from_value(v: u8) -> Option<Self> {
        match v {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// Solid (yang) line.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Old lines change into their opposite.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The line after change: 9→8, 6→7, stable lines unchanged.
    pub fn transformed(self) -> Self {
        match self {
            Self::OldYang => Self::YoungYin,
            Self::OldYin => Self::YoungYang,
            other => other,
        }
    }

    /// A stable line of the given polarity.
    pub fn stable(yang: bool) -> Self {
        if yang { Self::YoungYang } else { Self::YoungYin }
    }
}

impl From<LineValue> for u8 {
    fn from(v: LineValue) -> Self {
        v.value()
    }
}

impl TryFrom<u8> for LineValue {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_value(v).ok_or_else(|| format!("line value must be 6-9, got {v}"))
    }
}

/// Yarrow-stalk draw: 6 with p=1/16, 7 with 5/16, 8 with 7/16, 9 with 3/16.
pub fn cast_line(lcg: &mut Lcg) -> LineValue {
    line_from_uniform(lcg.next_f64())
}

/// Map a uniform `[0, 1)` draw onto the yarrow bands in order 6, 7, 8, 9.
pub fn line_from_uniform(x: f64) -> LineValue {
    if x < 1.0 / 16.0 {
        LineValue::OldYin
    } else if x < 6.0 / 16.0 {
        LineValue::YoungYang
    } else if x < 13.0 / 16.0 {
        LineValue::YoungYin
    } else {
        LineValue::OldYang
    }
}

/// Three-coin draw: each coin is 2 or 3 with equal odds; the sum is the line.
pub fn coin_line(lcg: &mut Lcg) -> LineValue {
    let sum: u8 = (0..3).map(|_| if lcg.chance(0.5) { 3 } else { 2 }).sum();
    LineValue::from_value(sum).unwrap_or(LineValue::YoungYin)
}

/// Cast six lines, bottom to top, with the given line caster.
pub fn cast_six(lcg: &mut Lcg, caster: fn(&mut Lcg) -> LineValue) -> [LineValue; 6] {
    let mut lines = [LineValue::YoungYin; 6];
    for line in &mut lines {
        *line = caster(lcg);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transformation_rules() {
        assert_eq!(LineValue::OldYang.transformed(), LineValue::YoungYin);
        assert_eq!(LineValue::OldYin.transformed(), LineValue::YoungYang);
        assert_eq!(LineValue::YoungYang.transformed(), LineValue::YoungYang);
        assert_eq!(LineValue::YoungYin.transformed(), LineValue::YoungYin);
    }

    #[test]
    fn polarity_and_change() {
        assert!(LineValue::OldYang.is_yang());
        assert!(LineValue::OldYang.is_changing());
        assert!(!LineValue::YoungYin.is_yang());
        assert!(!LineValue::YoungYin.is_changing());
    }

    #[test]
    fn band_edges() {
        assert_eq!(line_from_uniform(0.0), LineValue::OldYin);
        assert_eq!(line_from_uniform(0.0624), LineValue::OldYin);
        assert_eq!(line_from_uniform(0.0625), LineValue::YoungYang);
        assert_eq!(line_from_uniform(0.3749), LineValue::YoungYang);
        assert_eq!(line_from_uniform(0.375), LineValue::YoungYin);
        assert_eq!(line_from_uniform(0.8124), LineValue::YoungYin);
        assert_eq!(line_from_uniform(0.8125), LineValue::OldYang);
        assert_eq!(line_from_uniform(0.9999), LineValue::OldYang);
    }

    #[test]
    fn cast_line_is_deterministic() {
        let mut a = Lcg::new(2024);
        let mut b = Lcg::new(2024);
        let la = cast_six(&mut a, cast_line);
        let lb = cast_six(&mut b, cast_line);
        assert_eq!(la, lb);
    }

    #[test]
    fn yarrow_distribution_matches_probabilities() {
        let mut lcg = Lcg::new(987_654);
        let trials = 160_000;
        let mut counts = [0u32; 4];
        for _ in 0..trials {
            let idx = (cast_line(&mut lcg).value() - 6) as usize;
            counts[idx] += 1;
        }
        let expected = [1.0 / 16.0, 5.0 / 16.0, 7.0 / 16.0, 3.0 / 16.0];
        for (count, p) in counts.iter().zip(expected) {
            let observed = f64::from(*count) / f64::from(trials);
            assert!((observed - p).abs() < 0.01, "observed {observed}, expected {p}");
        }
    }

    #[test]
    fn coin_lines_are_valid() {
        let mut lcg = Lcg::new(11);
        for _ in 0..1000 {
            let v = coin_line(&mut lcg).value();
            assert!((6..=9).contains(&v));
        }
    }

    #[test]
    fn serde_as_number() {
        let json = serde_json::to_string(&LineValue::OldYang).unwrap();
        assert_eq!(json, "9");
        let back: LineValue = serde_json::from_str("6").unwrap();
        assert_eq!(back, LineValue::OldYin);
        assert!(serde_json::from_str::<LineValue>("5").is_err());
    }
}
