//! Environmental data that colours a reading.
//!
//! The live fetcher (weather, lunar ephemeris, geomagnetic indices) runs
//! outside this workspace and hands engines a plain [`EnvironmentData`].
//! Every field defaults, so partial JSON deserialises and engines can run
//! with no environment at all. [`EnvironmentData::synthesize`] provides a
//! local approximation from the mean synodic month.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Lunar state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LunarData {
    /// Position in the lunation, 0 = new moon, 0.5 = full moon.
    pub phase: f64,
    /// Display name of the phase.
    pub phase_name: String,
    /// Illuminated fraction (0-1).
    pub illumination: f64,
    /// Zodiac sign the moon is in.
    pub moon_sign: String,
    /// Date of the next new moon.
    pub next_new_moon: Option<NaiveDate>,
    /// Date of the next full moon.
    pub next_full_moon: Option<NaiveDate>,
}

impl Default for LunarData {
    fn default() -> Self {
        Self {
            phase: 0.0,
            phase_name: MoonPhase::New.label().to_string(),
            illumination: 0.0,
            moon_sign: String::new(),
            next_new_moon: None,
            next_full_moon: None,
        }
    }
}

/// Kp at or above which the geomagnetic field counts as a storm.
pub const STORM_KP: f64 = 5.0;

/// Solar and geomagnetic activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarData {
    /// Qualitative activity level, e.g. `"low"`, `"moderate"`, `"high"`.
    pub solar_activity: String,
    /// Planetary K-index (0-9).
    pub kp_index: f64,
    /// Solar wind speed in km/s.
    pub solar_wind_speed: f64,
    /// Sunspot number.
    pub sunspot_number: u32,
}

impl SolarData {
    /// Whether the Kp index has reached storm level.
    pub fn is_geomagnetic_storm(&self) -> bool {
        self.kp_index >= STORM_KP
    }
}

impl Default for SolarData {
    fn default() -> Self {
        Self {
            solar_activity: "low".to_string(),
            kp_index: 2.0,
            solar_wind_speed: 400.0,
            sunspot_number: 0,
        }
    }
}

/// Planetary flags used by the astrology-flavoured text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanetaryData {
    /// Mercury is retrograde.
    pub mercury_retrograde: bool,
    /// Venus is retrograde.
    pub venus_retrograde: bool,
    /// Mars is retrograde.
    pub mars_retrograde: bool,
    /// The planet emphasised today, if the fetcher supplies one.
    pub dominant_planet: Option<String>,
}

/// Local weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherData {
    /// Condition keyword, e.g. `"clear"`, `"rain"`.
    pub condition: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
    /// Air pressure (hPa).
    pub pressure: f64,
    /// Wind speed (m/s).
    pub wind_speed: f64,
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            condition: "clear".to_string(),
            temperature: 20.0,
            humidity: 50.0,
            pressure: 1013.0,
            wind_speed: 2.0,
        }
    }
}

/// Seasonal context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalData {
    /// Season keyword (`spring`, `summer`, `autumn`, `winter`).
    pub season: String,
    /// Current solar term (二十四節気) name, if known.
    pub solar_term: String,
    /// Hours of daylight.
    pub day_length_hours: f64,
}

impl Default for SeasonalData {
    fn default() -> Self {
        Self {
            season: "spring".to_string(),
            solar_term: String::new(),
            day_length_hours: 12.0,
        }
    }
}

/// All environmental inputs to a reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentData {
    /// Lunar state.
    pub lunar: LunarData,
    /// Solar and geomagnetic activity.
    pub solar: SolarData,
    /// Planetary flags.
    pub planetary: PlanetaryData,
    /// Local weather.
    pub weather: WeatherData,
    /// Seasonal context.
    pub seasonal: SeasonalData,
}

impl EnvironmentData {
    /// Decode environment data from JSON.
    pub fn from_json(json: &str) -> crate::UranaiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed contribution: `floor(phase × 1000)`, clamped, 0 for NaN.
    pub fn lunar_factor(&self) -> u64 {
        let phase = self.lunar.phase;
        if phase.is_finite() {
            (phase.clamp(0.0, 1.0) * 1000.0).floor() as u64
        } else {
            0
        }
    }

    /// The moon phase bucket.
    pub fn moon_phase(&self) -> MoonPhase {
        MoonPhase::from_phase(self.lunar.phase)
    }

    /// Approximate the environment at `at` without any external data.
    pub fn synthesize(at: DateTime<Utc>) -> Self {
        let phase = lunar_phase_at(at);
        let moon = MoonPhase::from_phase(phase);
        let days_to_new = (1.0 - phase) * SYNODIC_MONTH_DAYS;
        let days_to_full = ((0.5 - phase).rem_euclid(1.0)) * SYNODIC_MONTH_DAYS;
        let season = Season::from_month(at.month());

        Self {
            lunar: LunarData {
                phase,
                phase_name: moon.label().to_string(),
                illumination: (1.0 - (TAU * phase).cos()) / 2.0,
                moon_sign: String::new(),
                next_new_moon: Some(add_days(at, days_to_new)),
                next_full_moon: Some(add_days(at, days_to_full)),
            },
            seasonal: SeasonalData {
                season: season.as_str().to_string(),
                solar_term: String::new(),
                day_length_hours: season.typical_day_length(),
            },
            ..Self::default()
        }
    }
}

fn add_days(at: DateTime<Utc>, days: f64) -> NaiveDate {
    let secs = (days * 86_400.0) as i64;
    (at + Duration::seconds(secs)).date_naive()
}

/// Position in the lunation (0..1) at the given instant.
pub fn lunar_phase_at(at: DateTime<Utc>) -> f64 {
    let reference = Utc
        .with_ymd_and_hms(2000, 1, 6, 18, 14, 0)
        .single()
        .unwrap_or_default();
    let elapsed_days = (at - reference).num_seconds() as f64 / 86_400.0;
    (elapsed_days / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Eight-way moon phase bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    /// 新月
    New,
    /// 三日月
    WaxingCrescent,
    /// 上弦の月
    FirstQuarter,
    /// 十三夜
    WaxingGibbous,
    /// 満月
    Full,
    /// 寝待月
    WaningGibbous,
    /// 下弦の月
    LastQuarter,
    /// 有明月
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket a 0..1 phase; values wrap and NaN counts as new moon.
    pub fn from_phase(phase: f64) -> Self {
        if !phase.is_finite() {
            return Self::New;
        }
        let idx = ((phase.rem_euclid(1.0) * 8.0) + 0.5).floor() as usize % 8;
        Self::all()[idx]
    }

    /// All phases in lunation order.
    pub fn all() -> &'static [Self] {
        &[
            Self::New,
            Self::WaxingCrescent,
            Self::FirstQuarter,
            Self::WaxingGibbous,
            Self::Full,
            Self::WaningGibbous,
            Self::LastQuarter,
            Self::WaningCrescent,
        ]
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "新月",
            Self::WaxingCrescent => "三日月",
            Self::FirstQuarter => "上弦の月",
            Self::WaxingGibbous => "十三夜",
            Self::Full => "満月",
            Self::WaningGibbous => "寝待月",
            Self::LastQuarter => "下弦の月",
            Self::WaningCrescent => "有明月",
        }
    }

    /// One sentence on what the phase favours.
    pub fn influence(self) -> &'static str {
        match self {
            Self::New => "新しい始まりの種をまくのに最適な時期です。",
            Self::WaxingCrescent => "小さな一歩を積み重ね、意図を育てる時です。",
            Self::FirstQuarter => "決断と行動が求められる転換点にいます。",
            Self::WaxingGibbous => "仕上げに向けて細部を整える時期です。",
            Self::Full => "物事が満ち、結果や真実が明らかになる時です。",
            Self::WaningGibbous => "得たものを分かち合い、感謝を表す時期です。",
            Self::LastQuarter => "不要なものを手放し、整理する時です。",
            Self::WaningCrescent => "静かに休み、次の周期に備える時期です。",
        }
    }

    /// Whether the moon is growing.
    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Northern-hemisphere meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March-May.
    Spring,
    /// June-August.
    Summer,
    /// September-November.
    Autumn,
    /// December-February.
    Winter,
}

impl Season {
    /// Season for a month number (1-12).
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Parse a season keyword leniently; unknown defaults to spring.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "summer" | "夏" => Self::Summer,
            "autumn" | "fall" | "秋" => Self::Autumn,
            "winter" | "冬" => Self::Winter,
            _ => Self::Spring,
        }
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spring => "春",
            Self::Summer => "夏",
            Self::Autumn => "秋",
            Self::Winter => "冬",
        }
    }

    fn typical_day_length(self) -> f64 {
        match self {
            Self::Spring | Self::Autumn => 12.0,
            Self::Summer => 14.5,
            Self::Winter => 9.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storm_starts_at_threshold() {
        let mut solar = SolarData::default();
        assert!(!solar.is_geomagnetic_storm());
        solar.kp_index = STORM_KP;
        assert!(solar.is_geomagnetic_storm());
        solar.kp_index = f64::NAN;
        assert!(!solar.is_geomagnetic_storm());
    }

    #[test]
    fn default_environment_is_valid() {
        let env = EnvironmentData::default();
        assert_eq!(env.lunar_factor(), 0);
        assert_eq!(env.moon_phase(), MoonPhase::New);
        assert_eq!(env.weather.condition, "clear");
    }

    #[test]
    fn lunar_factor_floors_and_clamps() {
        let mut env = EnvironmentData::default();
        env.lunar.phase = 0.4567;
        assert_eq!(env.lunar_factor(), 456);
        env.lunar.phase = 3.0;
        assert_eq!(env.lunar_factor(), 1000);
        env.lunar.phase = f64::NAN;
        assert_eq!(env.lunar_factor(), 0);
    }

    #[test]
    fn moon_phase_buckets() {
        assert_eq!(MoonPhase::from_phase(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_phase(0.5), MoonPhase::Full);
        assert_eq!(MoonPhase::from_phase(0.25), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_phase(0.75), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_phase(0.99), MoonPhase::New);
        assert_eq!(MoonPhase::from_phase(f64::NAN), MoonPhase::New);
        assert!(MoonPhase::WaxingCrescent.is_waxing());
        assert!(!MoonPhase::Full.is_waxing());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let env = EnvironmentData::from_json(r#"{"lunar": {"phase": 0.5}}"#).unwrap();
        assert!((env.lunar.phase - 0.5).abs() < f64::EPSILON);
        assert_eq!(env.solar.solar_activity, "low");
        assert_eq!(env.seasonal.season, "spring");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EnvironmentData::from_json("{ not json").is_err());
    }

    #[test]
    fn synthesized_full_moon() {
        // Full moon of 2024-01-25 17:54 UTC.
        let at = Utc.with_ymd_and_hms(2024, 1, 25, 18, 0, 0).unwrap();
        let env = EnvironmentData::synthesize(at);
        assert_eq!(env.moon_phase(), MoonPhase::Full);
        assert!(env.lunar.illumination > 0.95);
        assert_eq!(env.seasonal.season, "winter");
        let next_new = env.lunar.next_new_moon.unwrap();
        assert_eq!(next_new.month(), 2);
    }

    #[test]
    fn synthesized_reference_new_moon() {
        let at = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        let phase = lunar_phase_at(at);
        assert!(phase < 1e-9);
    }

    #[test]
    fn season_from_month() {
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::parse("秋"), Season::Autumn);
        assert_eq!(Season::parse("??"), Season::Spring);
    }
}
