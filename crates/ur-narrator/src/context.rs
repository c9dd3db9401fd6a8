//! The slice of environment data the interpretation layers care about.

use serde::Serialize;
pub use ur_core::STORM_KP;
use ur_core::{EnvironmentData, MoonPhase, Season};

/// Kp at or above which the field counts as unsettled.
pub const UNSETTLED_KP: f64 = 4.0;

/// Geomagnetic activity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeomagneticLevel {
    /// Kp below 4.
    Quiet,
    /// Kp 4 to 5.
    Unsettled,
    /// Kp 5 and above.
    Storm,
}

impl GeomagneticLevel {
    /// Bucket a Kp index; NaN counts as quiet.
    pub fn from_kp(kp: f64) -> Self {
        if kp >= STORM_KP {
            Self::Storm
        } else if kp >= UNSETTLED_KP {
            Self::Unsettled
        } else {
            Self::Quiet
        }
    }

    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Quiet => "静穏",
            Self::Unsettled => "やや活発",
            Self::Storm => "磁気嵐",
        }
    }
}

/// Environment as seen by the narrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalContext {
    /// Whether any environment data was supplied.
    pub has_environment: bool,
    /// Moon phase bucket.
    pub moon_phase: MoonPhase,
    /// Season.
    pub season: Season,
    /// Weather, as a Japanese word where the condition is known.
    pub weather: String,
    /// Geomagnetic activity.
    pub geomagnetic: GeomagneticLevel,
    /// Zodiac sign of the moon, when supplied.
    pub moon_sign: Option<String>,
    /// Current solar term, when supplied.
    pub solar_term: Option<String>,
    /// Today's dominant planet, when supplied.
    pub dominant_planet: Option<String>,
    /// Whether the next full moon date is known.
    pub has_lunar_calendar: bool,
}

impl Default for EnvironmentalContext {
    fn default() -> Self {
        Self::from_optional(None)
    }
}

impl EnvironmentalContext {
    /// Context from supplied environment data.
    pub fn from_environment(env: &EnvironmentData) -> Self {
        Self {
            has_environment: true,
            moon_phase: env.moon_phase(),
            season: Season::parse(&env.seasonal.season),
            weather: weather_label(&env.weather.condition),
            geomagnetic: GeomagneticLevel::from_kp(env.solar.kp_index),
            moon_sign: non_empty(&env.lunar.moon_sign),
            solar_term: non_empty(&env.seasonal.solar_term),
            dominant_planet: env
                .planetary
                .dominant_planet
                .as_deref()
                .and_then(non_empty),
            has_lunar_calendar: env.lunar.next_full_moon.is_some(),
        }
    }

    /// Context from optional environment data; `None` gives the defaults
    /// with every presence flag off.
    pub fn from_optional(env: Option<&EnvironmentData>) -> Self {
        match env {
            Some(env) => Self::from_environment(env),
            None => {
                let defaults = EnvironmentData::default();
                Self {
                    has_environment: false,
                    moon_sign: None,
                    solar_term: None,
                    dominant_planet: None,
                    has_lunar_calendar: false,
                    ..Self::from_environment(&defaults)
                }
            }
        }
    }

    /// Confidence in the environmental colouring, in tenths: 3 without
    /// data, 6 with data, plus one for each optional detail present.
    pub fn confidence_tenths(&self) -> u8 {
        if !self.has_environment {
            return 3;
        }
        let details = [
            self.moon_sign.is_some(),
            self.solar_term.is_some(),
            self.dominant_planet.is_some(),
            self.has_lunar_calendar,
        ];
        6 + details.iter().filter(|&&present| present).count() as u8
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn weather_label(condition: &str) -> String {
    let label = match condition.trim().to_lowercase().as_str() {
        "clear" | "sunny" => "晴れ",
        "clouds" | "cloudy" => "曇り",
        "rain" | "drizzle" => "雨",
        "snow" => "雪",
        "thunderstorm" => "雷雨",
        "mist" | "fog" | "haze" => "霧",
        "" => "不明",
        other => return other.to_string(),
    };
    label.to_string()
}
