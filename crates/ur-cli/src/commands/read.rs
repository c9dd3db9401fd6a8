use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use ur_core::{
    Clock, Detail, DivinationInput, DivinationKind, EngineOptions, EnvironmentData, FixedClock,
    Gender, QuestionCategory, SeedPolicy, SystemClock, UranaiError,
};
use ur_engines::registry::{CastOutcome, EngineConfig, cast_with};
use ur_narrator::{
    EnvironmentalContext, Narrator, NarratorConfig, NarratorTone, ThreeLayerInterpretation,
    Verbosity,
};

use super::{Format, to_json};

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Divination system, e.g. tarot, iching, runes (see `uranai list`)
    kind: String,

    /// Full name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    birth_date: Option<String>,

    /// Birth time, HH:MM
    #[arg(long)]
    birth_time: Option<String>,

    /// Birth place
    #[arg(long)]
    birth_place: Option<String>,

    /// Gender: male, female, other
    #[arg(long)]
    gender: Option<String>,

    /// The question
    #[arg(short, long)]
    question: Option<String>,

    /// Question category: love, career, money, health, spiritual, relationship
    #[arg(short, long)]
    category: Option<String>,

    /// Tarot spread
    #[arg(long)]
    spread: Option<String>,

    /// Tarot cards to lay instead of shuffling, comma separated
    #[arg(long, value_delimiter = ',')]
    cards: Vec<usize>,

    /// I Ching casting method: yarrow, coins, plum-blossom, time
    #[arg(long)]
    method: Option<String>,

    /// Rune row: elder, younger, anglo-saxon
    #[arg(long)]
    runes: Option<String>,

    /// Rune layout: single, three-norns, five-rune
    #[arg(long)]
    rune_cast: Option<String>,

    /// Use this seed instead of deriving one
    #[arg(long)]
    seed: Option<u64>,

    /// Mix the current time into the seed
    #[arg(long)]
    session: bool,

    /// Detail level: brief, standard, detailed
    #[arg(long)]
    detail: Option<String>,

    /// Environment data as a JSON file
    #[arg(long, conflicts_with = "synth_env")]
    env: Option<PathBuf>,

    /// Approximate the environment locally (moon phase and season)
    #[arg(long)]
    synth_env: bool,

    /// Engine options as a TOML file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretend the reading happens at this RFC 3339 instant
    #[arg(long)]
    at: Option<String>,

    /// Add classical, modern and practical interpretation layers
    #[arg(long)]
    three_layer: bool,

    /// Tone of the practical layer: gentle, direct, poetic
    #[arg(long)]
    tone: Option<String>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    format: String,
}

pub fn run(args: &ReadArgs) -> Result<(), String> {
    let format = Format::parse(&args.format)?;
    let kind = DivinationKind::resolve(&args.kind).map_err(|e| e.to_string())?;
    let clock = clock(args.at.as_deref())?;
    let options = options(args)?;
    let config = engine_config(args)?;
    let environment = environment(args, clock.as_ref())?;
    let input = input(args);

    tracing::debug!(%kind, ?options, "casting");
    let outcome = cast_with(
        kind,
        &config,
        input,
        environment.clone(),
        options.clone(),
        Arc::clone(&clock),
    );

    let layers = if args.three_layer {
        let tone = match &args.tone {
            Some(t) => NarratorTone::parse(t)
                .ok_or_else(|| format!("unknown tone: \"{t}\". Use: gentle, direct, poetic"))?,
            None => NarratorTone::default(),
        };
        let verbosity = match options.detail {
            Detail::Brief => Verbosity::Terse,
            Detail::Standard => Verbosity::Normal,
            Detail::Detailed => Verbosity::Verbose,
        };
        let narrator = Narrator::new(
            NarratorConfig::new()
                .with_tone(tone)
                .with_verbosity(verbosity)
                .with_addressee(args.name.clone()),
        );
        let context = EnvironmentalContext::from_optional(environment.as_ref());
        Some(narrator.interpret(
            kind,
            &outcome,
            &context,
            &outcome.configuration_label,
            clock.as_ref(),
        ))
    } else {
        None
    };

    match format {
        Format::Json => {
            let json = match &layers {
                Some(layers) => to_json(&serde_json::json!({
                    "reading": outcome,
                    "interpretation": layers,
                }))?,
                None => to_json(&outcome)?,
            };
            println!("{json}");
        }
        Format::Text => print_text(&outcome, layers.as_ref()),
    }
    Ok(())
}

fn clock(at: Option<&str>) -> Result<Arc<dyn Clock>, String> {
    match at {
        Some(s) => {
            let instant = DateTime::parse_from_rfc3339(s)
                .map_err(|e| format!("invalid --at \"{s}\": {e}"))?
                .with_timezone(&Utc);
            Ok(Arc::new(FixedClock(instant)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

fn options(args: &ReadArgs) -> Result<EngineOptions, String> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => EngineOptions::default(),
    };
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    if args.session {
        options = options.with_seed_policy(SeedPolicy::Session);
    }
    if let Some(detail) = &args.detail {
        options = options.with_detail(parse(detail)?);
    }
    Ok(options)
}

fn load_options(path: &Path) -> Result<EngineOptions, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    toml::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

fn engine_config(args: &ReadArgs) -> Result<EngineConfig, String> {
    let mut config = EngineConfig::default().with_card_indices(args.cards.clone());
    if let Some(spread) = &args.spread {
        config = config.with_spread(parse(spread)?);
    }
    if let Some(method) = &args.method {
        config = config.with_method(parse(method)?);
    }
    if let Some(system) = &args.runes {
        config = config.with_rune_system(parse(system)?);
    }
    if let Some(cast) = &args.rune_cast {
        config = config.with_rune_cast(parse(cast)?);
    }
    Ok(config)
}

fn parse<T: FromStr<Err = UranaiError>>(s: &str) -> Result<T, String> {
    s.parse().map_err(|e: UranaiError| e.to_string())
}

fn environment(args: &ReadArgs, clock: &dyn Clock) -> Result<Option<EnvironmentData>, String> {
    if let Some(path) = &args.env {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        return EnvironmentData::from_json(&text)
            .map(Some)
            .map_err(|e| e.to_string());
    }
    if args.synth_env {
        return Ok(Some(EnvironmentData::synthesize(clock.now())));
    }
    Ok(None)
}

fn input(args: &ReadArgs) -> DivinationInput {
    let mut input = DivinationInput::new(args.name.clone());
    if let Some(date) = &args.birth_date {
        input = input.with_birth_date_str(date);
    }
    if let Some(time) = &args.birth_time {
        input = input.with_birth_time(time.clone());
    }
    if let Some(place) = &args.birth_place {
        input = input.with_birth_place(place.clone());
    }
    if let Some(gender) = &args.gender {
        input = input.with_gender(Gender::parse(gender));
    }
    if let Some(question) = &args.question {
        input = input.with_question(question.clone());
    }
    if let Some(category) = &args.category {
        input = input.with_category(QuestionCategory::parse(category));
    }
    input
}

fn print_text(outcome: &CastOutcome, layers: Option<&ThreeLayerInterpretation>) {
    println!(
        "  {} [{}]",
        outcome.kind.label().bold(),
        outcome.configuration_label.dimmed()
    );
    println!();
    println!("  {}", outcome.summary);
    println!();
    if !outcome.key_symbols.is_empty() {
        println!("  symbols: {}", outcome.key_symbols.join(", "));
    }
    if let Some(seed) = outcome.reading.get("seed") {
        println!("  seed:    {seed}");
    }

    if let Some(layers) = layers {
        for (title, text) in [
            ("古典", &layers.classical),
            ("現代", &layers.modern),
            ("実践", &layers.practical),
        ] {
            println!();
            println!("  {}", title.cyan().bold());
            for line in text.lines() {
                println!("  {line}");
            }
        }
        println!();
        println!(
            "  {}",
            format!(
                "environment confidence {:.1}, interpretation confidence {:.1}",
                layers.meta.environmental_confidence, layers.meta.interpretation_confidence
            )
            .dimmed()
        );
    }
}
