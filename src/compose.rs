use once_cell::sync::Lazy;
use regex::Regex;

use crate::rng::Prng;
use crate::transform::apply_transforms;
use crate::{ComposedResult, CringeLevel, Mode, OfficialHoroscope, RoastHoroscope, Source};

const MIX_PUNCHLINES: [&str; 5] = [
    "Just saying.",
    "You're welcome.",
    "Deal with it.",
    "That's the tea.",
    "No cap.",
];

const MIX_PUNCHLINES_INTENSE: [&str; 5] = [
    "PERIOD.",
    "FACTS ONLY.",
    "THAT'S IT. THAT'S THE TWEET.",
    "MAIN CHARACTER ENERGY.",
    "ICONIC BEHAVIOR.",
];

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static sentence pattern"));

#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub mode: Mode,
    pub official: OfficialHoroscope,
    pub roast: RoastHoroscope,
    pub cringe: CringeLevel,
    pub seed: u32,
}

/// Merges the official and roast texts according to the mode. Invalid
/// modes are unrepresentable here: parsing fails fast at the boundary.
pub fn compose_result(options: ComposeOptions) -> ComposedResult {
    let ComposeOptions {
        mode,
        official,
        roast,
        cringe,
        seed,
    } = options;

    match mode {
        Mode::Roast => ComposedResult {
            text: roast.text,
            source: Source::Roast,
            lucky_color: None,
            lucky_number: None,
        },
        Mode::Official => {
            let mut rng = Prng::new(seed);
            let text = apply_transforms(&official.text, cringe, &mut rng);
            ComposedResult {
                text,
                source: Source::Official,
                lucky_color: official.lucky_color,
                lucky_number: official.lucky_number,
            }
        }
        Mode::Mix => compose_mixed(official, roast, cringe, seed),
    }
}

fn compose_mixed(
    official: OfficialHoroscope,
    roast: RoastHoroscope,
    cringe: CringeLevel,
    seed: u32,
) -> ComposedResult {
    // Top-level mutations are reserved for pure roast text; the
    // official side never transforms above Sarcastic.
    let official_level = cringe.min(CringeLevel::Sarcastic);
    let mut transform_rng = Prng::new(seed);
    let transformed = apply_transforms(&official.text, official_level, &mut transform_rng);

    let official_sentences = split_sentences(&transformed);
    let roast_sentences = split_sentences(&roast.text);

    // seed+1 decorrelates the mixing choices from the transform draws.
    let mut mix_rng = Prng::new(seed.wrapping_add(1));
    let official_take = official_sentences.len().min(mix_rng.next_int(1, 2));
    let roast_take = roast_sentences.len().min(mix_rng.next_int(1, 2));

    let mut sentences: Vec<String> = Vec::new();
    if mix_rng.probability(0.5) {
        sentences.extend_from_slice(&official_sentences[..official_take]);
        sentences.extend_from_slice(&roast_sentences[..roast_take]);
    } else {
        sentences.extend_from_slice(&roast_sentences[..roast_take]);
        sentences.extend_from_slice(&official_sentences[..official_take]);
    }

    if cringe >= CringeLevel::Sarcastic {
        let pool: &[&str] = if cringe == CringeLevel::CringeHard {
            &MIX_PUNCHLINES_INTENSE
        } else {
            &MIX_PUNCHLINES
        };
        sentences.push((*mix_rng.choose(pool)).to_string());
    }

    let text = sentences
        .iter()
        .filter(|sentence| !sentence.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    ComposedResult {
        text,
        source: Source::Mix,
        lucky_color: official.lucky_color,
        lucky_number: official.lucky_number,
    }
}

/// Splits on sentence-ending punctuation runs into trimmed, capitalized
/// sentences with the punctuation dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
