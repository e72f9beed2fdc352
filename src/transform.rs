use once_cell::sync::Lazy;
use regex::Regex;

use crate::rng::Prng;
use crate::CringeLevel;

const HEDGE: &str = " (you know what I mean)";

const INTERJECTIONS: [&str; 9] = [
    "tbh", "ngl", "fr fr", "periodt", "no cap", "bestie", "sis", "facts", "tea",
];

const FLOURISH_EMOJI: [&str; 9] = ["💅", "✨", "💫", "🔥", "💯", "😍", "🤩", "👑", "💎"];

// One-step upgrades for emoji that can appear from the content pools.
// Scanned in order; the first key present in the text is replaced once.
const EMOJI_INTENSIFY: [(&str, &str); 14] = [
    ("😊", "🤩"),
    ("🌟", "💫"),
    ("🌸", "🌺"),
    ("✨", "💥"),
    ("😏", "😈"),
    ("🙄", "🤪"),
    ("😉", "😜"),
    ("😎", "🤩"),
    ("💀", "☠️"),
    ("💣", "💥"),
    ("🔥", "🔥🔥"),
    ("⚡", "⚡⚡"),
    ("🤡", "🤡🤡"),
    ("👹", "👺"),
];

const HYPERBOLE: [(&str, &str); 2] = [("very", "INCREDIBLY"), ("really", "ABSOLUTELY")];

const HYPERBOLE_INTENSE: [(&str, &str); 12] = [
    ("very", "EXTREMELY"),
    ("really", "ABSOLUTELY"),
    ("quite", "INCREDIBLY"),
    ("pretty", "RIDICULOUSLY"),
    ("good", "AMAZING"),
    ("bad", "TERRIBLE"),
    ("big", "HUGE"),
    ("small", "TINY"),
    ("nice", "FANTASTIC"),
    ("great", "PHENOMENAL"),
    ("okay", "MIND-BLOWING"),
    ("fine", "SPECTACULAR"),
];

static HYPERBOLE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_word_patterns(&HYPERBOLE));
static HYPERBOLE_INTENSE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_word_patterns(&HYPERBOLE_INTENSE));

fn compile_word_patterns(entries: &[(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    entries
        .iter()
        .map(|(word, replacement)| {
            let pattern =
                Regex::new(&format!(r"(?i)\b{}\b", word)).expect("static hyperbole pattern");
            (pattern, *replacement)
        })
        .collect()
}

/// Cringe-level-gated mutation chain. Every gate consumes one draw from
/// the shared generator, so the step order within each level is part of
/// the output contract for a seed and must not be rearranged.
pub fn apply_transforms(text: &str, level: CringeLevel, rng: &mut Prng) -> String {
    match level {
        CringeLevel::Gentle => text.to_string(),
        CringeLevel::Ironic => apply_ironic(text, rng),
        CringeLevel::Sarcastic => apply_sarcastic(text, rng),
        CringeLevel::CringeHard => apply_cringe_hard(text, rng),
    }
}

fn apply_ironic(text: &str, rng: &mut Prng) -> String {
    let mut result = text.to_string();
    if rng.probability(0.10) {
        result.push_str(HEDGE);
    }
    if rng.probability(0.15) {
        result = intensify_emoji(&result);
    }
    result
}

fn apply_sarcastic(text: &str, rng: &mut Prng) -> String {
    let mut result = text.to_string();
    if rng.probability(0.20) {
        result = alternate_case_words(&result, 1, rng);
    }
    result = substitute_hyperbole(&result);
    if rng.probability(0.25) {
        result = insert_interjection(&result, rng);
    }
    if rng.probability(0.30) {
        result = intensify_emoji(&result);
    }
    for _ in 0..2 {
        if rng.probability(0.40) {
            result.push(' ');
            result.push_str(*rng.choose(&FLOURISH_EMOJI));
        }
    }
    result
}

fn apply_cringe_hard(text: &str, rng: &mut Prng) -> String {
    let mut result = text.to_string();
    if rng.probability(0.40) {
        let count = rng.next_int(2, 3);
        result = elongate_vowel_words(&result, count, rng);
    }
    if rng.probability(0.35) {
        let count = rng.next_int(2, 3);
        result = alternate_case_words(&result, count, rng);
    }
    result = substitute_hyperbole_intense(&result, rng);
    if rng.probability(0.40) {
        for _ in 0..2 {
            result = insert_interjection(&result, rng);
        }
    }
    for _ in 0..3 {
        if rng.probability(0.40) {
            result.push(' ');
            result.push_str(*rng.choose(&FLOURISH_EMOJI));
        }
    }
    if rng.probability(0.50) {
        result = intensify_emoji(&result);
    }
    result
}

/// AbCdE-cases up to `count` randomly picked words. Words shorter than
/// three chars, or already shaped upper..lower..upper, are skipped
/// without a retry.
fn alternate_case_words(text: &str, count: usize, rng: &mut Prng) -> String {
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let picks = count.min(words.len());
    for _ in 0..picks {
        let index = rng.next_int(0, words.len() - 1);
        let word = words[index].clone();
        if word.chars().count() < 3 || has_mixed_case(&word) {
            continue;
        }
        words[index] = alternate_case(&word);
    }
    words.join(" ")
}

fn alternate_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            if ch.is_ascii_alphabetic() {
                if i % 2 == 0 {
                    ch.to_ascii_lowercase()
                } else {
                    ch.to_ascii_uppercase()
                }
            } else {
                ch
            }
        })
        .collect()
}

// Upper, then lower, then upper again anywhere in the word.
fn has_mixed_case(word: &str) -> bool {
    let mut seen_upper = false;
    let mut seen_lower_after_upper = false;
    for ch in word.chars() {
        if ch.is_ascii_uppercase() {
            if seen_lower_after_upper {
                return true;
            }
            seen_upper = true;
        } else if ch.is_ascii_lowercase() && seen_upper {
            seen_lower_after_upper = true;
        }
    }
    false
}

/// Stretches one vowel occurrence in up to `count` randomly picked
/// words by 3-5 extra repeats. Words shorter than three chars, without
/// vowels, or already carrying a 3+ vowel run are skipped.
fn elongate_vowel_words(text: &str, count: usize, rng: &mut Prng) -> String {
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let picks = count.min(words.len());
    for _ in 0..picks {
        let index = rng.next_int(0, words.len() - 1);
        let word = words[index].clone();
        if word.chars().count() < 3 || has_repeated_vowel_run(&word) {
            continue;
        }
        let vowels: Vec<(usize, char)> = word
            .char_indices()
            .filter(|(_, ch)| is_vowel(ch.to_ascii_lowercase()))
            .collect();
        if vowels.is_empty() {
            continue;
        }
        let (position, vowel) = *rng.choose(&vowels);
        let extra = rng.next_int(3, 5);
        let after = position + vowel.len_utf8();
        let mut elongated = String::with_capacity(word.len() + extra);
        elongated.push_str(&word[..after]);
        for _ in 0..extra {
            elongated.push(vowel);
        }
        elongated.push_str(&word[after..]);
        words[index] = elongated;
    }
    words.join(" ")
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_repeated_vowel_run(word: &str) -> bool {
    let mut run = 1usize;
    let mut previous: Option<char> = None;
    for ch in word.chars() {
        let lower = ch.to_ascii_lowercase();
        if is_vowel(lower) && previous == Some(lower) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        previous = Some(lower);
    }
    false
}

/// Small fixed map, at most one replacement in total: the first entry
/// with a word-boundary match wins, and only its first occurrence is
/// rewritten.
fn substitute_hyperbole(text: &str) -> String {
    for (pattern, replacement) in HYPERBOLE_PATTERNS.iter() {
        if pattern.is_match(text) {
            return pattern.replace(text, *replacement).into_owned();
        }
    }
    text.to_string()
}

/// Expanded map for the top level. One gate per entry, drawn whether or
/// not the word occurs, so the draw count depends only on the seed; a
/// hit replaces every occurrence of that entry.
fn substitute_hyperbole_intense(text: &str, rng: &mut Prng) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in HYPERBOLE_INTENSE_PATTERNS.iter() {
        if rng.probability(0.30) && pattern.is_match(&result) {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
    }
    result
}

/// Slang token at the very start, or spliced directly before the first
/// sentence-ending punctuation (appended when there is none).
fn insert_interjection(text: &str, rng: &mut Prng) -> String {
    let token = *rng.choose(&INTERJECTIONS);
    if rng.probability(0.5) {
        return format!("{}, {}", token, text);
    }
    match text.find(&['.', '!', '?'][..]) {
        Some(position) => {
            let mut result = String::with_capacity(text.len() + token.len() + 2);
            result.push_str(&text[..position]);
            result.push_str(", ");
            result.push_str(token);
            result.push_str(&text[position..]);
            result
        }
        None => format!("{}, {}", text, token),
    }
}

fn intensify_emoji(text: &str) -> String {
    for (plain, intense) in EMOJI_INTENSIFY {
        if text.contains(plain) {
            return text.replacen(plain, intense, 1);
        }
    }
    text.to_string()
}
