use crate::rng::Prng;
use crate::{CringeLevel, ZodiacSign};

pub const TEMPLATES: [&str; 4] = [
    "Today {sign} will feel {mood}. At work: {work}. In love: {love}. Advice: {tip} {emoji}",
    "{sign}, get ready! {mood} awaits you. Work brings {work}. Daily wisdom: {tip} {emoji}",
    "Dear {sign}, {mood} is your everything today. {work} at work. Don't forget: {tip} {emoji}",
    "Hey {sign}! {mood} is knocking at your door. Workday: {work}. Wisdom of the day: {tip} {emoji}",
];

/// One cringe level's worth of content. Pool order matters: selection
/// is by drawn index, so reordering a list changes output for a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CringeMapping {
    pub moods: &'static [&'static str],
    pub work: &'static [&'static str],
    pub love: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub emojis: &'static [&'static str],
    pub punchlines: &'static [&'static str],
}

static MAPPINGS: [CringeMapping; 4] = [
    // Gentle
    CringeMapping {
        moods: &[
            "mild anxiety",
            "pleasant surprise",
            "calm confidence",
            "gentle determination",
            "quiet joy",
        ],
        work: &[
            "steady progress",
            "small successes",
            "productive collaboration",
            "useful meetings",
            "constructive solutions",
        ],
        love: &[
            "harmony in relationships",
            "mutual understanding",
            "pleasant surprises",
            "romantic moments",
            "emotional closeness",
        ],
        tips: &[
            "pay attention to details",
            "trust your intuition",
            "don't rush to conclusions",
            "appreciate simple joys",
        ],
        emojis: &["😊", "🌟", "💫", "🌸", "✨"],
        punchlines: &[],
    },
    // Ironic
    CringeMapping {
        moods: &[
            "ironic mood",
            "light skepticism",
            "playful doubt",
            "sarcastic smile",
            "condescending patience",
        ],
        work: &[
            "another pointless meeting",
            "simulation of busy activity",
            "diplomatic conflict avoidance",
            "creative procrastination",
        ],
        love: &[
            "slight misunderstandings",
            "ironic compliments",
            "playful arguments",
            "sarcasm as love language",
        ],
        tips: &[
            "activate 'I don't care' mode",
            "practice the art of sarcasm",
            "don't take everything to heart",
            "laugh at life's absurdity",
        ],
        emojis: &["😏", "🙄", "😉", "🤷‍♀️", "😎"],
        punchlines: &[],
    },
    // Sarcastic
    CringeMapping {
        moods: &[
            "malicious grin",
            "spiteful pleasure",
            "caustic righteousness",
            "premium sarcasm",
            "cynical wisdom",
        ],
        work: &[
            "theater of the absurd",
            "circus with horses",
            "parade of ambitions",
            "festival of incompetence",
            "carnival of office politics",
        ],
        love: &[
            "dramatic relationship clarifications",
            "epic fights over trivial things",
            "passive aggression",
            "war for the TV remote",
        ],
        tips: &[
            "prepare for battle with stupidity",
            "arm yourself with patience and venom",
            "don't hesitate to show your superiority",
            "let everyone burn with blue flame",
        ],
        emojis: &["💀", "🔥", "😈", "💣", "⚡"],
        punchlines: &[
            "P.S. Life is pain, get used to it.",
            "Good luck, you'll need it.",
            "Remember: everything passes, and this too shall pass... or not.",
        ],
    },
    // Cringe Hard
    CringeMapping {
        moods: &[
            "ABSOLUTE CHAOS in your soul",
            "CRINGE EUPHORIA",
            "TOXIC POSITIVITY",
            "DESTRUCTIVE ENERGY",
            "INSANE confidence in being right",
        ],
        work: &[
            "EPIC SYSTEM MELTDOWN",
            "REVOLUTION AGAINST COMMON SENSE",
            "CHAOTIC DANCE OF DEADLINES",
            "MADNESS OF CORPORATE CULTURE",
        ],
        love: &[
            "ROMANTIC APOCALYPSE",
            "LOVE CATASTROPHE",
            "CHAOS OF FEELINGS AND EMOTIONS",
            "TOXIC WHIRLPOOL OF PASSION",
        ],
        tips: &[
            "DESTROY STEREOTYPES LEFT AND RIGHT",
            "BE THE EMBODIMENT OF CHAOS",
            "SHOW THE WORLD WHO'S THE ALPHA",
            "START A REVOLUTION IN YOUR HEAD",
        ],
        emojis: &["🤡", "💥", "🌪️", "👹", "🎭", "🔥💥", "⚡👹"],
        punchlines: &[
            "P.S. YOU'RE A LEGEND, SOME JUST DON'T KNOW IT YET!!!",
            "REMEMBER: THE WORLD ISN'T READY FOR YOUR GREATNESS!!!",
            "MOST IMPORTANTLY - BELIEVE IN YOURSELF, EVEN WHEN NO ONE ELSE DOES!!!",
        ],
    },
];

/// Content snapshot for a level. Always returns the same static data;
/// levels below Sarcastic have empty punchline pools.
pub fn cringe_mapping(level: CringeLevel) -> &'static CringeMapping {
    &MAPPINGS[level.index()]
}

/// Picks a template and one filler per category, then substitutes.
///
/// The love filler is drawn even for templates with no {love} slot:
/// every draw advances the shared generator, and the draw order
/// (template, mood, work, love, tip, emoji) is part of the output
/// contract for a seed.
pub fn fill_template(sign: ZodiacSign, level: CringeLevel, rng: &mut Prng) -> String {
    let mapping = cringe_mapping(level);
    let template = *rng.choose(&TEMPLATES);
    let mood = *rng.choose(mapping.moods);
    let work = *rng.choose(mapping.work);
    let love = *rng.choose(mapping.love);
    let tip = *rng.choose(mapping.tips);
    let emoji = *rng.choose(mapping.emojis);

    // Ordered pairs, one replacement each: a filler that happens to
    // contain a token-like substring is never re-substituted.
    let substitutions = [
        ("{sign}", sign.label()),
        ("{mood}", mood),
        ("{work}", work),
        ("{love}", love),
        ("{tip}", tip),
        ("{emoji}", emoji),
    ];

    let mut text = template.to_string();
    for (token, value) in substitutions {
        text = text.replacen(token, value, 1);
    }
    text
}
