use crate::content::{cringe_mapping, fill_template};
use crate::rng::Prng;
use crate::transform::apply_transforms;
use crate::{CringeLevel, Day, RoastHoroscope, ZodiacSign};

#[derive(Debug, Clone)]
pub struct RoastOptions {
    pub sign: ZodiacSign,
    pub day: Day,
    pub cringe: CringeLevel,
    pub seed: u32,
}

/// Builds the roast text for a seed: template fill, transform chain,
/// then a punchline for Sarcastic and above. A single generator drives
/// all three stages, so the whole text is a pure function of
/// (sign, cringe, seed).
pub fn generate_roast(options: &RoastOptions) -> RoastHoroscope {
    let mut rng = Prng::new(options.seed);
    let filled = fill_template(options.sign, options.cringe, &mut rng);
    let mut text = apply_transforms(&filled, options.cringe, &mut rng);

    if options.cringe >= CringeLevel::Sarcastic {
        let punchlines = cringe_mapping(options.cringe).punchlines;
        text.push(' ');
        text.push_str(*rng.choose(punchlines));
    }

    RoastHoroscope { text }
}
