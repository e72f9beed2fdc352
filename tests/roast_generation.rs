use roastscope::content::{cringe_mapping, fill_template};
use roastscope::rng::Prng;
use roastscope::roast::{generate_roast, RoastOptions};
use roastscope::transform::apply_transforms;
use roastscope::{CringeLevel, Day, ZodiacSign, CRINGE_LEVELS};

fn options(cringe: CringeLevel, seed: u32) -> RoastOptions {
    RoastOptions {
        sign: ZodiacSign::Leo,
        day: Day::Today,
        cringe,
        seed,
    }
}

#[test]
fn cringe_mapping_is_idempotent() {
    for level in CRINGE_LEVELS {
        let first = cringe_mapping(level);
        let second = cringe_mapping(level);
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }
}

#[test]
fn pools_are_never_empty() {
    for level in CRINGE_LEVELS {
        let mapping = cringe_mapping(level);
        assert!(!mapping.moods.is_empty());
        assert!(!mapping.work.is_empty());
        assert!(!mapping.love.is_empty());
        assert!(!mapping.tips.is_empty());
        assert!(!mapping.emojis.is_empty());
    }

    assert!(cringe_mapping(CringeLevel::Gentle).punchlines.is_empty());
    assert!(cringe_mapping(CringeLevel::Ironic).punchlines.is_empty());
    assert!(!cringe_mapping(CringeLevel::Sarcastic).punchlines.is_empty());
    assert!(!cringe_mapping(CringeLevel::CringeHard).punchlines.is_empty());
}

#[test]
fn fill_template_substitutes_every_placeholder() {
    for level in CRINGE_LEVELS {
        for seed in 0..40 {
            let mut rng = Prng::new(seed);
            let text = fill_template(ZodiacSign::Virgo, level, &mut rng);
            assert!(text.contains("Virgo"), "sign missing in: {}", text);
            assert!(!text.contains('{'), "unfilled placeholder in: {}", text);
            assert!(!text.contains('}'), "unfilled placeholder in: {}", text);
        }
    }
}

#[test]
fn roast_is_deterministic_per_seed() {
    for level in CRINGE_LEVELS {
        for seed in [1, 42, 1_813_347_119] {
            let first = generate_roast(&options(level, seed));
            let second = generate_roast(&options(level, seed));
            assert_eq!(first.text, second.text);
        }
    }
}

#[test]
fn roast_has_no_unfilled_placeholders() {
    for level in CRINGE_LEVELS {
        for seed in 0..60 {
            let roast = generate_roast(&options(level, seed));
            assert!(!roast.text.contains('{'), "bad roast: {}", roast.text);
        }
    }
}

#[test]
fn high_levels_end_with_a_punchline() {
    for level in [CringeLevel::Sarcastic, CringeLevel::CringeHard] {
        let punchlines = cringe_mapping(level).punchlines;
        for seed in 0..40 {
            let roast = generate_roast(&options(level, seed));
            assert!(
                punchlines.iter().any(|p| roast.text.ends_with(p)),
                "missing punchline at level {:?}: {}",
                level,
                roast.text
            );
        }
    }
}

#[test]
fn intensity_grows_with_cringe_level() {
    let loudness = |text: &str| {
        text.chars()
            .filter(|ch| ch.is_ascii_uppercase() || *ch == '!')
            .count()
    };

    let mut gentle_total = 0usize;
    let mut hard_total = 0usize;
    for seed in 0..200 {
        gentle_total += loudness(&generate_roast(&options(CringeLevel::Gentle, seed)).text);
        hard_total += loudness(&generate_roast(&options(CringeLevel::CringeHard, seed)).text);
    }

    assert!(
        hard_total > gentle_total,
        "level 3 should shout more than level 0 on average ({} vs {})",
        hard_total,
        gentle_total
    );
}

#[test]
fn level_zero_transform_is_identity() {
    let text = "Today will be a very good day. Trust yourself.";
    for seed in 0..20 {
        let mut rng = Prng::new(seed);
        assert_eq!(apply_transforms(text, CringeLevel::Gentle, &mut rng), text);
    }
}

#[test]
fn transforms_are_deterministic_per_seed() {
    let text = "Today brings really great opportunities. Stay sharp!";
    for level in CRINGE_LEVELS {
        for seed in [3, 77, 90210] {
            let mut first_rng = Prng::new(seed);
            let mut second_rng = Prng::new(seed);
            let first = apply_transforms(text, level, &mut first_rng);
            let second = apply_transforms(text, level, &mut second_rng);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn sarcastic_hyperbole_always_applies() {
    let text = "Today will be a very calm day. Enjoy it.";
    for seed in 0..50 {
        let mut rng = Prng::new(seed);
        let transformed = apply_transforms(text, CringeLevel::Sarcastic, &mut rng);
        assert!(
            transformed.contains("INCREDIBLY"),
            "hyperbole missing for seed {}: {}",
            seed,
            transformed
        );
    }
}

#[test]
fn hyperbole_respects_word_boundaries() {
    let text = "everything stays calm for everyone. nothing to report.";
    for seed in 0..50 {
        let mut rng = Prng::new(seed);
        let transformed = apply_transforms(text, CringeLevel::Sarcastic, &mut rng);
        assert!(!transformed.contains("INCREDIBLY"), "bad: {}", transformed);
        assert!(!transformed.contains("ABSOLUTELY"), "bad: {}", transformed);
    }
}
