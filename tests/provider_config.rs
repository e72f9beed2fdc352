use std::path::PathBuf;

use roastscope::config::AppConfig;
use roastscope::official::{fallback_official, LUCKY_COLORS, LUCKY_NUMBERS};
use roastscope::{Day, ZODIAC_SIGNS};

const DAYS: [Day; 3] = [Day::Yesterday, Day::Today, Day::Tomorrow];

#[test]
fn fallback_covers_every_sign_and_day() {
    for day in DAYS {
        for sign in ZODIAC_SIGNS {
            let horoscope = fallback_official(sign, day);
            assert!(
                !horoscope.text.trim().is_empty(),
                "empty fallback for {:?}/{:?}",
                sign,
                day
            );
        }
    }
}

#[test]
fn fallback_lucky_values_come_from_the_day_candidates() {
    for day in DAYS {
        for _ in 0..20 {
            let horoscope = fallback_official(roastscope::ZodiacSign::Gemini, day);
            let color = horoscope.lucky_color.expect("fallback always picks a color");
            assert!(
                LUCKY_COLORS[day.index()].contains(&color.as_str()),
                "color {} not a {:?} candidate",
                color,
                day
            );
            let number = horoscope.lucky_number.expect("fallback always picks a number");
            assert!(
                LUCKY_NUMBERS[day.index()].contains(&number),
                "number {} not a {:?} candidate",
                number,
                day
            );
        }
    }
}

#[test]
fn config_defaults_are_sensible() {
    let config = AppConfig::default();
    assert!(config.provider.endpoint.starts_with("https://"));
    assert_eq!(config.provider.timeout_ms, 10_000);
    assert_eq!(config.defaults.mode, "roast");
    assert_eq!(config.defaults.cringe, 1);
    assert!(config.defaults.deterministic);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let path = PathBuf::from("/nonexistent/roastscope-test/config.toml");
    let (config, resolved) = AppConfig::load(Some(path.clone())).expect("load succeeds");
    assert_eq!(resolved, Some(path));
    assert_eq!(config.defaults.mode, AppConfig::default().defaults.mode);
}

#[test]
fn config_file_is_parsed() {
    let path = std::env::temp_dir().join("roastscope-config-parse-test.toml");
    let contents = r#"
[provider]
endpoint = "http://localhost:9999"
timeout_ms = 1234

[defaults]
mode = "mix"
cringe = 2
deterministic = false
"#;
    std::fs::write(&path, contents).expect("write temp config");

    let (config, _) = AppConfig::load(Some(path.clone())).expect("load succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.provider.endpoint, "http://localhost:9999");
    assert_eq!(config.provider.timeout_ms, 1234);
    assert_eq!(config.defaults.mode, "mix");
    assert_eq!(config.defaults.cringe, 2);
    assert!(!config.defaults.deterministic);
}
