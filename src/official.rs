use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::config::ProviderConfig;
use crate::{Day, OfficialHoroscope, ZodiacSign};

#[derive(Clone)]
pub struct OfficialProvider {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    description: String,
    color: Option<String>,
    lucky_number: Option<u32>,
}

impl OfficialProvider {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, String> {
        let timeout = Duration::from_millis(config.timeout_ms);
        OfficialProvider::new(config.endpoint.clone(), timeout)
    }

    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build horoscope client: {}", err))?;
        Ok(Self { endpoint, client })
    }

    pub async fn fetch(&self, sign: ZodiacSign, day: Day) -> Result<OfficialHoroscope, String> {
        let url = self.endpoint.trim_end_matches('/').to_string();
        let response = self
            .client
            .get(url)
            .query(&[("sign", sign.token()), ("day", day.label())])
            .send()
            .await
            .map_err(|err| format!("horoscope request failed: {}", err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!(
                "horoscope provider error {}: {}",
                status,
                body.trim()
            ));
        }

        let body: ProviderResponse = response
            .json()
            .await
            .map_err(|err| format!("horoscope response parse failed: {}", err))?;

        Ok(OfficialHoroscope {
            text: body.description,
            lucky_color: body.color,
            lucky_number: body.lucky_number,
        })
    }

    /// Provider call with local recovery: on any failure the static
    /// per-sign fallback is substituted and the error is surfaced as a
    /// warning, so callers always receive a valid horoscope shape.
    pub async fn fetch_or_fallback(
        &self,
        sign: ZodiacSign,
        day: Day,
    ) -> (OfficialHoroscope, Option<String>) {
        match self.fetch(sign, day).await {
            Ok(official) => (official, None),
            Err(err) => {
                warn!(
                    sign = sign.token(),
                    day = day.label(),
                    error = %err,
                    "provider failed, using fallback horoscope"
                );
                let warning = format!("official horoscope unavailable: {}", err);
                (fallback_official(sign, day), Some(warning))
            }
        }
    }
}

// Indexed [day][sign], in ZODIAC_SIGNS order.
const FALLBACK_TEXTS: [[&str; 12]; 3] = [
    [
        "Yesterday's bold moves set the stage for future success. Your courage opened doors that were previously closed.",
        "The patience you showed yesterday has planted seeds that will bloom soon. Your steady approach paid off.",
        "Yesterday's conversations created lasting connections. Your words had more impact than you realized.",
        "The emotional insights you gained yesterday will guide your relationships moving forward.",
        "Your leadership yesterday inspired others in ways you may not have noticed. The ripple effects continue.",
        "The details you attended to yesterday prevented bigger problems today. Your diligence was worthwhile.",
        "The balance you sought yesterday brought harmony to your surroundings. Peace was your gift to others.",
        "Yesterday's transformation deepened your understanding of yourself. The change was necessary and powerful.",
        "The adventure you embraced yesterday expanded your horizons in unexpected ways.",
        "Yesterday's hard work laid a solid foundation for the challenges ahead. Your effort was an investment.",
        "The innovative thinking you displayed yesterday sparked new possibilities for the future.",
        "Yesterday's creative expressions touched hearts and opened minds. Your imagination was a healing force.",
    ],
    [
        "Your fiery energy will guide you through today's challenges. Take bold action but remember to think before you leap.",
        "Stability and patience will be your allies today. Trust in your practical nature to make the right decisions.",
        "Communication is key today. Your versatility will help you adapt to changing circumstances with ease.",
        "Trust your intuition and nurture the relationships that matter most to you. Home brings comfort today.",
        "Your natural leadership shines bright today. Share your generous spirit with others and watch magic happen.",
        "Attention to detail will serve you well today. Your analytical mind sees solutions others might miss.",
        "Balance and harmony guide your path today. Your diplomatic nature helps resolve conflicts around you.",
        "Deep transformation awaits you today. Trust your instincts and embrace the power of change.",
        "Adventure calls to your spirit today. Your optimism and wisdom will inspire those around you.",
        "Discipline and determination lead you to success today. Your ambitious nature pays dividends.",
        "Innovation and independence mark your day. Your unique perspective brings fresh solutions to old problems.",
        "Creativity and compassion flow through you today. Trust your dreams and let your imagination soar.",
    ],
    [
        "Tomorrow brings opportunities for leadership that will test your courage. Prepare to step into your power.",
        "A steady approach tomorrow will yield results that surprise even you. Trust in your methodical nature.",
        "Tomorrow's conversations will open doors to new possibilities. Your words will carry special weight.",
        "Emotional clarity awaits you tomorrow. Trust the feelings that guide you toward meaningful connections.",
        "Tomorrow you'll shine in ways that inspire others to find their own light. Your presence will be a gift.",
        "The attention to detail you bring tomorrow will solve a puzzle that has long confused others.",
        "Tomorrow brings a chance to create harmony where there has been discord. Your diplomatic skills are needed.",
        "A powerful transformation begins tomorrow. Embrace the changes that will ultimately strengthen you.",
        "Tomorrow's journey will take you further than you expect. Pack light but bring your curiosity.",
        "Tomorrow's challenges require the discipline you've been building. Your preparation will pay off.",
        "Tomorrow brings a breakthrough that changes your perspective. Your innovative mind will see the way forward.",
        "Tomorrow your intuition will guide you to exactly where you need to be. Trust the flow of events.",
    ],
];

pub const LUCKY_COLORS: [&[&str]; 3] = [
    &["slate gray", "bronze", "mahogany", "navy", "purple"],
    &[
        "blue", "red", "green", "purple", "orange", "pink", "yellow", "indigo",
    ],
    &[
        "gold",
        "amber",
        "jade-green",
        "amethyst",
        "lavender",
        "sea green",
    ],
];

pub const LUCKY_NUMBERS: [&[u32]; 3] = [
    &[1, 3, 5, 7, 9, 11, 13],
    &[1, 3, 7, 9, 11, 13, 17, 21, 23, 27],
    &[8, 12, 16, 18, 22, 24, 28, 30, 33, 36],
];

/// Pre-written per-sign text plus a lucky color and number drawn from
/// the day's candidate sets. Deliberately non-deterministic: this path
/// only runs when the provider is down, outside the seeded core.
pub fn fallback_official(sign: ZodiacSign, day: Day) -> OfficialHoroscope {
    let mut rng = rand::thread_rng();
    let colors = LUCKY_COLORS[day.index()];
    let numbers = LUCKY_NUMBERS[day.index()];

    OfficialHoroscope {
        text: FALLBACK_TEXTS[day.index()][sign.index()].to_string(),
        lucky_color: colors.choose(&mut rng).map(|color| color.to_string()),
        lucky_number: numbers.choose(&mut rng).copied(),
    }
}
