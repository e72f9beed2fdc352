use serde::{Deserialize, Serialize};

use roastscope::config::DefaultsConfig;
use roastscope::{ComposedResult, CringeLevel, Day, Mode, ZodiacSign};

#[derive(Debug, Deserialize)]
pub struct ApiGenerateRequest {
    pub sign: String,
    pub day: Option<String>,
    pub mode: Option<String>,
    pub cringe: Option<u8>,
    pub seed: Option<u32>,
    pub deterministic: Option<bool>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct GenerateInput {
    pub sign: ZodiacSign,
    pub day: Day,
    pub mode: Mode,
    pub cringe: CringeLevel,
    pub seed: Option<u32>,
    pub deterministic: bool,
}

impl ApiGenerateRequest {
    pub fn into_input(self, defaults: &DefaultsConfig) -> Result<GenerateInput, String> {
        let sign = ZodiacSign::from_str(&self.sign)
            .ok_or_else(|| format!("invalid zodiac sign: {}", self.sign))?;

        let day = match self.day.as_deref() {
            Some(value) => {
                Day::from_str(value).ok_or_else(|| format!("invalid day: {}", value))?
            }
            None => Day::Today,
        };

        let mode = match self.mode.as_deref() {
            Some(value) => {
                Mode::from_str(value).ok_or_else(|| format!("invalid mode: {}", value))?
            }
            None => Mode::from_str(&defaults.mode)
                .ok_or_else(|| format!("invalid configured mode: {}", defaults.mode))?,
        };

        let cringe = CringeLevel::from_u8(self.cringe.unwrap_or(defaults.cringe))?;
        let deterministic = self.deterministic.unwrap_or(defaults.deterministic);

        Ok(GenerateInput {
            sign,
            day,
            mode,
            cringe,
            seed: self.seed,
            deterministic,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiGenerateResponse {
    pub request_id: String,
    pub text: String,
    pub source: String,
    pub lucky_color: Option<String>,
    pub lucky_number: Option<u32>,
    pub seed: u32,
    pub sign: String,
    pub date: String,
    pub mode: String,
    pub cringe: u8,
    pub cringe_label: String,
    pub warnings: Vec<String>,
}

impl ApiGenerateResponse {
    pub fn from_result(
        result: ComposedResult,
        input: &GenerateInput,
        seed: u32,
        date: String,
        warnings: Vec<String>,
        request_id: String,
    ) -> Self {
        Self {
            request_id,
            text: result.text,
            source: result.source.label().to_string(),
            lucky_color: result.lucky_color,
            lucky_number: result.lucky_number,
            seed,
            sign: input.sign.token().to_string(),
            date,
            mode: input.mode.label().to_string(),
            cringe: input.cringe.index() as u8,
            cringe_label: input.cringe.label().to_string(),
            warnings,
        }
    }
}
