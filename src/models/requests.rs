use serde::Deserialize;

use crate::config::constants::{DEFAULT_SPEED, MAX_SPEED, MAX_TEXT_LENGTH, MIN_SPEED};
use crate::error::{Result, TtsError};
use crate::kitten::voice_config::Voice;
use crate::text_processing::normalization::{char_len, normalize};

/// Raw JSON body of the generate endpoints
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default)]
    pub speed: SpeedInput,
}

/// Speed as sent by the client: a number, or a string holding one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SpeedInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for SpeedInput {
    fn default() -> Self {
        SpeedInput::Number(DEFAULT_SPEED as f64)
    }
}

impl SpeedInput {
    pub fn to_f32(&self) -> Result<f32> {
        match self {
            SpeedInput::Number(n) => Ok(*n as f32),
            SpeedInput::Text(s) => s.trim().parse::<f32>().map_err(|_| TtsError::SpeedNotNumeric),
            SpeedInput::Other(_) => Err(TtsError::SpeedNotNumeric),
        }
    }
}

/// A request that passed validation and is ready for synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Whitespace-normalized text
    pub text: String,
    pub voice: Voice,
    pub speed: f32,
}

fn default_voice() -> String {
    Voice::DEFAULT.id().to_string()
}

/// Reject speeds outside the supported range (NaN included)
pub fn validate_speed(speed: f32) -> Result<f32> {
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(TtsError::InvalidSpeed(speed))
    }
}

impl GenerateRequest {
    /// Parse a request body; anything but a JSON object is rejected
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            TtsError::InvalidPayload
        })
    }

    /// Validate fields in the order clients see errors for them
    pub fn validate(self) -> Result<SynthesisRequest> {
        let text = normalize(&self.text);
        let speed = self.speed.to_f32()?;

        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let text_len = char_len(&text);
        if text_len > MAX_TEXT_LENGTH {
            return Err(TtsError::TextTooLong(text_len));
        }

        let voice = Voice::from_id(&self.voice).ok_or(TtsError::InvalidVoice(self.voice))?;
        let speed = validate_speed(speed)?;

        Ok(SynthesisRequest { text, voice, speed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<SynthesisRequest> {
        GenerateRequest::from_slice(json.as_bytes())?.validate()
    }

    #[test]
    fn test_full_request() {
        let req = parse(r#"{"text": "Hello world", "voice": "Bella", "speed": 1.5}"#).unwrap();

        assert_eq!(req.text, "Hello world");
        assert_eq!(req.voice, Voice::Bella);
        assert_eq!(req.speed, 1.5);
    }

    #[test]
    fn test_defaults() {
        let req = parse(r#"{"text": "Hello"}"#).unwrap();

        assert_eq!(req.voice, Voice::Jasper);
        assert_eq!(req.speed, 1.0);
    }

    #[test]
    fn test_text_is_normalized() {
        let req = parse(r#"{"text": "  Hello \n\n  world\t "}"#).unwrap();
        assert_eq!(req.text, "Hello world");
    }

    #[test]
    fn test_speed_as_numeric_string() {
        let req = parse(r#"{"text": "Hi", "speed": " 1.25 "}"#).unwrap();
        assert_eq!(req.speed, 1.25);
    }

    #[test]
    fn test_speed_integer() {
        let req = parse(r#"{"text": "Hi", "speed": 2}"#).unwrap();
        assert_eq!(req.speed, 2.0);
    }

    #[test]
    fn test_speed_not_numeric() {
        for json in [
            r#"{"text": "Hi", "speed": "fast"}"#,
            r#"{"text": "Hi", "speed": null}"#,
            r#"{"text": "Hi", "speed": [1]}"#,
            r#"{"text": "Hi", "speed": {"value": 1}}"#,
        ] {
            assert!(
                matches!(parse(json), Err(TtsError::SpeedNotNumeric)),
                "expected SpeedNotNumeric for {}",
                json
            );
        }
    }

    #[test]
    fn test_speed_checked_before_text() {
        // Matches the order clients have always seen: number check first
        let err = parse(r#"{"text": "", "speed": "fast"}"#).unwrap_err();
        assert!(matches!(err, TtsError::SpeedNotNumeric));
    }

    #[test]
    fn test_speed_out_of_range() {
        for speed in ["0.49", "2.01", "3.0", "-1", "\"nan\"", "\"inf\""] {
            let json = format!(r#"{{"text": "Hi", "speed": {}}}"#, speed);
            assert!(
                matches!(parse(&json), Err(TtsError::InvalidSpeed(_))),
                "expected InvalidSpeed for {}",
                speed
            );
        }
    }

    #[test]
    fn test_speed_bounds_inclusive() {
        assert_eq!(parse(r#"{"text": "Hi", "speed": 0.5}"#).unwrap().speed, 0.5);
        assert_eq!(parse(r#"{"text": "Hi", "speed": 2.0}"#).unwrap().speed, 2.0);
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        assert!(matches!(parse(r#"{"text": ""}"#), Err(TtsError::EmptyText)));
        assert!(matches!(parse(r#"{"text": "  \n "}"#), Err(TtsError::EmptyText)));
        assert!(matches!(parse(r#"{}"#), Err(TtsError::EmptyText)));
    }

    #[test]
    fn test_text_length_limit_in_characters() {
        let ok = "é".repeat(1000);
        assert!(parse(&format!(r#"{{"text": "{}"}}"#, ok)).is_ok());

        let too_long = "a".repeat(1001);
        assert!(matches!(
            parse(&format!(r#"{{"text": "{}"}}"#, too_long)),
            Err(TtsError::TextTooLong(1001))
        ));
    }

    #[test]
    fn test_limit_applies_after_normalization() {
        // 1000 words separated by runs of spaces collapse under the limit
        let text = vec!["a"; 500].join("     ");
        assert!(parse(&format!(r#"{{"text": "{}"}}"#, text)).is_ok());
    }

    #[test]
    fn test_invalid_voice() {
        let err = parse(r#"{"text": "Hi", "voice": "bf_lily"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid voice: bf_lily");
    }

    #[test]
    fn test_voice_checked_before_speed_range() {
        let err = parse(r#"{"text": "Hi", "voice": "Nobody", "speed": 3.0}"#).unwrap_err();
        assert!(matches!(err, TtsError::InvalidVoice(_)));
    }

    #[test]
    fn test_invalid_payloads() {
        for body in ["", "not json", "[1, 2]", "\"text\"", "42", r#"{"text": 5}"#] {
            assert!(
                matches!(GenerateRequest::from_slice(body.as_bytes()), Err(TtsError::InvalidPayload)),
                "expected InvalidPayload for {:?}",
                body
            );
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let req = parse(r#"{"text": "Test", "unknown_field": "ignored", "enable_chunking": false}"#)
            .unwrap();
        assert_eq!(req.text, "Test");
    }

    #[test]
    fn test_validate_speed() {
        assert!(validate_speed(1.0).is_ok());
        assert!(validate_speed(f32::NAN).is_err());
        assert!(validate_speed(0.0).is_err());
    }
}
