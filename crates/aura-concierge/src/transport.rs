//! Chat transport contract and the production generative-language
//! transport.

use aura_core::StorefrontError;
use aura_core::StorefrontResult;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::chat::ChatRequest;

const GENERATIVE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GENERATIVE_MODEL: &str = "gemini-2.5-flash";

/// Boundary to the external generative-language service.
///
/// Implementations return the reply text or an error; the concierge
/// layer decides how failures surface to the shopper.
pub trait ChatTransport {
    fn generate(&self, api_key: &str, request: &ChatRequest) -> StorefrontResult<String>;
}

/// Blocking HTTP transport for the hosted `gemini-2.5-flash` model.
#[derive(Debug)]
pub struct GeminiTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl GeminiTransport {
    pub fn new() -> StorefrontResult<Self> {
        let endpoint = format!("{GENERATIVE_API_BASE}/{GENERATIVE_MODEL}:generateContent");
        Url::parse(&endpoint).map_err(|error| {
            StorefrontError::new(
                "concierge.endpoint.invalid",
                format!("failed to parse generative endpoint `{endpoint}`: {error}"),
            )
        })?;

        Ok(Self {
            agent: ureq::Agent::new_with_defaults(),
            endpoint,
        })
    }
}

impl ChatTransport for GeminiTransport {
    fn generate(&self, api_key: &str, request: &ChatRequest) -> StorefrontResult<String> {
        let payload = serde_json::to_string(&request_payload(request)).map_err(|error| {
            StorefrontError::new(
                "concierge.request.encode_failed",
                format!("failed to encode chat payload: {error}"),
            )
        })?;

        let response = self
            .agent
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .send(payload.as_str())
            .map_err(|error| {
                StorefrontError::new(
                    "concierge.request.failed",
                    format!("generative request failed: {error}"),
                )
            })?;

        let body = response.into_body().read_to_string().map_err(|error| {
            StorefrontError::new(
                "concierge.reply.read_failed",
                format!("failed to read generative reply: {error}"),
            )
        })?;

        reply_text(&body)
    }
}

#[derive(Debug, Clone, Serialize)]
struct WirePayload {
    #[serde(rename = "systemInstruction")]
    system_instruction: WireContent,
    contents: Vec<WireContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WirePart {
    text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WireReply {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireContent>,
}

fn text_content(role: Option<&str>, text: &str) -> WireContent {
    WireContent {
        role: role.map(ToOwned::to_owned),
        parts: vec![WirePart {
            text: text.to_owned(),
        }],
    }
}

/// Replays the transcript and appends the new message as the final
/// user turn.
fn request_payload(request: &ChatRequest) -> WirePayload {
    let mut contents = request
        .transcript
        .iter()
        .map(|turn| text_content(Some(turn.role.wire_name()), &turn.text))
        .collect::<Vec<_>>();
    contents.push(text_content(Some("user"), &request.message));

    WirePayload {
        system_instruction: text_content(None, &request.system_instruction),
        contents,
    }
}

/// Extracts the first candidate's text from a reply body.
fn reply_text(body: &str) -> StorefrontResult<String> {
    let reply: WireReply = serde_json::from_str(body).map_err(|error| {
        StorefrontError::new(
            "concierge.reply.malformed",
            format!("failed to decode generative reply: {error}"),
        )
    })?;

    let text = reply
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(StorefrontError::new(
            "concierge.reply.empty",
            "generative reply carried no candidate text",
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::reply_text;
    use super::request_payload;
    use crate::chat::ChatRequest;
    use crate::chat::ChatTurn;

    fn sample_request() -> ChatRequest {
        ChatRequest {
            system_instruction: "Be warm.".to_owned(),
            transcript: vec![
                ChatTurn::user("What colors does the lamp come in?"),
                ChatTurn::assistant("Oak and sand linen."),
            ],
            message: "Thanks!".to_owned(),
        }
    }

    #[test]
    fn payload_replays_the_transcript_then_the_new_message() {
        let payload = request_payload(&sample_request());
        assert_eq!(payload.contents.len(), 3);
        assert_eq!(payload.contents[0].role.as_deref(), Some("user"));
        assert_eq!(payload.contents[1].role.as_deref(), Some("model"));
        assert_eq!(payload.contents[2].role.as_deref(), Some("user"));
        assert_eq!(payload.contents[2].parts[0].text, "Thanks!");
    }

    #[test]
    fn payload_serializes_the_camel_case_instruction_field() {
        let encoded = serde_json::to_value(request_payload(&sample_request()))
            .unwrap_or_else(|error| panic!("{error}"));
        assert!(encoded.get("systemInstruction").is_some());
        assert!(encoded.get("contents").is_some());
    }

    #[test]
    fn reply_text_reads_the_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "You're "}, {"text": "welcome!"}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(reply_text(body).as_deref(), Ok("You're welcome!"));
    }

    #[test]
    fn reply_without_candidates_is_an_error() {
        assert!(reply_text(r#"{"candidates": []}"#).is_err());
        assert!(reply_text("{}").is_err());
    }

    #[test]
    fn malformed_reply_body_is_an_error() {
        assert!(reply_text("not json").is_err());
    }
}
