//! Concierge bridge: turns a chat transcript plus a new message into a
//! displayable reply via an external generative-language service.
//!
//! Every failure path degrades to a fixed apology string; callers never
//! see an error.

pub mod chat;
pub mod credentials;
pub mod prompt;
pub mod transport;

use aura_catalog::Catalog;

pub use chat::ChatRequest;
pub use chat::ChatRole;
pub use chat::ChatTurn;
pub use credentials::install_runtime_api_key;
pub use transport::ChatTransport;
pub use transport::GeminiTransport;

/// Reply used when no credential source yields an API key.
pub const MISSING_KEY_APOLOGY: &str =
    "I'm sorry, I cannot connect to the concierge right now. (Missing API Key)";

/// Reply used when the service call fails for any reason.
pub const UNREACHABLE_APOLOGY: &str =
    "I apologize, but I seem to be having trouble reaching our archives at the moment.";

/// The storefront's chat assistant.
#[derive(Debug)]
pub struct Concierge<T: ChatTransport> {
    catalog: Catalog,
    transport: T,
}

impl<T: ChatTransport> Concierge<T> {
    pub fn new(catalog: Catalog, transport: T) -> Self {
        Self { catalog, transport }
    }

    /// Produces a reply for `new_message` given the prior transcript.
    ///
    /// Always returns displayable text: a missing credential skips the
    /// transport entirely and a transport failure is logged and
    /// converted to the fixed apology.
    pub fn send_message(&self, transcript: &[ChatTurn], new_message: &str) -> String {
        self.send_with_credential(credentials::resolve_api_key(), transcript, new_message)
    }

    fn send_with_credential(
        &self,
        credential: Option<String>,
        transcript: &[ChatTurn],
        new_message: &str,
    ) -> String {
        let Some(api_key) = credential else {
            log::warn!("concierge credential missing; set AURA_GEMINI_API_KEY");
            return MISSING_KEY_APOLOGY.to_owned();
        };

        let request = ChatRequest {
            system_instruction: prompt::system_instruction(&self.catalog),
            transcript: transcript.to_vec(),
            message: new_message.to_owned(),
        };

        match self.transport.generate(&api_key, &request) {
            Ok(reply) => reply,
            Err(error) => {
                log::warn!("concierge request failed: {error}");
                UNREACHABLE_APOLOGY.to_owned()
            }
        }
    }
}
