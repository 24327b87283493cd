//! API credential resolution for the concierge.
//!
//! Sources are checked in a fixed priority order and the first
//! non-empty value wins: the dedicated variable, the generic API-key
//! variable, the alternate name, then a process-global override for
//! embedding contexts that cannot expose environment variables.

use std::sync::OnceLock;

const DEDICATED_KEY_VAR: &str = "AURA_GEMINI_API_KEY";
const GENERIC_KEY_VAR: &str = "API_KEY";
const ALTERNATE_KEY_VAR: &str = "GEMINI_API_KEY";

static RUNTIME_KEY: OnceLock<String> = OnceLock::new();

/// Installs a process-global key for hosts that inject credentials at
/// runtime instead of through the environment. The first call wins.
pub fn install_runtime_api_key(key: impl Into<String>) {
    let _ = RUNTIME_KEY.set(key.into());
}

/// Resolves the concierge credential, or `None` when no source has one.
pub fn resolve_api_key() -> Option<String> {
    first_non_empty([
        std::env::var(DEDICATED_KEY_VAR).ok(),
        std::env::var(GENERIC_KEY_VAR).ok(),
        std::env::var(ALTERNATE_KEY_VAR).ok(),
        RUNTIME_KEY.get().cloned(),
    ])
}

fn first_non_empty(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
}
