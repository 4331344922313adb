//! Natural-language market narrative: prompt, request lifecycle and the
//! port to the external text generator.

pub mod prompt;
pub mod state;

pub use prompt::*;
pub use state::NarrativeState;

use crate::domain::errors::NarrativeResult;

/// Interface to the external text-generation service.
///
/// Implementations perform one request/response exchange: no retries, no
/// streaming. Missing credentials map to `ConfigurationMissing`, everything
/// else (transport, status, decoding, empty text) to `ServiceFailure`.
#[allow(async_fn_in_trait)]
pub trait NarrativeGenerator {
    async fn generate(&self, prompt: &NarrativePrompt) -> NarrativeResult<String>;
}
