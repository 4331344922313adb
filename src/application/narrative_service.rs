use crate::{
    domain::{
        errors::NarrativeError,
        logging::{LogComponent, get_logger},
        narrative::{IndicatorSummary, NarrativeGenerator, NarrativePrompt, NarrativeState},
        sentiment::{Language, RiskScore},
    },
    i18n::{configuration_missing_message, service_failure_message},
};

/// Result of one narrative request, already recovered from failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeOutcome {
    Generated(String),
    Fallback { reason: NarrativeError, text: String },
}

impl NarrativeOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Fallback { text, .. } => text,
        }
    }

    /// Complete a pending state. Returns `false` for stale completions.
    pub fn apply(self, state: &mut NarrativeState) -> bool {
        match self {
            Self::Generated(text) => state.resolve(text),
            Self::Fallback { text, .. } => state.fail(text),
        }
    }
}

/// Localized fallback text for a failure kind
pub fn fallback_text(error: &NarrativeError, lang: Language) -> String {
    match error {
        NarrativeError::ConfigurationMissing => configuration_missing_message(lang),
        NarrativeError::ServiceFailure(_) | NarrativeError::AlreadyPending => {
            service_failure_message(lang)
        }
    }
}

/// Use case: ask the text generator for a market narrative and never let
/// a failure escape.
pub struct MarketNarrativeService<G: NarrativeGenerator> {
    generator: G,
}

impl<G: NarrativeGenerator> MarketNarrativeService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn analyze(
        &self,
        summaries: &[IndicatorSummary],
        score: RiskScore,
        lang: Language,
    ) -> NarrativeOutcome {
        let prompt = NarrativePrompt::build(summaries, score, lang);

        get_logger().info(
            LogComponent::Application("NarrativeService"),
            &format!("🧠 Requesting narrative ({} indicators, score {}, lang {})", summaries.len(), score, lang),
        );

        match self.generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                get_logger().info(
                    LogComponent::Application("NarrativeService"),
                    &format!("✅ Narrative received ({} chars)", text.chars().count()),
                );
                NarrativeOutcome::Generated(text)
            }
            Ok(_) => Self::fallback(NarrativeError::ServiceFailure("empty response".to_string()), lang),
            Err(reason) => Self::fallback(reason, lang),
        }
    }

    fn fallback(reason: NarrativeError, lang: Language) -> NarrativeOutcome {
        match &reason {
            NarrativeError::ConfigurationMissing => get_logger().warn(
                LogComponent::Application("NarrativeService"),
                "🔑 No API key configured, showing fallback",
            ),
            other => get_logger().error(
                LogComponent::Application("NarrativeService"),
                &format!("❌ Narrative failed: {}", other),
            ),
        }
        let text = fallback_text(&reason, lang);
        NarrativeOutcome::Fallback { reason, text }
    }
}
