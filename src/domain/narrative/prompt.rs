use crate::domain::sentiment::{Language, RiskScore, ValuationStatus};
use serde::Serialize;

/// Persona and output rules sent alongside every prompt
pub const SYSTEM_INSTRUCTION: &str = "\
You are a senior financial analyst and historian. Your job is to analyze current stock market indicators provided to you and determine if the market is in a bubble.
You must remain objective, citing historical precedents (like 2000 Dotcom or 2008 GFC) where relevant.
Structure your response in Markdown.
Keep your analysis concise (max 200 words) but insightful.
Provide a clear \"Verdict\" at the end.";

/// Sampling temperature requested from the text service
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// One line of the plain-text dashboard summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSummary {
    /// Localized display name
    pub name: String,
    pub current_value: f64,
    pub unit: String,
    pub status: ValuationStatus,
}

impl IndicatorSummary {
    /// `- Name: 195.4% (Status: Extreme Bubble)`
    pub fn line(&self) -> String {
        format!(
            "- {}: {}{} (Status: {})",
            self.name, self.current_value, self.unit, self.status
        )
    }
}

/// Everything handed to the external text generator for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativePrompt {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f64,
    pub language: Language,
}

impl NarrativePrompt {
    pub fn build(summaries: &[IndicatorSummary], score: RiskScore, language: Language) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: Self::render(summaries, score, language),
            temperature: DEFAULT_TEMPERATURE,
            language,
        }
    }

    /// Aggregated indicator summary, overall score and target language
    pub fn render(summaries: &[IndicatorSummary], score: RiskScore, language: Language) -> String {
        let data_summary = summaries
            .iter()
            .map(IndicatorSummary::line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Here is the live dashboard data for the US Stock Market:\n\
             \n\
             Overall Bubble Risk Score: {score}/100\n\
             \n\
             Key Indicators:\n\
             {data_summary}\n\
             \n\
             Based on these metrics, write a short analysis for a retail investor.\n\
             1. Are we in a bubble?\n\
             2. Which indicator is most concerning?\n\
             3. What is the historical context?\n\
             \n\
             IMPORTANT: Write your response in {}.",
            language.prompt_name()
        )
    }
}
