use super::sentiment::IndicatorId;
use derive_more::Display;

/// Root error type for the dashboard; what the JS bridge rejects with
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Narrative Error: {}", _0)]
    Narrative(NarrativeError),
    #[display(fmt = "Unsupported language: {}", _0)]
    UnsupportedLanguage(String),
}

/// Violations of the indicator model
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DomainError {
    #[display(fmt = "cannot score an empty indicator set")]
    EmptyIndicatorSet,
    #[display(fmt = "indicator {} has no history", _0)]
    EmptyHistory(IndicatorId),
}

/// Failures of the narrative request. Never shown to the user directly:
/// the application layer swaps them for localized fallback texts.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NarrativeError {
    #[display(fmt = "no API key configured")]
    ConfigurationMissing,
    #[display(fmt = "narrative service failed: {}", _0)]
    ServiceFailure(String),
    #[display(fmt = "a narrative request is already pending")]
    AlreadyPending,
}

impl std::error::Error for AppError {}
impl std::error::Error for DomainError {}
impl std::error::Error for NarrativeError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<NarrativeError> for AppError {
    fn from(error: NarrativeError) -> Self {
        AppError::Narrative(error)
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type DomainResult<T> = Result<T, DomainError>;
pub type NarrativeResult<T> = Result<T, NarrativeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err: AppError = DomainError::EmptyHistory(IndicatorId::Buffett).into();
        assert_eq!(err.to_string(), "Domain Error: indicator buffett has no history");

        let err: AppError = NarrativeError::ServiceFailure("HTTP 503".into()).into();
        assert_eq!(
            err.to_string(),
            "Narrative Error: narrative service failed: HTTP 503"
        );
    }
}
