use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{
    application::{DashboardService, LocalizedIndicator, MarketNarrativeService},
    domain::{
        errors::{AppError, AppResult},
        logging::{LogComponent, get_logger},
        narrative::NarrativeState,
        sentiment::Language,
    },
    infrastructure::GeminiHttpClient,
    presentation::bootstrap_dashboard,
};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotView<'a> {
    language: Language,
    overall_score: u8,
    generated_at: u64,
    indicators: Vec<LocalizedIndicator<'a>>,
}

/// `"en"` / `"zh"`
pub fn parse_language(lang: &str) -> AppResult<Language> {
    lang.parse::<Language>()
        .map_err(|_| AppError::UnsupportedLanguage(lang.to_string()))
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// JS bridge for pages embedding the dashboard data without the Leptos UI.
/// Only forwards to the application layer.
#[wasm_bindgen]
pub struct DashboardApi {
    dashboard: DashboardService,
    narrative: Rc<RefCell<NarrativeState>>,
}

#[wasm_bindgen]
impl DashboardApi {
    /// Generate the session snapshot
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DashboardApi, JsValue> {
        let dashboard = bootstrap_dashboard().map_err(AppError::from)?;
        Ok(Self {
            dashboard,
            narrative: Rc::new(RefCell::new(NarrativeState::Idle)),
        })
    }

    #[wasm_bindgen(js_name = overallScore)]
    pub fn overall_score(&self) -> u8 {
        self.dashboard.score().value()
    }

    /// Localized snapshot and score as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self, lang: &str) -> Result<String, JsValue> {
        let language = parse_language(lang)?;
        let view = SnapshotView {
            language,
            overall_score: self.dashboard.score().value(),
            generated_at: self.dashboard.snapshot().generated_at(),
            indicators: self.dashboard.localized(language),
        };
        serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = isAnalyzing)]
    pub fn is_analyzing(&self) -> bool {
        self.narrative.borrow().is_pending()
    }

    /// Resolves with the narrative (or its localized fallback). Rejects
    /// while another request is still pending.
    pub fn analyze(&self, lang: &str) -> Promise {
        let language = match parse_language(lang) {
            Ok(language) => language,
            Err(e) => return Promise::reject(&e.into()),
        };

        if let Err(e) = self.narrative.borrow_mut().begin() {
            let error = AppError::from(e);
            get_logger().warn(LogComponent::Presentation("DashboardApi"), &error.to_string());
            return Promise::reject(&error.into());
        }

        let summaries = self.dashboard.summaries(language);
        let score = self.dashboard.score();
        let state = Rc::clone(&self.narrative);

        future_to_promise(async move {
            let service = MarketNarrativeService::new(GeminiHttpClient::from_build_env());
            let outcome = service.analyze(&summaries, score, language).await;
            let text = outcome.text().to_string();
            outcome.apply(&mut state.borrow_mut());
            Ok(JsValue::from_str(&text))
        })
    }
}
