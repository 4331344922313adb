use leptos::*;

use crate::{
    application::{DashboardService, MarketNarrativeService},
    domain::{
        logging::LogComponent,
        narrative::NarrativeState,
        sentiment::{Indicator, Language, RiskScore},
    },
    global_state::{language_signal, narrative_signal},
    i18n::{TextKey, indicator_text, status_label, text},
    infrastructure::{BrowserTimeProvider, GeminiHttpClient},
    log_error, log_info, log_warn,
    presentation::{
        analysis_format::{AnalysisBlock, TextSpan, parse_analysis},
        bootstrap_dashboard,
        gauge::{GaugeReading, arc_path, needle_tip, status_badge_color},
        sparkline::SparklineGeometry,
    },
    time_utils::{format_last_updated, local_datetime},
    tr,
};

const SPARKLINE_WIDTH: f64 = 300.0;
const SPARKLINE_HEIGHT: f64 = 96.0;

const GAUGE_CX: f64 = 100.0;
const GAUGE_CY: f64 = 100.0;

const STYLES: &str = r#"
.dashboard-app {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #020617;
    min-height: 100vh;
    color: #e2e8f0;
}
.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 32px;
    border-bottom: 1px solid #1e293b;
    background: rgba(15, 23, 42, 0.8);
}
.brand {
    display: flex;
    align-items: center;
    gap: 12px;
}
.logo {
    width: 36px;
    height: 36px;
    border-radius: 8px;
    background: linear-gradient(135deg, #3b82f6, #6366f1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: bold;
}
.brand h1 {
    font-size: 20px;
    margin: 0;
}
.accent {
    color: #60a5fa;
}
.header-meta {
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: 12px;
    color: #94a3b8;
}
.lang-btn, .analyze-btn {
    background: #1e293b;
    color: #e2e8f0;
    border: 1px solid #334155;
    padding: 6px 12px;
    border-radius: 6px;
    cursor: pointer;
}
.analyze-btn {
    background: #2563eb;
    border-color: #2563eb;
}
.analyze-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 32px;
}
.top-grid {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 24px;
    margin-bottom: 32px;
}
.card, .metric-card {
    background: #0f172a;
    border: 1px solid #1e293b;
    border-radius: 12px;
    padding: 20px;
}
.card h2 {
    font-size: 16px;
    margin: 0 0 12px 0;
}
.gauge {
    text-align: center;
}
.gauge-score {
    font-size: 40px;
    font-weight: bold;
    margin-top: -36px;
}
.gauge-label {
    font-weight: 600;
}
.hint, .metric-desc, .placeholder {
    font-size: 12px;
    color: #64748b;
}
.analysis-head {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.analysis-body {
    font-size: 14px;
    line-height: 1.6;
}
.analysis-body h3 {
    color: #60a5fa;
}
.analysis-body strong {
    color: #f8fafc;
}
.skeleton-line {
    height: 12px;
    background: #1e293b;
    border-radius: 4px;
    margin: 10px 0;
    animation: pulse 1.5s infinite;
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}
.metrics-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 16px;
}
.metric-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
}
.metric-head h3 {
    font-size: 14px;
    margin: 0;
}
.status-badge {
    font-size: 11px;
    font-weight: 600;
    border: 1px solid currentColor;
    border-radius: 999px;
    padding: 2px 8px;
    white-space: nowrap;
}
.metric-value {
    margin: 12px 0 4px 0;
}
.metric-value .value {
    font-size: 28px;
    font-weight: bold;
}
.metric-value .unit {
    margin-left: 4px;
    color: #94a3b8;
}
.benchmark-toggle {
    font-size: 11px;
    color: #94a3b8;
    display: flex;
    gap: 6px;
    align-items: center;
    cursor: pointer;
}
.sparkline {
    width: 100%;
    height: 96px;
    margin-top: 8px;
}
.metric-foot {
    display: flex;
    justify-content: space-between;
    font-size: 10px;
    color: #475569;
}
.footer {
    margin-top: 40px;
    padding: 16px;
    font-size: 11px;
    color: #64748b;
    border-top: 1px solid #1e293b;
}
"#;

/// 📈 Bubble risk dashboard root
#[component]
pub fn App() -> impl IntoView {
    let dashboard = match bootstrap_dashboard() {
        Ok(dashboard) => dashboard,
        Err(e) => {
            log_error!(LogComponent::Presentation("App"), "❌ Snapshot generation failed: {}", e);
            return view! { <div class="dashboard-app">{e.to_string()}</div> }.into_view();
        }
    };

    let language = language_signal();
    let narrative = narrative_signal();

    // A narrative belongs to the language it was requested in
    create_effect(move |previous: Option<Language>| {
        let current = language.get();
        if previous.is_some_and(|p| p != current) {
            narrative.update(NarrativeState::reset);
        }
        current
    });

    let generated_at = dashboard.snapshot().generated_at();
    let score = dashboard.score();
    let indicators: Vec<Indicator> = dashboard.snapshot().indicators().to_vec();
    let dashboard = store_value(dashboard);

    view! {
        <style>{STYLES}</style>
        <div class="dashboard-app">
            <Header generated_at=generated_at />
            <main>
                <div class="top-grid">
                    <div class="card">
                        <h2>{tr!(language, TextKey::RiskScoreTitle)}</h2>
                        <Gauge score=score />
                        <p class="hint">{tr!(language, TextKey::RiskScoreDesc)}</p>
                    </div>
                    <AnalysisPanel dashboard=dashboard />
                </div>
                <h2>{tr!(language, TextKey::KeyIndicators)}</h2>
                <div class="metrics-grid">
                    {indicators
                        .into_iter()
                        .map(|indicator| view! { <MetricCard indicator=indicator /> })
                        .collect_view()}
                </div>
                <Footer />
            </main>
        </div>
    }
    .into_view()
}

/// 🏷️ Title, last-updated stamp and language toggle
#[component]
fn Header(generated_at: u64) -> impl IntoView {
    let language = language_signal();
    let offset = BrowserTimeProvider::new().timezone_offset_minutes();
    let last_updated = move || {
        local_datetime(generated_at, offset)
            .map(|t| format_last_updated(t, language.get()))
            .unwrap_or_default()
    };

    let toggle = move |_| {
        language.update(|l| *l = l.toggled());
        log_info!(
            LogComponent::Presentation("Header"),
            "🌐 Language switched to {}",
            language.get_untracked()
        );
    };

    view! {
        <header class="header">
            <div class="brand">
                <div class="logo">"B"</div>
                <h1>
                    {tr!(language, TextKey::AppTitle)}
                    <span class="accent">{tr!(language, TextKey::AppTitleSuffix)}</span>
                </h1>
            </div>
            <div class="header-meta">
                <span>
                    {move || format!("{}: {}", text(language.get(), TextKey::LastUpdated), last_updated())}
                </span>
                <span>{tr!(language, TextKey::DataInfo)}</span>
                <button class="lang-btn" on:click=toggle>
                    {tr!(language, TextKey::SwitchLanguage)}
                </button>
            </div>
        </header>
    }
}

/// 🎯 Semicircle gauge with needle
#[component]
fn Gauge(score: RiskScore) -> impl IntoView {
    let language = language_signal();
    let reading = GaugeReading::new(score);
    let track = arc_path(GAUGE_CX, GAUGE_CY, 90.0, 60.0, 0.0);
    let fill = arc_path(GAUGE_CX, GAUGE_CY, 90.0, 60.0, reading.needle_angle);
    let (tip_x, tip_y) = needle_tip(GAUGE_CX, GAUGE_CY, 80.0, reading.needle_angle);
    let band = reading.band;
    let color = reading.color;

    view! {
        <div class="gauge">
            <svg viewBox="0 0 200 110" width="100%">
                <path d=track fill="#1e293b" />
                <path d=fill fill=color />
                <line
                    x1=GAUGE_CX.to_string()
                    y1=GAUGE_CY.to_string()
                    x2=format!("{tip_x:.2}")
                    y2=format!("{tip_y:.2}")
                    stroke="#e2e8f0"
                    stroke-width="3"
                    stroke-linecap="round"
                />
                <circle cx=GAUGE_CX.to_string() cy=GAUGE_CY.to_string() r="6" fill="#e2e8f0" />
            </svg>
            <div class="gauge-score">{reading.score}</div>
            <div class="gauge-label" style=format!("color: {color}")>
                {move || status_label(language.get(), band)}
            </div>
        </div>
    }
}

fn render_spans(spans: Vec<TextSpan>) -> View {
    spans
        .into_iter()
        .map(|span| {
            if span.bold {
                view! { <strong>{span.text}</strong> }.into_view()
            } else {
                span.text.into_view()
            }
        })
        .collect_view()
}

fn render_analysis(analysis: &str) -> View {
    parse_analysis(analysis)
        .into_iter()
        .map(|block| match block {
            AnalysisBlock::Heading(title) => view! { <h3>{title}</h3> }.into_view(),
            AnalysisBlock::Subheading(title) => view! { <h4>{title}</h4> }.into_view(),
            AnalysisBlock::Bullet(spans) => view! { <li>{render_spans(spans)}</li> }.into_view(),
            AnalysisBlock::Spacer => view! { <div style="height: 8px"></div> }.into_view(),
            AnalysisBlock::Paragraph(spans) => view! { <p>{render_spans(spans)}</p> }.into_view(),
        })
        .collect_view()
}

/// 🤖 Narrative panel: one request at a time, fallbacks rendered like any
/// other analysis text
#[component]
fn AnalysisPanel(dashboard: StoredValue<DashboardService>) -> impl IntoView {
    let language = language_signal();
    let narrative = narrative_signal();

    let on_analyze = move |_| {
        let mut started = Ok(());
        narrative.update(|state| started = state.begin());
        if let Err(e) = started {
            log_warn!(LogComponent::Presentation("AnalysisPanel"), "⏳ {}", e);
            return;
        }

        let lang = language.get_untracked();
        let (summaries, score) = dashboard.with_value(|d| (d.summaries(lang), d.score()));
        spawn_local(async move {
            let service = MarketNarrativeService::new(GeminiHttpClient::from_build_env());
            let outcome = service.analyze(&summaries, score, lang).await;
            narrative.update(|state| {
                if !outcome.apply(state) {
                    log_warn!(
                        LogComponent::Presentation("AnalysisPanel"),
                        "🗑️ Dropped stale narrative result"
                    );
                }
            });
        });
    };

    let button_label = move || {
        let lang = language.get();
        narrative.with(|state| {
            if state.is_pending() {
                text(lang, TextKey::AnalyzingBtn)
            } else if state.has_result() {
                text(lang, TextKey::RefreshBtn)
            } else {
                text(lang, TextKey::AnalyzeBtn)
            }
        })
    };

    let body = move || {
        narrative.with(|state| match state {
            NarrativeState::Idle => {
                view! { <p class="placeholder">{text(language.get(), TextKey::ClickToAnalyze)}</p> }
                    .into_view()
            }
            NarrativeState::Pending => view! {
                <div>
                    <div class="skeleton-line" style="width: 75%"></div>
                    <div class="skeleton-line" style="width: 100%"></div>
                    <div class="skeleton-line" style="width: 85%"></div>
                </div>
            }
            .into_view(),
            NarrativeState::Resolved(analysis) | NarrativeState::Failed(analysis) => {
                render_analysis(analysis)
            }
        })
    };

    view! {
        <div class="card">
            <div class="analysis-head">
                <h2>{tr!(language, TextKey::AiTitle)}</h2>
                <button
                    class="analyze-btn"
                    disabled=move || narrative.with(NarrativeState::is_pending)
                    on:click=on_analyze
                >
                    {button_label}
                </button>
            </div>
            <div class="analysis-body">{body}</div>
        </div>
    }
}

/// 📊 One indicator: status badge, current value, 20-year sparkline
#[component]
fn MetricCard(indicator: Indicator) -> impl IntoView {
    let language = language_signal();
    let show_benchmark = create_rw_signal(true);

    let id = indicator.id();
    let status = indicator.status();
    let unit = indicator.unit();
    let current = indicator.current_value();
    let benchmark_value = indicator.benchmark().value;
    let geometry = SparklineGeometry::new(
        indicator.history(),
        Some(benchmark_value),
        SPARKLINE_WIDTH,
        SPARKLINE_HEIGHT,
    );
    let benchmark_y = geometry.benchmark_y;
    let gradient_id = format!("fill-{id}");
    let gradient_fill = format!("url(#{gradient_id})");
    let localized = move || indicator_text(language.get(), id);

    let benchmark_line = move || match (show_benchmark.get(), benchmark_y) {
        (true, Some(y)) => view! {
            <line
                x1="0"
                x2=SPARKLINE_WIDTH.to_string()
                y1=format!("{y:.2}")
                y2=format!("{y:.2}")
                stroke="#ef4444"
                stroke-dasharray="3 3"
                stroke-opacity="0.7"
            />
        }
        .into_view(),
        _ => ().into_view(),
    };

    view! {
        <div class="metric-card">
            <div class="metric-head">
                <div>
                    <h3>{move || localized().name}</h3>
                    <p class="metric-desc">{move || localized().description}</p>
                </div>
                <span class="status-badge" style=format!("color: {}", status_badge_color(status))>
                    {move || status_label(language.get(), status)}
                </span>
            </div>
            <div class="metric-value">
                <span class="value">{current}</span>
                <span class="unit">{unit}</span>
            </div>
            <label class="benchmark-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || show_benchmark.get()
                    on:change=move |_| show_benchmark.update(|shown| *shown = !*shown)
                />
                <span>
                    {move || format!("{}: {}{}", localized().benchmark_label, benchmark_value, unit)}
                </span>
            </label>
            <svg
                class="sparkline"
                viewBox=format!("0 0 {SPARKLINE_WIDTH} {SPARKLINE_HEIGHT}")
                preserveAspectRatio="none"
            >
                <defs>
                    <linearGradient id=gradient_id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="#3b82f6" stop-opacity="0.3" />
                        <stop offset="95%" stop-color="#3b82f6" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path d=geometry.area_path fill=gradient_fill />
                <path d=geometry.line_path fill="none" stroke="#3b82f6" stroke-width="2" />
                {benchmark_line}
            </svg>
            <div class="metric-foot">
                <span>{tr!(language, TextKey::YearsAgo)}</span>
                <span>{tr!(language, TextKey::Today)}</span>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let language = language_signal();
    view! {
        <footer class="footer">
            <strong>{tr!(language, TextKey::DisclaimerTitle)}</strong>
            " "
            {tr!(language, TextKey::DisclaimerText)}
        </footer>
    }
}
