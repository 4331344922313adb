//! Display strings keyed by language. Kept out of the scoring and
//! generation logic, which only ever see `IndicatorId` and `ValuationStatus`.

use crate::domain::sentiment::{IndicatorId, Language, ValuationStatus};
use serde::Serialize;
use strum::EnumIter;

/// UI strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TextKey {
    AppTitle,
    AppTitleSuffix,
    LastUpdated,
    DataInfo,
    RiskScoreTitle,
    RiskScoreDesc,
    KeyIndicators,
    AiTitle,
    AnalyzeBtn,
    AnalyzingBtn,
    RefreshBtn,
    ClickToAnalyze,
    ApiMissing,
    ApiMissingText,
    ServiceError,
    ServiceErrorText,
    YearsAgo,
    Today,
    DisclaimerTitle,
    DisclaimerText,
    /// Label of the toggle button, i.e. the name of the *other* language
    SwitchLanguage,
}

pub fn text(lang: Language, key: TextKey) -> &'static str {
    match lang {
        Language::En => english(key),
        Language::Zh => chinese(key),
    }
}

fn english(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "Bubble",
        AppTitleSuffix => "Watch",
        LastUpdated => "Last updated",
        DataInfo => "Simulated data for illustration",
        RiskScoreTitle => "Bubble Risk Score",
        RiskScoreDesc => "Aggregated from 8 valuation and sentiment indicators",
        KeyIndicators => "Key Indicators",
        AiTitle => "AI Market Analysis",
        AnalyzeBtn => "Analyze",
        AnalyzingBtn => "Analyzing...",
        RefreshBtn => "Refresh",
        ClickToAnalyze => "Click \"Analyze\" to generate an AI assessment of the current market.",
        ApiMissing => "API Key Missing",
        ApiMissingText => {
            "No API key is configured, so the AI analysis is unavailable. Set GEMINI_API_KEY at build time to enable it."
        }
        ServiceError => "Analysis Unavailable",
        ServiceErrorText => {
            "The analysis service could not be reached or returned no content. Please try again later."
        }
        YearsAgo => "20 years ago",
        Today => "Today",
        DisclaimerTitle => "Disclaimer:",
        DisclaimerText => {
            "This dashboard is for educational purposes only and does not constitute financial advice. Indicator histories are simulated."
        }
        SwitchLanguage => "中文",
    }
}

fn chinese(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "泡沫",
        AppTitleSuffix => "观察",
        LastUpdated => "最后更新",
        DataInfo => "模拟数据，仅供演示",
        RiskScoreTitle => "泡沫风险评分",
        RiskScoreDesc => "综合 8 项估值与情绪指标得出",
        KeyIndicators => "关键指标",
        AiTitle => "AI 市场分析",
        AnalyzeBtn => "开始分析",
        AnalyzingBtn => "分析中...",
        RefreshBtn => "重新分析",
        ClickToAnalyze => "点击“开始分析”，生成对当前市场的 AI 评估。",
        ApiMissing => "缺少 API 密钥",
        ApiMissingText => "未配置 API 密钥，AI 分析不可用。请在构建时设置 GEMINI_API_KEY。",
        ServiceError => "分析暂不可用",
        ServiceErrorText => "无法连接分析服务或服务未返回内容，请稍后重试。",
        YearsAgo => "20 年前",
        Today => "今天",
        DisclaimerTitle => "免责声明：",
        DisclaimerText => "本看板仅用于教育目的，不构成任何投资建议。指标历史数据为模拟生成。",
        SwitchLanguage => "English",
    }
}

pub fn status_label(lang: Language, status: ValuationStatus) -> &'static str {
    match (lang, status) {
        (Language::En, ValuationStatus::Undervalued) => "Undervalued",
        (Language::En, ValuationStatus::Fair) => "Fair",
        (Language::En, ValuationStatus::Overvalued) => "Overvalued",
        (Language::En, ValuationStatus::ExtremeBubble) => "Extreme Bubble",
        (Language::Zh, ValuationStatus::Undervalued) => "低估",
        (Language::Zh, ValuationStatus::Fair) => "合理",
        (Language::Zh, ValuationStatus::Overvalued) => "高估",
        (Language::Zh, ValuationStatus::ExtremeBubble) => "极度泡沫",
    }
}

/// Localized name, description and benchmark label of an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorText {
    pub name: &'static str,
    pub description: &'static str,
    pub benchmark_label: &'static str,
}

const fn entry(
    name: &'static str,
    description: &'static str,
    benchmark_label: &'static str,
) -> IndicatorText {
    IndicatorText { name, description, benchmark_label }
}

pub fn indicator_text(lang: Language, id: IndicatorId) -> IndicatorText {
    use IndicatorId::*;
    match lang {
        Language::En => match id {
            Buffett => entry(
                "Buffett Indicator",
                "Ratio of Total US Stock Market Capitalization to US GDP.",
                "Dotcom Peak (2000)",
            ),
            Shiller => entry(
                "Shiller P/E Ratio",
                "Price-to-Earnings ratio based on average inflation-adjusted earnings from the previous 10 years.",
                "Dotcom Peak (2000)",
            ),
            Yield => entry(
                "S&P 500 Dividend Yield",
                "The dividend return on investment for the S&P 500.",
                "Dotcom Low (2000)",
            ),
            Margin => entry(
                "Margin Debt Growth",
                "Year-over-year growth in margin debt.",
                "Danger Zone (>20%)",
            ),
            FearGreed => entry(
                "Fear & Greed Index",
                "A compilation of 7 indicators measuring market sentiment.",
                "Neutral (50)",
            ),
            NdxDeviation => entry(
                "Nasdaq 100 Deviation",
                "Percentage deviation from 200-day moving average.",
                "Dotcom Peak Deviation",
            ),
            PutCall => entry(
                "Put/Call Ratio",
                "Ratio of put options to call options volume.",
                "Historical Avg",
            ),
            IpoHeat => entry(
                "IPO Market Activity",
                "Monthly count of new listings and speculative fervor.",
                "Market Cycle Peak",
            ),
        },
        Language::Zh => match id {
            Buffett => entry(
                "巴菲特指标",
                "美国股市总市值与美国 GDP 之比。",
                "互联网泡沫顶峰 (2000)",
            ),
            Shiller => entry(
                "席勒市盈率",
                "基于过去 10 年经通胀调整后平均盈利计算的市盈率。",
                "互联网泡沫顶峰 (2000)",
            ),
            Yield => entry(
                "标普 500 股息率",
                "标普 500 指数的股息回报率。",
                "互联网泡沫低点 (2000)",
            ),
            Margin => entry(
                "融资余额增速",
                "融资融券余额的同比增长率。",
                "危险区间 (>20%)",
            ),
            FearGreed => entry(
                "恐惧与贪婪指数",
                "由 7 项市场情绪指标综合而成。",
                "中性 (50)",
            ),
            NdxDeviation => entry(
                "纳斯达克 100 偏离度",
                "相对 200 日均线的百分比偏离。",
                "互联网泡沫顶峰偏离",
            ),
            PutCall => entry(
                "看跌/看涨期权比率",
                "看跌期权与看涨期权成交量之比。",
                "历史均值",
            ),
            IpoHeat => entry(
                "IPO 市场热度",
                "每月新上市数量及投机热度。",
                "市场周期顶峰",
            ),
        },
    }
}

/// Markdown fallback for a missing API key
pub fn configuration_missing_message(lang: Language) -> String {
    format!(
        "## {}\n\n{}",
        text(lang, TextKey::ApiMissing),
        text(lang, TextKey::ApiMissingText)
    )
}

/// Markdown fallback for any service failure
pub fn service_failure_message(lang: Language) -> String {
    format!(
        "## {}\n\n{}",
        text(lang, TextKey::ServiceError),
        text(lang, TextKey::ServiceErrorText)
    )
}
