use bubble_risk_dashboard::i18n::configuration_missing_message;
use bubble_risk_dashboard::domain::sentiment::Language;
use bubble_risk_dashboard::presentation::analysis_format::{
    AnalysisBlock, TextSpan, parse_analysis, parse_spans,
};

fn plain(text: &str) -> TextSpan {
    TextSpan { text: text.to_string(), bold: false }
}

fn bold(text: &str) -> TextSpan {
    TextSpan { text: text.to_string(), bold: true }
}

#[test]
fn lines_map_to_blocks() {
    let blocks = parse_analysis("## Title\n### Sub\n- **Bold** rest\n\nplain **x");
    assert_eq!(
        blocks,
        vec![
            AnalysisBlock::Heading("Title".to_string()),
            AnalysisBlock::Subheading("Sub".to_string()),
            AnalysisBlock::Bullet(vec![bold("Bold"), plain(" rest")]),
            AnalysisBlock::Spacer,
            AnalysisBlock::Paragraph(vec![plain("plain **x")]),
        ]
    );
}

#[test]
fn multiple_bold_runs() {
    assert_eq!(
        parse_spans("a **b** c **d**"),
        vec![plain("a "), bold("b"), plain(" c "), bold("d")]
    );
}

#[test]
fn fallback_notice_renders_as_heading_and_paragraph() {
    let blocks = parse_analysis(&configuration_missing_message(Language::En));
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], AnalysisBlock::Heading("API Key Missing".to_string()));
    assert_eq!(blocks[1], AnalysisBlock::Spacer);
    assert!(matches!(blocks[2], AnalysisBlock::Paragraph(_)));
}
