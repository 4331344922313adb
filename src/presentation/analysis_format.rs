/// A run of narrative text, optionally bold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
}

impl TextSpan {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), bold: false }
    }

    fn bold(text: &str) -> Self {
        Self { text: text.to_string(), bold: true }
    }
}

/// One rendered line of the analysis panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisBlock {
    Heading(String),
    Subheading(String),
    Bullet(Vec<TextSpan>),
    Spacer,
    Paragraph(Vec<TextSpan>),
}

/// Line-oriented rendering of the small Markdown subset the narrative uses
pub fn parse_analysis(text: &str) -> Vec<AnalysisBlock> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> AnalysisBlock {
    if let Some(rest) = line.strip_prefix("## ") {
        AnalysisBlock::Heading(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("### ") {
        AnalysisBlock::Subheading(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("- ") {
        AnalysisBlock::Bullet(parse_spans(rest))
    } else if line.trim().is_empty() {
        AnalysisBlock::Spacer
    } else {
        AnalysisBlock::Paragraph(parse_spans(line))
    }
}

/// Split on `**bold**` pairs; an unmatched `**` stays literal
pub fn parse_spans(line: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(TextSpan::plain(&rest[..open]));
        }
        spans.push(TextSpan::bold(&after_open[..close]));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(TextSpan::plain(rest));
    }
    spans
}
