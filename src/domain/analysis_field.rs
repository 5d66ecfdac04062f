/// Visual treatment of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    Info,
    Plain,
    Success,
}

impl SectionStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "section-info",
            Self::Plain => "section-plain",
            Self::Success => "section-success",
        }
    }
}

/// The six topics extracted from an article, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisField {
    CoreSummary,
    What,
    Why,
    Todo,
    How,
    Result,
}

impl AnalysisField {
    pub const ALL: [AnalysisField; 6] = [
        Self::CoreSummary,
        Self::What,
        Self::Why,
        Self::Todo,
        Self::How,
        Self::Result,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CoreSummary => "core_summary",
            Self::What => "what",
            Self::Why => "why",
            Self::Todo => "todo",
            Self::How => "how",
            Self::Result => "result",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::CoreSummary => "💡 核心要义",
            Self::What => "🟦 是什么 (What)",
            Self::Why => "🟨 为什么 (Why)",
            Self::Todo => "🟧 做什么 (Task)",
            Self::How => "🟩 怎么做 (How)",
            Self::Result => "🟪 做成怎么样 (Outcome)",
        }
    }

    pub fn style(&self) -> SectionStyle {
        match self {
            Self::CoreSummary => SectionStyle::Info,
            Self::How => SectionStyle::Success,
            _ => SectionStyle::Plain,
        }
    }
}
