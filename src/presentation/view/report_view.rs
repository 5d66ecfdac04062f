use base64::{Engine as _, engine::general_purpose};

use crate::application::services::PipelineError;
use crate::domain::{AnalysisResult, REPORT_FILENAME, SectionStyle};

pub const INPUT_MISSING_MESSAGE: &str = "请先输入文章内容！";
pub const BUSY_MESSAGE: &str = "已有分析正在进行，请稍后再试。";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub heading: &'static str,
    pub style: SectionStyle,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub filename: &'static str,
    pub mime: &'static str,
    pub json: String,
}

impl DownloadLink {
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.mime,
            general_purpose::STANDARD.encode(self.json.as_bytes())
        )
    }
}

/// What the page shows for one finished trigger. Built only from the
/// outcome value, so a failed trigger can never render partial sections.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    Report {
        sections: Vec<SectionView>,
        download: DownloadLink,
    },
    Warning(String),
    Error(String),
}

impl ReportView {
    pub fn from_outcome(outcome: &Result<AnalysisResult, PipelineError>) -> Self {
        match outcome {
            Ok(result) => Self::from_result(result),
            Err(PipelineError::InputMissing) => Self::Warning(INPUT_MISSING_MESSAGE.to_string()),
            Err(PipelineError::Busy) => Self::Warning(BUSY_MESSAGE.to_string()),
            Err(PipelineError::InvalidForm(message)) => {
                Self::Error(format!("表单读取失败: {message}"))
            }
            Err(PipelineError::DocumentFormat(message)) => {
                Self::Error(format!("文档读取失败: {message}"))
            }
            Err(PipelineError::Analysis(message)) => Self::Error(format!("分析出错: {message}")),
        }
    }

    fn from_result(result: &AnalysisResult) -> Self {
        let json = match result.to_report_json() {
            Ok(json) => json,
            Err(e) => return Self::Error(format!("报告序列化失败: {e}")),
        };

        let sections = result
            .sections()
            .map(|(field, body)| SectionView {
                heading: field.heading(),
                style: field.style(),
                body: body.to_string(),
            })
            .collect();

        Self::Report {
            sections,
            download: DownloadLink {
                filename: REPORT_FILENAME,
                mime: "application/json",
                json,
            },
        }
    }
}
