use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::analysis_field::AnalysisField;

/// Placeholder the model is instructed to use for topics the article does not cover.
pub const NOT_MENTIONED: &str = "文中未提及";

pub const REPORT_FILENAME: &str = "analysis_report.json";

/// Structured breakdown of a single article.
///
/// Every field is required when deserializing: a model answer that omits a
/// key or sets it to `null` is rejected rather than patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub core_summary: String,
    pub what: String,
    pub why: String,
    pub todo: String,
    pub how: String,
    pub result: String,
}

impl AnalysisResult {
    pub fn get(&self, field: AnalysisField) -> &str {
        match field {
            AnalysisField::CoreSummary => &self.core_summary,
            AnalysisField::What => &self.what,
            AnalysisField::Why => &self.why,
            AnalysisField::Todo => &self.todo,
            AnalysisField::How => &self.how,
            AnalysisField::Result => &self.result,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = (AnalysisField, &str)> {
        AnalysisField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Serializes the report the way it is offered for download: four-space
    /// indentation with non-ASCII text written literally.
    pub fn to_report_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
