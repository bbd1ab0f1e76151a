use crate::utils::error::{ExerciseError, Result};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub key: String,
    pub value: String,
    /// 文字模式下整行輸出的內容
    #[serde(skip)]
    pub text: String,
}

impl ReportLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<ReportLine>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: ReportLine) {
        self.lines.push(line);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl From<Section> for Report {
    fn from(section: Section) -> Self {
        Self {
            sections: vec![section],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ExerciseError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

/// `[a, b, c]`
pub fn format_inline<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

pub fn render_text(report: &Report) -> String {
    let rule = "=".repeat(10);
    let mut out = String::new();

    for section in &report.sections {
        out.push_str(&format!("\n{} {} {}\n", rule, section.title, rule));
        for line in &section.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
    }

    out
}

pub fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["section", "key", "value"])?;

    for section in &report.sections {
        for line in &section.lines {
            writer.write_record([
                section.title.as_str(),
                line.key.as_str(),
                line.value.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExerciseError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
