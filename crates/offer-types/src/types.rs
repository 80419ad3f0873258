//! Export format and mode selections shared across the workspace

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Document format for an export
///
/// `Excel` and `Pdf` are wire formats understood by the generation backend.
/// `Report` is the plain-text protocol and can only be rendered locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Excel,
    Pdf,
    Report,
}

impl ExportFormat {
    /// File extension for the written artifact
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Report => "txt",
        }
    }

    /// Name used in the `format` field of the generation request.
    ///
    /// Returns None for formats the backend does not accept.
    pub fn wire_name(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Excel => Some("excel"),
            ExportFormat::Pdf => Some("pdf"),
            ExportFormat::Report => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Report => write!(f, "report"),
        }
    }
}

/// Where an export is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Render the document in-process and write it to disk
    #[default]
    Local,
    /// POST the payload to the generation backend and save the response
    Remote,
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportMode::Local => write!(f, "local"),
            ExportMode::Remote => write!(f, "remote"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matches_format() {
        assert_eq!(ExportFormat::Excel.extension(), "xlsx");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Report.extension(), "txt");
    }

    #[test]
    fn report_has_no_wire_name() {
        assert_eq!(ExportFormat::Excel.wire_name(), Some("excel"));
        assert_eq!(ExportFormat::Pdf.wire_name(), Some("pdf"));
        assert_eq!(ExportFormat::Report.wire_name(), None);
    }
}
