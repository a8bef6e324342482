// Medlint
// Copyright (C) 2026 Medlint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Rendering of a diagnostic batch for host consumption

use crate::diagnostics::Diagnostic;
use std::fmt::Write;
use thiserror::Error;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Error during report formatting
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize diagnostics: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Trait for rendering a batch of diagnostics
pub trait ReportFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError>;
    fn supported_formats(&self) -> &[ReportFormat];
}

/// One human-readable line per diagnostic
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError> {
        let mut output = String::new();
        for diagnostic in diagnostics {
            writeln!(output, "{diagnostic}")?;
        }
        Ok(output)
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Text]
    }
}

/// Machine-readable JSON array of diagnostics
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(diagnostics)?)
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Json]
    }
}

/// Render diagnostics in the requested format
pub fn render(diagnostics: &[Diagnostic], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => TextFormatter.format(diagnostics),
        ReportFormat::Json => JsonFormatter.format(diagnostics),
    }
}
