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

//! Rule identifiers, diagnostic descriptors and the diagnostic sink

use medlint_symbols::Span;
use serde::Serialize;
use std::fmt;

/// Stable rule identifiers.
///
/// DO NOT change the identifier of existing rules. Projects customize the
/// severity level of individual rules by id in their host configuration,
/// so ids are never renumbered or reused across releases.
pub mod rule_ids {
    /// Documentation page shared by every rule
    pub const HELP_URI: &str = "https://github.com/medlint/medlint";

    pub const USE_COMMAND_OR_QUERY_SUFFIX: &str = "GMDTR01";
    pub const USE_COMMAND_HANDLER_OR_QUERY_HANDLER_SUFFIX: &str = "GMDTR02";
    pub const USE_STREAM_QUERY_SUFFIX: &str = "GMDTR03";
    pub const USE_STREAM_QUERY_HANDLER_SUFFIX: &str = "GMDTR04";
    pub const USE_NOTIFICATION_OR_EVENT_SUFFIX: &str = "GMDTR05";
    pub const USE_NOTIFICATION_HANDLER_OR_EVENT_HANDLER_SUFFIX: &str = "GMDTR06";
    pub const USE_GENERIC_PARAMETER: &str = "GMDTR07";
    pub const PROVIDE_CANCELLATION_TOKEN: &str = "GMDTR08";
    /// Reserved: the rule behind this id was retired
    pub const REQUEST_HANDLERS_SHOULD_NOT_CALL_HANDLER: &str = "GMDTR09";
    /// Reserved: the rule behind this id was retired
    pub const HANDLERS_SHOULD_NOT_BE_PUBLIC: &str = "GMDTR10";
    pub const USE_ADD_MEDIATOR_EXTENSION_METHOD: &str = "GMDTR11";
    pub const USE_METHOD_ENDING_WITH_ASYNC: &str = "GMDTR12";
    /// Reserved: the rule behind this id was retired
    pub const USE_HANDLER_SUFFIX: &str = "GMDTR13";
}

/// Category shared by every rule
pub const DESIGN_CATEGORY: &str = "Design";

/// Default severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Immutable description of one rule: its stable id, wording, category,
/// default severity and help link
#[derive(Debug, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub help_uri: &'static str,
}

impl DiagnosticDescriptor {
    /// Create a design-category warning descriptor, the shape shared by
    /// every rule in this analyzer
    pub const fn warning(id: &'static str, title: &'static str, message: &'static str) -> Self {
        Self {
            id,
            title,
            message,
            category: DESIGN_CATEGORY,
            severity: Severity::Warning,
            help_uri: rule_ids::HELP_URI,
        }
    }

    /// Instantiate this descriptor at a source span
    pub fn report(&'static self, span: Span) -> Diagnostic {
        Diagnostic {
            id: self.id,
            message: self.message,
            category: self.category,
            severity: self.severity,
            help_uri: self.help_uri,
            span,
        }
    }
}

/// One reported rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub message: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub help_uri: &'static str,
    pub span: Span,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]: {}", self.span, self.severity, self.id, self.message)
    }
}

/// Append-only accumulator for diagnostics.
///
/// No deduplication is performed: two rules hitting the same span both get
/// reported. Emission order carries no meaning; [`DiagnosticSink::finish`]
/// sorts by span (then id) so hosts see deterministic output.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append a batch of diagnostics
    pub fn report_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Number of accumulated diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish accumulation, returning diagnostics in source-span order
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by(|a, b| a.span.cmp(&b.span).then_with(|| a.id.cmp(b.id)));
        self.diagnostics
    }
}
