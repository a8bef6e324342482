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

//! Convention analyzers for the MediatR message-dispatch pattern
//!
//! The analyzers classify every type declaration into a message-pattern
//! role (request, streaming request, notification, or one of their
//! handlers) by open-generic marker-interface matching, enforce the suffix
//! naming conventions for each role, inspect dispatcher call sites for
//! missing generic type arguments, omitted cancellation tokens and
//! non-idiomatic method naming, and flag the legacy bulk-registration API.
//!
//! There are no fatal errors in normal operation: unresolved library
//! symbols silently disable the rules that need them, and every rule
//! evaluation is a pure function over the immutable symbol catalog.
//!
//! # Example
//!
//! ```
//! use medlint_analyzers::MediatorAnalyzer;
//! use medlint_symbols::CompilationBuilder;
//!
//! let compilation = CompilationBuilder::new().build();
//! let analyzer = MediatorAnalyzer::new(&compilation);
//! assert!(analyzer.run().is_empty());
//! ```

pub mod catalog;
pub mod classify;
pub mod diagnostics;
pub mod engine;
pub mod invocation;
pub mod known_names;
pub mod naming;
pub mod registration;
pub mod reporting;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use catalog::{MarkerInterfaces, SymbolCatalog};
pub use classify::{TypeRole, classify};
pub use diagnostics::{Diagnostic, DiagnosticDescriptor, DiagnosticSink, Severity, rule_ids};
pub use engine::{AnalyzerConfig, MediatorAnalyzer};
pub use invocation::{InvocationFinding, inspect};
pub use reporting::{ReportError, ReportFormat, ReportFormatter, render};
