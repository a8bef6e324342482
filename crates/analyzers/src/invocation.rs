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

//! Dispatcher call-site inspection

use crate::catalog::SymbolCatalog;
use crate::diagnostics::{Diagnostic, DiagnosticDescriptor, rule_ids};
use crate::known_names;
use medlint_symbols::{ArgumentBinding, Invocation, Span};

pub(crate) static USE_GENERIC_PARAMETER_RULE: DiagnosticDescriptor =
    DiagnosticDescriptor::warning(rule_ids::USE_GENERIC_PARAMETER, "Use generic method instead", "Use generic method instead");

pub(crate) static PROVIDE_CANCELLATION_TOKEN_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::PROVIDE_CANCELLATION_TOKEN,
    "Provide a cancellation token",
    "Provide a cancellation token",
);

pub(crate) static USE_METHOD_ENDING_WITH_ASYNC_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_METHOD_ENDING_WITH_ASYNC,
    "Use method ending with 'Async' instead",
    "Use method ending with 'Async' instead",
);

/// Result of inspecting one dispatcher call site: three independent flags
/// plus the call's span. Consumed immediately; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationFinding {
    /// The method name lacks the conventional `Async` suffix
    pub use_async_suffix: bool,
    /// The call resolved to a non-generic overload
    pub use_generic_parameter: bool,
    /// The cancellation-token argument was left to its parameter default
    pub provide_cancellation_token: bool,
    /// Span of the call expression
    pub span: Span,
}

impl InvocationFinding {
    /// Whether no check fired
    pub fn is_clean(&self) -> bool {
        !self.use_async_suffix && !self.use_generic_parameter && !self.provide_cancellation_token
    }

    /// Materialize one diagnostic per raised flag
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if self.use_async_suffix {
            diagnostics.push(USE_METHOD_ENDING_WITH_ASYNC_RULE.report(self.span));
        }
        if self.use_generic_parameter {
            diagnostics.push(USE_GENERIC_PARAMETER_RULE.report(self.span));
        }
        if self.provide_cancellation_token {
            diagnostics.push(PROVIDE_CANCELLATION_TOKEN_RULE.report(self.span));
        }
        diagnostics
    }
}

/// The dispatch family a method name belongs to, with the optional `Async`
/// suffix stripped
fn dispatch_family(name: &str) -> Option<&str> {
    let base = name.strip_suffix(known_names::ASYNC_SUFFIX).unwrap_or(name);
    match base {
        known_names::SEND_METHOD | known_names::PUBLISH_METHOD | known_names::CREATE_STREAM_METHOD => Some(base),
        _ => None,
    }
}

/// Inspect one call site against the dispatcher usage rules.
///
/// Returns `None` unless the dispatcher library fully resolved and the call
/// targets a two-parameter send/publish/create-stream method declared on
/// one of the dispatcher types. The three checks are independent; a single
/// call site can raise zero to three flags.
pub fn inspect(catalog: &SymbolCatalog, invocation: &Invocation) -> Option<InvocationFinding> {
    if !catalog.dispatcher_resolved() {
        return None;
    }

    let target = &invocation.target;
    if target.parameter_count != known_names::DISPATCH_METHOD_PARAMETER_COUNT || !catalog.is_dispatcher_type(target.declaring_type) {
        return None;
    }
    let family = dispatch_family(&target.name)?;

    // CreateStream is exempt from the async-suffix convention
    let supports_async_suffix = family == known_names::SEND_METHOD || family == known_names::PUBLISH_METHOD;

    Some(InvocationFinding {
        use_async_suffix: supports_async_suffix && !target.name.ends_with(known_names::ASYNC_SUFFIX),
        use_generic_parameter: !target.is_generic,
        provide_cancellation_token: invocation.arguments.len() == known_names::DISPATCH_METHOD_PARAMETER_COUNT
            && invocation.arguments[1].binding == ArgumentBinding::DefaultValue,
        span: invocation.span,
    })
}
