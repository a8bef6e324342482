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

//! Forbidden legacy registration API rule

use crate::catalog::SymbolCatalog;
use crate::diagnostics::{Diagnostic, DiagnosticDescriptor, rule_ids};
use crate::known_names;
use medlint_symbols::Invocation;

pub(crate) static USE_ADD_MEDIATOR_EXTENSION_METHOD_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_ADD_MEDIATOR_EXTENSION_METHOD,
    "Use 'AddMediator' extension method instead of 'AddMediatR'",
    "Use 'AddMediator' extension method instead of 'AddMediatR'",
);

/// Flag calls to the legacy bulk-registration method, regardless of
/// arguments. A pure name and declaring-type match.
pub fn check(catalog: &SymbolCatalog, invocation: &Invocation) -> Option<Diagnostic> {
    let declaring = catalog.service_collection_extensions?;
    let target = &invocation.target;
    if target.declaring_type == declaring && target.name == known_names::ADD_MEDIATR_METHOD {
        Some(USE_ADD_MEDIATOR_EXTENSION_METHOD_RULE.report(invocation.span))
    } else {
        None
    }
}
