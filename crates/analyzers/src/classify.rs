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

//! Message-pattern role classification over open-generic interfaces

use crate::catalog::SymbolCatalog;
use medlint_symbols::{Compilation, TypeId};
use std::collections::HashSet;

/// The message-pattern role of a type declaration, derived from the marker
/// interfaces it implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRole {
    Request,
    StreamRequest,
    Notification,
    RequestHandler,
    StreamRequestHandler,
    NotificationHandler,
    Unclassified,
}

impl TypeRole {
    /// Whether this role marks a handler implementation
    pub fn is_handler(&self) -> bool {
        matches!(self, TypeRole::RequestHandler | TypeRole::StreamRequestHandler | TypeRole::NotificationHandler)
    }
}

/// Classify a type declaration by its transitively implemented marker
/// interfaces. Matching is open-generic: concrete type arguments are
/// ignored, only the generic definition counts, and both arities of a
/// handler family map to the same role.
///
/// Precedence is explicit and total: handler markers win over the plain
/// request/notification markers, stream variants over their non-stream
/// counterparts. Every declaration maps to exactly one role,
/// [`TypeRole::Unclassified`] when no marker matches.
pub fn classify(compilation: &Compilation, catalog: &SymbolCatalog, id: TypeId) -> TypeRole {
    let implemented: HashSet<TypeId> = compilation.all_interfaces(id).into_iter().collect();
    let matches = |marker: Option<TypeId>| marker.is_some_and(|m| implemented.contains(&m));

    let markers = &catalog.markers;
    if matches(markers.stream_request_handler) {
        TypeRole::StreamRequestHandler
    } else if matches(markers.request_handler) || matches(markers.request_handler_with_response) {
        TypeRole::RequestHandler
    } else if matches(markers.notification_handler) {
        TypeRole::NotificationHandler
    } else if matches(markers.stream_request) {
        TypeRole::StreamRequest
    } else if matches(markers.request) || matches(markers.request_with_response) {
        TypeRole::Request
    } else if matches(markers.notification) {
        TypeRole::Notification
    } else {
        TypeRole::Unclassified
    }
}
