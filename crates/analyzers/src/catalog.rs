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

//! One-time resolution of the well-known library symbols
//!
//! The catalog is built exactly once per compilation and treated as an
//! immutable snapshot afterwards, so every per-type and per-invocation
//! evaluation can read it concurrently without synchronization. Each symbol
//! resolves independently: an older library version lacking one marker
//! still allows every other rule to run.

use crate::known_names;
use medlint_symbols::{Compilation, TypeId};
use std::collections::HashSet;
use tracing::debug;

/// Resolved marker interface definitions, each independently optional
#[derive(Debug, Clone, Default)]
pub struct MarkerInterfaces {
    /// `IRequest`
    pub request: Option<TypeId>,
    /// `IRequest<TResponse>`
    pub request_with_response: Option<TypeId>,
    /// `IStreamRequest<TResponse>`
    pub stream_request: Option<TypeId>,
    /// `INotification`
    pub notification: Option<TypeId>,
    /// `IRequestHandler<TRequest>`
    pub request_handler: Option<TypeId>,
    /// `IRequestHandler<TRequest, TResponse>`
    pub request_handler_with_response: Option<TypeId>,
    /// `IStreamRequestHandler<TRequest, TResponse>`
    pub stream_request_handler: Option<TypeId>,
    /// `INotificationHandler<TNotification>`
    pub notification_handler: Option<TypeId>,
}

impl MarkerInterfaces {
    fn resolve(compilation: &Compilation) -> Self {
        let lookup = |name: &str| compilation.type_by_metadata_name(known_names::MEDIATR_ASSEMBLY, name);
        Self {
            request: lookup(known_names::REQUEST_INTERFACE),
            request_with_response: lookup(known_names::REQUEST_WITH_RESPONSE_INTERFACE),
            stream_request: lookup(known_names::STREAM_REQUEST_INTERFACE),
            notification: lookup(known_names::NOTIFICATION_INTERFACE),
            request_handler: lookup(known_names::REQUEST_HANDLER_INTERFACE),
            request_handler_with_response: lookup(known_names::REQUEST_HANDLER_WITH_RESPONSE_INTERFACE),
            stream_request_handler: lookup(known_names::STREAM_REQUEST_HANDLER_INTERFACE),
            notification_handler: lookup(known_names::NOTIFICATION_HANDLER_INTERFACE),
        }
    }

    /// Whether any marker resolved at all (otherwise classification is
    /// trivially `Unclassified` everywhere)
    pub fn any_resolved(&self) -> bool {
        self.request.is_some()
            || self.request_with_response.is_some()
            || self.stream_request.is_some()
            || self.notification.is_some()
            || self.request_handler.is_some()
            || self.request_handler_with_response.is_some()
            || self.stream_request_handler.is_some()
            || self.notification_handler.is_some()
    }
}

/// Immutable lookup tables for the analyzed library's well-known symbols
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    /// Marker interface definitions
    pub markers: MarkerInterfaces,
    /// The dispatcher class and its capability interfaces; invocation
    /// inspection requires all four
    dispatcher_types: HashSet<TypeId>,
    /// Static class declaring the legacy bulk-registration method
    pub service_collection_extensions: Option<TypeId>,
}

/// Number of declaring types the dispatcher members are spread over
const DISPATCHER_TYPE_COUNT: usize = 4;

impl SymbolCatalog {
    /// Resolve every well-known symbol against a compilation. Unresolved
    /// symbols are left as gaps, never an error.
    pub fn resolve(compilation: &Compilation) -> Self {
        let lookup = |name: &str| compilation.type_by_metadata_name(known_names::MEDIATR_ASSEMBLY, name);

        let mut dispatcher_types = HashSet::new();
        for name in [
            known_names::MEDIATOR_CLASS,
            known_names::MEDIATOR_INTERFACE,
            known_names::SENDER_INTERFACE,
            known_names::PUBLISHER_INTERFACE,
        ] {
            if let Some(id) = lookup(name) {
                dispatcher_types.insert(id);
            }
        }

        let catalog = Self {
            markers: MarkerInterfaces::resolve(compilation),
            dispatcher_types,
            service_collection_extensions: compilation
                .type_by_metadata_name(known_names::MEDIATR_ASSEMBLY, known_names::SERVICE_COLLECTION_EXTENSIONS_CLASS),
        };

        debug!(
            markers_resolved = catalog.markers.any_resolved(),
            dispatcher_resolved = catalog.dispatcher_resolved(),
            "resolved symbol catalog"
        );

        catalog
    }

    /// Whether the dispatcher class and all three capability interfaces
    /// resolved; invocation checks are skipped entirely otherwise
    pub fn dispatcher_resolved(&self) -> bool {
        self.dispatcher_types.len() == DISPATCHER_TYPE_COUNT
    }

    /// Whether a type is one of the resolved dispatcher declaring types
    pub fn is_dispatcher_type(&self, id: TypeId) -> bool {
        self.dispatcher_types.contains(&id)
    }
}
