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

//! Shared fixtures for unit tests: a compilation pre-populated with the
//! MediatR library surface plus helpers to declare user code against it

use crate::catalog::SymbolCatalog;
use crate::known_names;
use medlint_symbols::{
    Argument, ArgumentBinding, Compilation, CompilationBuilder, InterfaceImpl, Invocation, MethodRef, Span, TypeDef, TypeId,
    TypeKind, Visibility,
};

/// Handles to the marker interface definitions added by the fixture
pub struct FixtureMarkers {
    pub request: TypeId,
    pub request_with_response: TypeId,
    pub stream_request: TypeId,
    pub notification: TypeId,
    pub request_handler: TypeId,
    pub request_handler_with_response: TypeId,
    pub stream_request_handler: TypeId,
    pub notification_handler: TypeId,
}

/// Handles to the dispatcher declaring types added by the fixture
pub struct FixtureDispatcher {
    pub mediator_class: TypeId,
    pub mediator: TypeId,
    pub sender: TypeId,
    pub publisher: TypeId,
    pub service_collection_extensions: TypeId,
}

/// A compilation under construction with the dispatch library referenced
pub struct MediatrFixture {
    builder: CompilationBuilder,
    pub markers: FixtureMarkers,
    pub dispatcher: FixtureDispatcher,
    next_line: usize,
}

impl MediatrFixture {
    /// Library surface referenced under its real assembly name, so catalog
    /// resolution succeeds
    pub fn new() -> Self {
        Self::with_assembly(known_names::MEDIATR_ASSEMBLY)
    }

    /// Library surface referenced under a different assembly name, so
    /// catalog resolution finds nothing (models an absent library)
    pub fn without_library() -> Self {
        Self::with_assembly("SomeOtherLib")
    }

    fn with_assembly(assembly: &str) -> Self {
        let mut builder = CompilationBuilder::new();
        let interface = |builder: &mut CompilationBuilder, name: &str, arity: usize| {
            builder.add_reference_type(assembly, name, TypeKind::Interface, arity)
        };

        let markers = FixtureMarkers {
            request: interface(&mut builder, known_names::REQUEST_INTERFACE, 0),
            request_with_response: interface(&mut builder, known_names::REQUEST_WITH_RESPONSE_INTERFACE, 1),
            stream_request: interface(&mut builder, known_names::STREAM_REQUEST_INTERFACE, 1),
            notification: interface(&mut builder, known_names::NOTIFICATION_INTERFACE, 0),
            request_handler: interface(&mut builder, known_names::REQUEST_HANDLER_INTERFACE, 1),
            request_handler_with_response: interface(&mut builder, known_names::REQUEST_HANDLER_WITH_RESPONSE_INTERFACE, 2),
            stream_request_handler: interface(&mut builder, known_names::STREAM_REQUEST_HANDLER_INTERFACE, 2),
            notification_handler: interface(&mut builder, known_names::NOTIFICATION_HANDLER_INTERFACE, 1),
        };
        let dispatcher = FixtureDispatcher {
            mediator_class: builder.add_reference_type(assembly, known_names::MEDIATOR_CLASS, TypeKind::Class, 0),
            mediator: interface(&mut builder, known_names::MEDIATOR_INTERFACE, 0),
            sender: interface(&mut builder, known_names::SENDER_INTERFACE, 0),
            publisher: interface(&mut builder, known_names::PUBLISHER_INTERFACE, 0),
            service_collection_extensions: builder.add_reference_type(
                assembly,
                known_names::SERVICE_COLLECTION_EXTENSIONS_CLASS,
                TypeKind::Class,
                0,
            ),
        };

        Self {
            builder,
            markers,
            dispatcher,
            next_line: 1,
        }
    }

    fn next_span(&mut self, width: usize) -> Span {
        let line = self.next_line;
        self.next_line += 1;
        Span::on_line(line, 1, 1 + width)
    }

    /// Declare an internal concrete class implementing the given interface
    /// definitions; returns its handle
    pub fn source_class(&mut self, metadata_name: &str, interfaces: &[TypeId]) -> TypeId {
        self.declare(metadata_name, TypeKind::Class, false, None, interfaces)
    }

    /// Declare a concrete class with a base class
    pub fn source_class_with_base(&mut self, metadata_name: &str, base: TypeId, interfaces: &[TypeId]) -> TypeId {
        self.declare(metadata_name, TypeKind::Class, false, Some(base), interfaces)
    }

    /// Declare an abstract class implementing the given interfaces
    pub fn abstract_source_class(&mut self, metadata_name: &str, interfaces: &[TypeId]) -> TypeId {
        self.declare(metadata_name, TypeKind::Class, true, None, interfaces)
    }

    /// Declare a class implementing nothing of interest
    pub fn plain_source_class(&mut self, metadata_name: &str) -> TypeId {
        self.source_class(metadata_name, &[])
    }

    fn declare(&mut self, metadata_name: &str, kind: TypeKind, is_abstract: bool, base: Option<TypeId>, interfaces: &[TypeId]) -> TypeId {
        let name_width = metadata_name.rsplit('.').next().map(str::len).unwrap_or(0);
        let name_span = self.next_span(name_width);
        self.builder.add_type(TypeDef {
            metadata_name: metadata_name.to_string(),
            assembly: "TestProject".to_string(),
            kind,
            visibility: Visibility::Internal,
            is_abstract,
            arity: 0,
            base_type: base,
            interfaces: interfaces.iter().map(|id| InterfaceImpl::new(*id)).collect(),
            is_source_declaration: true,
            span: name_span,
            name_span,
        })
    }

    /// Record a resolved call site; returns the span it was given
    pub fn add_call(&mut self, declaring_type: TypeId, name: &str, is_generic: bool, bindings: &[ArgumentBinding]) -> Span {
        self.add_call_with_parameter_count(declaring_type, name, is_generic, bindings, known_names::DISPATCH_METHOD_PARAMETER_COUNT)
    }

    /// Record a resolved call site against a method with an explicit
    /// parameter count
    pub fn add_call_with_parameter_count(
        &mut self,
        declaring_type: TypeId,
        name: &str,
        is_generic: bool,
        bindings: &[ArgumentBinding],
        parameter_count: usize,
    ) -> Span {
        let span = self.next_span(name.len());
        self.builder.add_invocation(Invocation {
            target: MethodRef {
                name: name.to_string(),
                declaring_type,
                parameter_count,
                is_generic,
            },
            arguments: bindings.iter().map(|binding| Argument { binding: *binding }).collect(),
            span,
        });
        span
    }

    /// Build the compilation and resolve its catalog
    pub fn finish(self) -> (Compilation, SymbolCatalog) {
        let compilation = self.builder.build();
        let catalog = SymbolCatalog::resolve(&compilation);
        (compilation, catalog)
    }
}
