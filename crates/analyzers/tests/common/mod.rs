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

//! End-to-end test harness: assembles a compilation containing the MediatR
//! library surface plus user declarations, runs the full analyzer sweep and
//! hands back the diagnostics (the snippet-compiling harness of the
//! original without the parsing step)

// Not every test binary exercises every helper.
#![allow(dead_code)]

use medlint_analyzers::{Diagnostic, MediatorAnalyzer, known_names};
use medlint_symbols::{
    Argument, ArgumentBinding, CompilationBuilder, InterfaceImpl, Invocation, MethodRef, Span, TypeDef, TypeId, TypeKind,
    Visibility,
};

/// Handles to every library type the analyzer knows about
pub struct Library {
    pub request: TypeId,
    pub request_with_response: TypeId,
    pub stream_request: TypeId,
    pub notification: TypeId,
    pub request_handler: TypeId,
    pub request_handler_with_response: TypeId,
    pub stream_request_handler: TypeId,
    pub notification_handler: TypeId,
    pub mediator_class: TypeId,
    pub mediator: TypeId,
    pub sender: TypeId,
    pub publisher: TypeId,
    pub service_collection_extensions: TypeId,
}

/// A program under test
pub struct Program {
    builder: CompilationBuilder,
    pub lib: Library,
    line: usize,
}

impl Program {
    /// Start a program referencing the dispatch library
    pub fn new() -> Self {
        let mut builder = CompilationBuilder::new();
        let assembly = known_names::MEDIATR_ASSEMBLY;
        let interface =
            |builder: &mut CompilationBuilder, name: &str, arity: usize| builder.add_reference_type(assembly, name, TypeKind::Interface, arity);

        let lib = Library {
            request: interface(&mut builder, known_names::REQUEST_INTERFACE, 0),
            request_with_response: interface(&mut builder, known_names::REQUEST_WITH_RESPONSE_INTERFACE, 1),
            stream_request: interface(&mut builder, known_names::STREAM_REQUEST_INTERFACE, 1),
            notification: interface(&mut builder, known_names::NOTIFICATION_INTERFACE, 0),
            request_handler: interface(&mut builder, known_names::REQUEST_HANDLER_INTERFACE, 1),
            request_handler_with_response: interface(&mut builder, known_names::REQUEST_HANDLER_WITH_RESPONSE_INTERFACE, 2),
            stream_request_handler: interface(&mut builder, known_names::STREAM_REQUEST_HANDLER_INTERFACE, 2),
            notification_handler: interface(&mut builder, known_names::NOTIFICATION_HANDLER_INTERFACE, 1),
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

        Self { builder, lib, line: 1 }
    }

    fn next_span(&mut self, width: usize) -> Span {
        let line = self.line;
        self.line += 1;
        Span::on_line(line, 1, 1 + width)
    }

    /// Declare an internal class implementing interface instantiations,
    /// e.g. `(lib.request_with_response, &["string"])`
    pub fn class(&mut self, name: &str, interfaces: &[(TypeId, &[&str])]) -> TypeId {
        let span = self.next_span(name.len());
        self.builder.add_type(TypeDef {
            metadata_name: name.to_string(),
            assembly: "TestProject".to_string(),
            kind: TypeKind::Class,
            visibility: Visibility::Internal,
            is_abstract: false,
            arity: 0,
            base_type: None,
            interfaces: interfaces
                .iter()
                .map(|(definition, args)| InterfaceImpl::with_arguments(*definition, args))
                .collect(),
            is_source_declaration: true,
            span,
            name_span: span,
        })
    }

    /// Record a call to a two-parameter dispatch method
    pub fn call(&mut self, declaring_type: TypeId, name: &str, is_generic: bool, bindings: &[ArgumentBinding]) {
        self.call_with_parameter_count(declaring_type, name, is_generic, bindings, 2);
    }

    /// Record a call with an explicit target parameter count
    pub fn call_with_parameter_count(
        &mut self,
        declaring_type: TypeId,
        name: &str,
        is_generic: bool,
        bindings: &[ArgumentBinding],
        parameter_count: usize,
    ) {
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
    }

    /// Run the full analyzer sweep
    pub fn compile(self) -> Vec<Diagnostic> {
        let compilation = self.build();
        MediatorAnalyzer::new(&compilation).run()
    }

    /// Finish building without running the analyzers
    pub fn build(self) -> medlint_symbols::Compilation {
        self.builder.build()
    }
}

/// Two explicitly supplied arguments
pub const EXPLICIT: [ArgumentBinding; 2] = [ArgumentBinding::Explicit, ArgumentBinding::Explicit];

/// Cancellation token left to its parameter default
pub const DEFAULTED_TOKEN: [ArgumentBinding; 2] = [ArgumentBinding::Explicit, ArgumentBinding::DefaultValue];
