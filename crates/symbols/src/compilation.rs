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

//! Immutable program snapshot consumed by the analyzers
//!
//! A [`Compilation`] is an arena of resolved type definitions plus the list
//! of resolved invocation expressions found in the analyzed sources. It is
//! built once by the host (or by tests via [`CompilationBuilder`]) and then
//! only read, so it can be shared freely across analysis workers.

use crate::invocations::Invocation;
use crate::span::Span;
use crate::types::{TypeDef, TypeId, TypeKind, Visibility};
use std::collections::{HashMap, HashSet};

/// Read-only view of a program's symbol table
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    types: Vec<TypeDef>,
    by_metadata_name: HashMap<(String, String), TypeId>,
    invocations: Vec<Invocation>,
}

impl Compilation {
    /// Look up a type definition by assembly and fully qualified metadata
    /// name, e.g. `("MediatR", "MediatR.IRequest")`
    pub fn type_by_metadata_name(&self, assembly: &str, metadata_name: &str) -> Option<TypeId> {
        self.by_metadata_name.get(&(assembly.to_string(), metadata_name.to_string())).copied()
    }

    /// The definition behind a handle
    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.0]
    }

    /// All type definitions, library references included
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types.iter().enumerate().map(|(index, def)| (TypeId(index), def))
    }

    /// Type declarations from the analyzed sources only
    pub fn source_types(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types().filter(|(_, def)| def.is_source_declaration)
    }

    /// Resolved invocation expressions from the analyzed sources
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Every interface definition a type implements, directly or through
    /// base classes and inherited interfaces. Concrete type arguments are
    /// already stripped: the returned handles are open-generic definitions.
    pub fn all_interfaces(&self, id: TypeId) -> Vec<TypeId> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        let mut pending = Vec::new();

        // Base-class chain first, declared interfaces at each level
        let mut current = Some(id);
        let mut visited_bases = HashSet::new();
        while let Some(type_id) = current {
            if !visited_bases.insert(type_id) {
                break;
            }
            let def = self.type_def(type_id);
            pending.extend(def.interfaces.iter().map(|i| i.definition));
            current = def.base_type;
        }

        // Then interface-to-interface inheritance
        while let Some(interface_id) = pending.pop() {
            if !seen.insert(interface_id) {
                continue;
            }
            result.push(interface_id);
            pending.extend(self.type_def(interface_id).interfaces.iter().map(|i| i.definition));
        }

        result
    }

    /// Whether a type implements the given interface definition, directly
    /// or transitively
    pub fn implements(&self, id: TypeId, interface: TypeId) -> bool {
        self.all_interfaces(id).contains(&interface)
    }
}

/// Incremental construction of a [`Compilation`]
#[derive(Debug, Default)]
pub struct CompilationBuilder {
    compilation: Compilation,
}

impl CompilationBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type definition and return its handle
    pub fn add_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.compilation.types.len());
        self.compilation
            .by_metadata_name
            .insert((def.assembly.clone(), def.metadata_name.clone()), id);
        self.compilation.types.push(def);
        id
    }

    /// Add a library type reference (not a source declaration), as produced
    /// when resolving a referenced assembly's metadata
    pub fn add_reference_type(&mut self, assembly: &str, metadata_name: &str, kind: TypeKind, arity: usize) -> TypeId {
        self.add_type(TypeDef {
            metadata_name: metadata_name.to_string(),
            assembly: assembly.to_string(),
            kind,
            visibility: Visibility::Public,
            is_abstract: kind == TypeKind::Interface,
            arity,
            base_type: None,
            interfaces: Vec::new(),
            is_source_declaration: false,
            span: Span::unknown(),
            name_span: Span::unknown(),
        })
    }

    /// Add a resolved invocation expression
    pub fn add_invocation(&mut self, invocation: Invocation) {
        self.compilation.invocations.push(invocation);
    }

    /// Finish building
    pub fn build(self) -> Compilation {
        self.compilation
    }
}
