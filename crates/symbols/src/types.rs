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

//! Type declarations and implemented-interface records

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a type definition inside a [`crate::Compilation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub usize);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaration kind of a type definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
}

/// Declared accessibility of a type definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

/// One implemented-interface entry on a type declaration.
///
/// `definition` points at the open-generic interface definition; concrete
/// type arguments are recorded for display only and are never part of
/// interface identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceImpl {
    /// The open-generic definition being implemented
    pub definition: TypeId,
    /// Concrete type argument names, e.g. `["string"]` for `IRequest<string>`
    pub type_arguments: Vec<String>,
}

impl InterfaceImpl {
    /// Implement a non-generic interface
    pub fn new(definition: TypeId) -> Self {
        Self {
            definition,
            type_arguments: Vec::new(),
        }
    }

    /// Implement a generic interface instantiation
    pub fn with_arguments(definition: TypeId, type_arguments: &[&str]) -> Self {
        Self {
            definition,
            type_arguments: type_arguments.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A resolved type definition, either declared in the analyzed sources or
/// referenced from a library assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Fully qualified metadata name, arity-mangled for generic definitions
    /// (the non-generic "MediatR.IRequest" and its arity-1 form are distinct)
    pub metadata_name: String,
    /// Name of the assembly the definition lives in
    pub assembly: String,
    /// Declaration kind
    pub kind: TypeKind,
    /// Declared accessibility
    pub visibility: Visibility,
    /// Whether the declaration is abstract
    pub is_abstract: bool,
    /// Number of generic parameters on the definition
    pub arity: usize,
    /// Base class, if any
    pub base_type: Option<TypeId>,
    /// Interfaces implemented directly on this declaration
    pub interfaces: Vec<InterfaceImpl>,
    /// Whether the type is declared in the analyzed sources (library
    /// references are skipped by per-type rules)
    pub is_source_declaration: bool,
    /// Span of the whole declaration
    pub span: Span,
    /// Span of the declared name token
    pub name_span: Span,
}

impl TypeDef {
    /// The simple (unqualified, unmangled) name of the type
    pub fn simple_name(&self) -> &str {
        let unqualified = match self.metadata_name.rfind('.') {
            Some(dot) => &self.metadata_name[dot + 1..],
            None => &self.metadata_name,
        };
        match unqualified.find('`') {
            Some(tick) => &unqualified[..tick],
            None => unqualified,
        }
    }

    /// Whether this declaration can carry a handler implementation: a
    /// concrete class or struct, not an abstract contract
    pub fn is_concrete(&self) -> bool {
        matches!(self.kind, TypeKind::Class | TypeKind::Struct) && !self.is_abstract
    }
}
