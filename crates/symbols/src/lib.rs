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

//! Symbol-table model consumed by the Medlint analyzers
//!
//! This crate defines the read-only view of a compiled program that the
//! analyzers operate on: type declarations with their implemented-interface
//! lists and inheritance chains, resolved invocation expressions with
//! per-argument binding kinds, and source spans for diagnostics. Source text
//! parsing and symbol resolution happen upstream in the host; this crate
//! only models their output.

pub mod compilation;
pub mod invocations;
pub mod span;
pub mod types;

// Re-export main types for convenience
pub use compilation::{Compilation, CompilationBuilder};
pub use invocations::{Argument, ArgumentBinding, Invocation, MethodRef};
pub use span::{Position, Span};
pub use types::{InterfaceImpl, TypeDef, TypeId, TypeKind, Visibility};
