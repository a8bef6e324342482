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

//! Resolved call-site operations

use crate::span::Span;
use crate::types::TypeId;
use serde::{Deserialize, Serialize};

/// The resolved target method of a call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Simple method name
    pub name: String,
    /// Definition the method is declared on
    pub declaring_type: TypeId,
    /// Number of declared parameters
    pub parameter_count: usize,
    /// Whether the resolved method is itself generic (as opposed to a
    /// non-generic overload the caller fell back to)
    pub is_generic: bool,
}

/// How an argument position was filled at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentBinding {
    /// The caller supplied the value explicitly
    Explicit,
    /// The position was filled by the parameter's declared default value
    DefaultValue,
}

/// One argument of a call site, in parameter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Binding kind for this position
    pub binding: ArgumentBinding,
}

impl Argument {
    /// An explicitly supplied argument
    pub fn explicit() -> Self {
        Self {
            binding: ArgumentBinding::Explicit,
        }
    }

    /// An argument filled by the parameter default
    pub fn defaulted() -> Self {
        Self {
            binding: ArgumentBinding::DefaultValue,
        }
    }
}

/// A resolved invocation expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// The method the call resolved to
    pub target: MethodRef,
    /// Arguments in parameter order, including defaulted positions
    pub arguments: Vec<Argument>,
    /// Span of the invocation expression
    pub span: Span,
}

impl Invocation {
    /// Create an invocation with every argument supplied explicitly
    pub fn new(target: MethodRef, explicit_arguments: usize, span: Span) -> Self {
        Self {
            target,
            arguments: vec![Argument::explicit(); explicit_arguments],
            span,
        }
    }
}
