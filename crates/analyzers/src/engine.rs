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

//! Analysis driver
//!
//! [`MediatorAnalyzer`] resolves the symbol catalog once at construction and
//! then exposes the per-declaration and per-invocation callbacks a host
//! compiler invokes, plus [`MediatorAnalyzer::run`] to sweep a whole
//! compilation. The catalog and rule tables are read-only after
//! construction, so the sweep can fan out across worker threads without
//! locking.

use crate::catalog::SymbolCatalog;
use crate::classify::classify;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::{invocation, naming, registration};
use medlint_symbols::{Compilation, Invocation, TypeId};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Host-facing analyzer configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Fan the full-compilation sweep out over a thread pool
    pub parallel: bool,
    /// Rule ids suppressed from the output
    pub disabled_rules: HashSet<String>,
}

impl AnalyzerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the parallel sweep
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Suppress a rule by id
    pub fn without_rule(mut self, rule_id: &str) -> Self {
        self.disabled_rules.insert(rule_id.to_string());
        self
    }

    /// Whether a rule's diagnostics should be kept
    pub fn rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }
}

/// Rule evaluation over one compilation snapshot
pub struct MediatorAnalyzer<'a> {
    compilation: &'a Compilation,
    catalog: SymbolCatalog,
    config: AnalyzerConfig,
}

impl<'a> MediatorAnalyzer<'a> {
    /// Create an analyzer with default configuration, resolving the symbol
    /// catalog for this compilation
    pub fn new(compilation: &'a Compilation) -> Self {
        Self::with_config(compilation, AnalyzerConfig::default())
    }

    /// Create an analyzer with an explicit configuration
    pub fn with_config(compilation: &'a Compilation, config: AnalyzerConfig) -> Self {
        Self {
            compilation,
            catalog: SymbolCatalog::resolve(compilation),
            config,
        }
    }

    /// The resolved symbol catalog
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Per-declaration callback: classify the type and check its name
    /// against the suffix table. Library references are never checked.
    pub fn analyze_type(&self, id: TypeId) -> Option<Diagnostic> {
        let def = self.compilation.type_def(id);
        if !def.is_source_declaration {
            return None;
        }
        let role = classify(self.compilation, &self.catalog, id);
        naming::check(def, role)
    }

    /// Per-invocation callback: dispatcher usage checks plus the forbidden
    /// registration API rule, each deciding independently
    pub fn analyze_invocation(&self, call: &Invocation) -> Vec<Diagnostic> {
        let mut diagnostics = invocation::inspect(&self.catalog, call).map(|finding| finding.diagnostics()).unwrap_or_default();
        if let Some(diagnostic) = registration::check(&self.catalog, call) {
            diagnostics.push(diagnostic);
        }
        diagnostics
    }

    /// Sweep the whole compilation and return its diagnostics in
    /// source-span order
    pub fn run(&self) -> Vec<Diagnostic> {
        let mut sink = DiagnosticSink::new();

        if self.config.parallel {
            let type_ids: Vec<TypeId> = self.compilation.source_types().map(|(id, _)| id).collect();
            sink.report_all(type_ids.par_iter().filter_map(|id| self.analyze_type(*id)).collect::<Vec<_>>());
            sink.report_all(
                self.compilation
                    .invocations()
                    .par_iter()
                    .flat_map_iter(|call| self.analyze_invocation(call))
                    .collect::<Vec<_>>(),
            );
        } else {
            for (id, _) in self.compilation.source_types() {
                if let Some(diagnostic) = self.analyze_type(id) {
                    sink.report(diagnostic);
                }
            }
            for call in self.compilation.invocations() {
                sink.report_all(self.analyze_invocation(call));
            }
        }

        let mut diagnostics = sink.finish();
        diagnostics.retain(|d| self.config.rule_enabled(d.id));
        debug!(count = diagnostics.len(), parallel = self.config.parallel, "analysis pass finished");
        diagnostics
    }
}
