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

//! Naming-convention rules for classified message types

use crate::classify::TypeRole;
use crate::diagnostics::{Diagnostic, DiagnosticDescriptor, rule_ids};
use medlint_symbols::TypeDef;

pub(crate) static USE_COMMAND_OR_QUERY_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_COMMAND_OR_QUERY_SUFFIX,
    "Name should end with 'Command' or 'Query'",
    "Name should end with 'Command' or 'Query'",
);

pub(crate) static USE_COMMAND_HANDLER_OR_QUERY_HANDLER_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_COMMAND_HANDLER_OR_QUERY_HANDLER_SUFFIX,
    "Name should end with 'CommandHandler' or 'QueryHandler'",
    "Name should end with 'CommandHandler' or 'QueryHandler'",
);

pub(crate) static USE_STREAM_QUERY_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_STREAM_QUERY_SUFFIX,
    "Name should end with 'StreamQuery'",
    "Name should end with 'StreamQuery'",
);

pub(crate) static USE_STREAM_QUERY_HANDLER_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_STREAM_QUERY_HANDLER_SUFFIX,
    "Name should end with 'StreamQueryHandler'",
    "Name should end with 'StreamQueryHandler'",
);

pub(crate) static USE_NOTIFICATION_OR_EVENT_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_NOTIFICATION_OR_EVENT_SUFFIX,
    "Name should end with 'Notification' or 'Event'",
    "Name should end with 'Notification' or 'Event'",
);

pub(crate) static USE_NOTIFICATION_HANDLER_OR_EVENT_HANDLER_SUFFIX_RULE: DiagnosticDescriptor = DiagnosticDescriptor::warning(
    rule_ids::USE_NOTIFICATION_HANDLER_OR_EVENT_HANDLER_SUFFIX,
    "Name should end with 'NotificationHandler' or 'EventHandler'",
    "Name should end with 'NotificationHandler' or 'EventHandler'",
);

/// One row of the suffix table: the accepted suffixes for a role and the
/// rule violated when none match
struct SuffixRule {
    role: TypeRole,
    suffixes: &'static [&'static str],
    rule: &'static DiagnosticDescriptor,
}

/// The static suffix table. Every role except `Unclassified` has exactly
/// one row with a non-empty suffix set.
static SUFFIX_RULES: [SuffixRule; 6] = [
    SuffixRule {
        role: TypeRole::Request,
        suffixes: &["Command", "Query"],
        rule: &USE_COMMAND_OR_QUERY_SUFFIX_RULE,
    },
    SuffixRule {
        role: TypeRole::StreamRequest,
        suffixes: &["StreamQuery"],
        rule: &USE_STREAM_QUERY_SUFFIX_RULE,
    },
    SuffixRule {
        role: TypeRole::Notification,
        suffixes: &["Notification", "Event"],
        rule: &USE_NOTIFICATION_OR_EVENT_SUFFIX_RULE,
    },
    SuffixRule {
        role: TypeRole::RequestHandler,
        suffixes: &["CommandHandler", "QueryHandler"],
        rule: &USE_COMMAND_HANDLER_OR_QUERY_HANDLER_SUFFIX_RULE,
    },
    SuffixRule {
        role: TypeRole::StreamRequestHandler,
        suffixes: &["StreamQueryHandler"],
        rule: &USE_STREAM_QUERY_HANDLER_SUFFIX_RULE,
    },
    SuffixRule {
        role: TypeRole::NotificationHandler,
        suffixes: &["NotificationHandler", "EventHandler"],
        rule: &USE_NOTIFICATION_HANDLER_OR_EVENT_HANDLER_SUFFIX_RULE,
    },
];

/// The accepted suffixes for a role, if the role is named
pub fn accepted_suffixes(role: TypeRole) -> Option<&'static [&'static str]> {
    SUFFIX_RULES.iter().find(|r| r.role == role).map(|r| r.suffixes)
}

/// Check a classified type declaration against the suffix table.
///
/// Matching is an ordinal, case-sensitive exact-tail comparison on the
/// simple name. Handler roles are only evaluated for concrete class or
/// struct declarations; abstract contracts are skipped.
pub fn check(def: &TypeDef, role: TypeRole) -> Option<Diagnostic> {
    let rule = SUFFIX_RULES.iter().find(|r| r.role == role)?;
    if role.is_handler() && !def.is_concrete() {
        return None;
    }

    let name = def.simple_name();
    if rule.suffixes.iter().any(|suffix| name.ends_with(suffix)) {
        None
    } else {
        Some(rule.rule.report(def.name_span))
    }
}
