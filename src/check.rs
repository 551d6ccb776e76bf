//! Check definition: the contract between the engine and individual rules.

use crate::ast::{AstNode, TokenKind};
use crate::diagnostic::{DiagnosticSink, Severity};

/// A single lint check over Java syntax trees.
///
/// The engine owns one instance per registered check and calls
/// [`visit_node`](Check::visit_node) synchronously, once per tree node whose
/// kind appears in [`default_tokens`](Check::default_tokens). A check may keep
/// per-instance state across visits, so an instance must never be shared
/// between engines or threads; anything a check accumulates within one
/// visited node should live in locals scoped to that visit.
pub trait Check {
    /// Stable identifier, e.g. `"covariant-equals"`.
    fn id(&self) -> &'static str;

    /// Node kinds this check wants to be visited for.
    fn default_tokens(&self) -> &'static [TokenKind];

    /// Node kinds the check cannot function without. Defaults to the full
    /// default set; a host that prunes visitation must still deliver these.
    fn required_tokens(&self) -> &'static [TokenKind] {
        self.default_tokens()
    }

    /// Severity applied to this check's findings unless overridden by
    /// configuration.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Resolve one of this check's message keys to its default message text.
    fn message_text(&self, key: &str) -> Option<&'static str>;

    /// Inspect one matching node, reporting findings through the sink.
    fn visit_node(&mut self, node: &AstNode, sink: &mut dyn DiagnosticSink);
}
