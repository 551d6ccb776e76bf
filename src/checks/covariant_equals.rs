//! Flags covariant `equals` overloads in classes that never define the
//! canonical `equals(Object)`.
//!
//! A method like `boolean equals(Point other)` overloads `Object.equals`
//! instead of overriding it: collections and any code holding an `Object`
//! reference still dispatch to `Object.equals` and silently ignore the
//! covariant version. Inspired by the findbugs covariant-equals detector.

use crate::ast::{AstNode, TokenKind};
use crate::check::Check;
use crate::diagnostic::DiagnosticSink;
use log::trace;

/// Message key for a covariant equals finding.
pub const MSG_COVARIANT_EQUALS: &str = "covariant.equals";

/// The covariant-equals check.
#[derive(Debug, Default)]
pub struct CovariantEqualsCheck;

impl CovariantEqualsCheck {
    pub fn new() -> Self {
        Self
    }
}

/// Classification of one class body, complete only after every direct child
/// has been seen.
struct BodyScan<'a> {
    /// `equals` candidates whose single parameter is not `Object`.
    covariant: Vec<&'a AstNode>,
    /// Whether the body also declares `equals(Object)`.
    has_canonical: bool,
}

impl Check for CovariantEqualsCheck {
    fn id(&self) -> &'static str {
        "covariant-equals"
    }

    fn default_tokens(&self) -> &'static [TokenKind] {
        // LiteralNew covers anonymous class bodies, which are structurally
        // identical for this check.
        &[TokenKind::ClassDef, TokenKind::LiteralNew]
    }

    fn message_text(&self, key: &str) -> Option<&'static str> {
        match key {
            MSG_COVARIANT_EQUALS => {
                Some("covariant equals defined without overriding equals(java.lang.Object)")
            }
            _ => None,
        }
    }

    fn visit_node(&mut self, node: &AstNode, sink: &mut dyn DiagnosticSink) {
        // Interfaces, forward references, and plain `new` expressions carry
        // no body; nothing to do.
        let Some(body) = node.find_first_token(TokenKind::ObjBlock) else {
            return;
        };

        let scan = scan_body(body);
        trace!(
            "class body at {}:{} has {} covariant candidate(s), canonical equals: {}",
            node.line(),
            node.column(),
            scan.covariant.len(),
            scan.has_canonical
        );

        // The canonical overload suppresses every covariant finding for this
        // body, however many there are.
        if scan.has_canonical {
            return;
        }

        for method in scan.covariant {
            if let Some(name) = method.find_first_token(TokenKind::Ident) {
                sink.report(name.line(), name.column(), MSG_COVARIANT_EQUALS);
            }
        }
    }
}

/// Partition the body's direct method definitions into covariant candidates
/// and the canonical-overload flag.
///
/// The canonical overload may appear textually after its covariant siblings,
/// so no decision is made until the whole body has been seen. Only direct
/// children are examined; nested classes are visited on their own when the
/// walk reaches their declaration nodes.
fn scan_body(body: &AstNode) -> BodyScan<'_> {
    let mut scan = BodyScan {
        covariant: Vec::new(),
        has_canonical: false,
    };

    for child in body.children() {
        if child.kind() != TokenKind::MethodDef {
            continue;
        }
        if !is_equals_candidate(child) {
            continue;
        }
        if has_object_parameter(child) {
            scan.has_canonical = true;
        } else {
            scan.covariant.push(child);
        }
    }

    scan
}

/// Whether a method definition is a viable `equals` candidate: non-static,
/// non-abstract, named exactly `equals`, with exactly one parameter.
fn is_equals_candidate(method: &AstNode) -> bool {
    // Static and abstract methods take no part in instance override
    // resolution.
    if let Some(modifiers) = method.find_first_token(TokenKind::Modifiers) {
        if modifiers.branch_contains(TokenKind::LiteralStatic)
            || modifiers.branch_contains(TokenKind::Abstract)
        {
            return false;
        }
    }

    match method.find_first_token(TokenKind::Ident) {
        Some(name) if name.text() == "equals" => {}
        _ => return false,
    }

    parameter_count(method) == 1
}

fn parameter_count(method: &AstNode) -> usize {
    method
        .find_first_token(TokenKind::Parameters)
        .map_or(0, |params| {
            params.children_of_kind(TokenKind::ParameterDef).count()
        })
}

/// Whether the method's single parameter is declared as `Object`.
///
/// The declared type is matched textually as `Object` or
/// `java.lang.Object`; a user-defined class that happens to be named
/// `Object` is indistinguishable here. That shallow match is intentional:
/// this check runs without a symbol table.
fn has_object_parameter(method: &AstNode) -> bool {
    if parameter_count(method) != 1 {
        return false;
    }

    let Some(param) = method
        .find_first_token(TokenKind::Parameters)
        .and_then(|params| params.find_first_token(TokenKind::ParameterDef))
    else {
        return false;
    };
    let Some(type_node) = param.find_first_token(TokenKind::Type) else {
        return false;
    };
    let Some(type_name) = type_node.children().first() else {
        return false;
    };

    let name = type_name.qualified_name();
    name == "Object" || name == "java.lang.Object"
}
