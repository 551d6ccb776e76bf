//! Lint engine: walks one syntax tree and dispatches nodes to checks.

use crate::ast::AstNode;
use crate::check::Check;
use crate::checks;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCollector, Location, Severity};
use log::{debug, trace, warn};

/// Result of linting one or more trees
#[derive(Debug, Default)]
pub struct LintResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,

    /// Total errors
    pub error_count: usize,

    /// Total warnings
    pub warning_count: usize,

    /// Total info messages
    pub info_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if result is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        self.error_count == 0 && self.warning_count == 0
    }

    /// Get exit code (0 = success, 1 = warnings, 2 = errors)
    pub fn exit_code(&self) -> i32 {
        if self.error_count > 0 {
            2
        } else if self.warning_count > 0 {
            1
        } else {
            0
        }
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: LintResult) {
        self.diagnostics.extend(other.diagnostics);
        self.error_count += other.error_count;
        self.warning_count += other.warning_count;
        self.info_count += other.info_count;
    }

    fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Info => self.info_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }
}

/// The lint engine.
///
/// Owns its check instances outright: one engine, one set of instances, one
/// thread. A host that lints files in parallel builds one engine per worker
/// rather than sharing one.
pub struct Engine {
    /// Configuration
    config: Config,

    /// Registered checks
    checks: Vec<Box<dyn Check>>,
}

impl Engine {
    /// Create an engine with no checks registered
    pub fn new(config: Config) -> Self {
        Self {
            config,
            checks: Vec::new(),
        }
    }

    /// Create an engine with all built-in checks registered
    pub fn with_builtin_checks(config: Config) -> Self {
        let mut engine = Self::new(config);
        for check in checks::builtin_checks() {
            engine.register_check(check);
        }
        engine
    }

    /// Register a check, unless configuration disables it
    pub fn register_check(&mut self, check: Box<dyn Check>) {
        if !self.config.is_check_enabled(check.id()) {
            debug!("check {} disabled by configuration", check.id());
            return;
        }
        for kind in check.required_tokens() {
            if !check.default_tokens().contains(kind) {
                warn!(
                    "check {} requires token {} outside its default set",
                    check.id(),
                    kind
                );
            }
        }
        self.checks.push(check);
    }

    /// Number of registered checks
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Lint one parsed tree, visiting every node depth-first
    pub fn lint_tree(&mut self, root: &AstNode) -> LintResult {
        debug!(
            "linting tree rooted at {} with {} check(s)",
            root.kind(),
            self.checks.len()
        );
        let mut result = LintResult::default();
        walk(&mut self.checks, &self.config, root, &mut result);
        result
    }
}

/// Depth-first walk: dispatch the node to every interested check, then
/// recurse into its children. Nested class declarations are therefore
/// visited on their own, independently of the enclosing class.
fn walk(
    checks: &mut [Box<dyn Check>],
    config: &Config,
    node: &AstNode,
    result: &mut LintResult,
) {
    for check in checks.iter_mut() {
        if !check.default_tokens().contains(&node.kind()) {
            continue;
        }
        trace!(
            "check {} visiting {} at {}:{}",
            check.id(),
            node.kind(),
            node.line(),
            node.column()
        );

        let mut collector = DiagnosticCollector::new();
        check.visit_node(node, &mut collector);

        for finding in collector.into_findings() {
            let severity = config
                .get_severity_override(check.id())
                .unwrap_or_else(|| check.default_severity());
            let message = match check.message_text(&finding.message_key) {
                Some(text) => text.to_string(),
                // Unknown key: fall back to the key itself
                None => finding.message_key.clone(),
            };
            result.add(Diagnostic::new(
                check.id(),
                &finding.message_key,
                &message,
                severity,
                Location::new(finding.line, finding.column),
            ));
        }
    }

    for child in node.children() {
        walk(checks, config, child, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TokenKind;
    use crate::checks::MSG_COVARIANT_EQUALS;
    use pretty_assertions::assert_eq;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn simple_type(name: &str) -> AstNode {
        AstNode::new(TokenKind::Type, "").with_child(AstNode::new(TokenKind::Ident, name))
    }

    fn equals_method(param_type: &str, line: usize) -> AstNode {
        AstNode::new(TokenKind::MethodDef, "")
            .with_child(AstNode::new(TokenKind::Modifiers, ""))
            .with_child(simple_type("boolean"))
            .with_child(AstNode::new(TokenKind::Ident, "equals").with_position(line, 19))
            .with_child(
                AstNode::new(TokenKind::Parameters, "").with_child(
                    AstNode::new(TokenKind::ParameterDef, "")
                        .with_child(simple_type(param_type))
                        .with_child(AstNode::new(TokenKind::Ident, "o")),
                ),
            )
    }

    fn class(name: &str, members: Vec<AstNode>) -> AstNode {
        AstNode::new(TokenKind::ClassDef, "")
            .with_child(AstNode::new(TokenKind::Modifiers, ""))
            .with_child(AstNode::new(TokenKind::Ident, name))
            .with_child(AstNode::new(TokenKind::ObjBlock, "").with_children(members))
    }

    /// A compilation-unit-like root holding sibling classes.
    fn tree(classes: Vec<AstNode>) -> AstNode {
        // Any non-matching kind works as a root container for the walk
        AstNode::new(TokenKind::ObjBlock, "").with_children(classes)
    }

    #[test]
    fn test_sibling_classes_are_isolated() {
        init_logging();
        let root = tree(vec![
            class("Violating", vec![equals_method("Point", 3)]),
            class("Clean", vec![equals_method("Object", 10)]),
        ]);

        let mut engine = Engine::with_builtin_checks(Config::default());
        let result = engine.lint_tree(&root);

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].location.line, 3);
        assert_eq!(result.warning_count, 1);
        assert!(!result.has_errors());
        assert!(!result.is_clean());
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_nested_class_is_visited_independently() {
        init_logging();
        let nested = class("Inner", vec![equals_method("Inner", 8)]);
        let outer = class(
            "Outer",
            vec![equals_method("Object", 3), nested],
        );

        let mut engine = Engine::with_builtin_checks(Config::default());
        let result = engine.lint_tree(&outer);

        // Outer's canonical equals does not cover Inner
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].location.line, 8);
    }

    #[test]
    fn test_diagnostic_enrichment() {
        let root = tree(vec![class("Point", vec![equals_method("Point", 3)])]);

        let mut engine = Engine::with_builtin_checks(Config::default());
        let result = engine.lint_tree(&root);

        let diag = &result.diagnostics[0];
        assert_eq!(diag.check, "covariant-equals");
        assert_eq!(diag.message_key, MSG_COVARIANT_EQUALS);
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.message.contains("equals(java.lang.Object)"));
    }

    #[test]
    fn test_severity_override_applies() {
        let mut config = Config::default();
        config
            .checks
            .severity
            .insert("covariant-equals".to_string(), Severity::Error);

        let root = tree(vec![class("Point", vec![equals_method("Point", 3)])]);
        let mut engine = Engine::with_builtin_checks(config);
        let result = engine.lint_tree(&root);

        assert_eq!(result.diagnostics[0].severity, Severity::Error);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn test_disabled_check_is_not_registered() {
        let mut config = Config::default();
        config.checks.disabled.push("covariant-equals".to_string());

        let engine = Engine::with_builtin_checks(config);
        assert_eq!(engine.check_count(), 0);
    }

    #[test]
    fn test_disabled_check_reports_nothing() {
        let mut config = Config::default();
        config.checks.disabled.push("covariant-equals".to_string());

        let root = tree(vec![class("Point", vec![equals_method("Point", 3)])]);
        let mut engine = Engine::with_builtin_checks(config);
        let result = engine.lint_tree(&root);

        assert!(result.is_clean());
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_member_order_does_not_change_findings() {
        let members = |flip: bool| {
            let mut m = vec![
                equals_method("Point", 3),
                equals_method("Line", 5),
                equals_method("Object", 7),
            ];
            if flip {
                m.reverse();
            }
            m
        };

        for flip in [false, true] {
            let root = tree(vec![class("Point", members(flip))]);
            let mut engine = Engine::with_builtin_checks(Config::default());
            let result = engine.lint_tree(&root);
            assert!(result.is_clean(), "flip = {}", flip);
        }
    }

    #[test]
    fn test_merge_accumulates_counts() {
        let mut engine = Engine::with_builtin_checks(Config::default());

        let mut total = LintResult::default();
        total.merge(engine.lint_tree(&tree(vec![class(
            "A",
            vec![equals_method("Point", 3)],
        )])));
        total.merge(engine.lint_tree(&tree(vec![class(
            "B",
            vec![equals_method("Line", 4), equals_method("Shape", 5)],
        )])));

        assert_eq!(total.diagnostics.len(), 3);
        assert_eq!(total.warning_count, 3);
    }
}
