//! Javelin - a small, pluggable lint engine for Java syntax trees
//!
//! Javelin runs semantic checks over already-parsed Java syntax trees. It
//! does not parse source text itself: a host (parser, build tool, editor)
//! produces [`AstNode`] trees and hands them to the [`Engine`], which walks
//! each tree depth-first and dispatches nodes to every registered [`Check`]
//! interested in that node kind. Checks report raw findings (position plus
//! message key) through a [`DiagnosticSink`]; the engine enriches them with
//! check identity, message text, and configured severity.
//!
//! # Architecture
//!
//! ```text
//! Host parser -> AstNode tree -> Engine -> Check(s) -> Diagnostic(s)
//! ```
//!
//! One engine owns one set of check instances and runs on one thread. Hosts
//! linting many files in parallel build one engine per worker.
//!
//! # Example
//!
//! ```
//! use javelin::{AstNode, Config, Engine, TokenKind};
//!
//! // `class Point { boolean equals(Point p) { ... } }`, as a host parser
//! // would hand it over
//! let tree = AstNode::new(TokenKind::ClassDef, "")
//!     .with_child(AstNode::new(TokenKind::Ident, "Point"))
//!     .with_child(
//!         AstNode::new(TokenKind::ObjBlock, "").with_child(
//!             AstNode::new(TokenKind::MethodDef, "")
//!                 .with_child(AstNode::new(TokenKind::Ident, "equals").with_position(2, 12))
//!                 .with_child(
//!                     AstNode::new(TokenKind::Parameters, "").with_child(
//!                         AstNode::new(TokenKind::ParameterDef, "").with_child(
//!                             AstNode::new(TokenKind::Type, "")
//!                                 .with_child(AstNode::new(TokenKind::Ident, "Point")),
//!                         ),
//!                     ),
//!                 ),
//!         ),
//!     );
//!
//! let mut engine = Engine::with_builtin_checks(Config::default());
//! let result = engine.lint_tree(&tree);
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

pub mod ast;
pub mod check;
pub mod checks;
pub mod config;
pub mod diagnostic;
pub mod engine;

// Re-export main types
pub use ast::{AstNode, TokenKind};
pub use check::Check;
pub use checks::{builtin_checks, CovariantEqualsCheck};
pub use config::{Config, ConfigError};
pub use diagnostic::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, Finding, Location, Severity,
};
pub use engine::{Engine, LintResult};
