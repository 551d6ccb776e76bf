//! Java syntax tree node model consumed by checks.
//!
//! Trees are produced externally (by a parser, or assembled by hand in
//! tests); this module only defines the node shape and the lookups checks
//! need: kind tag, source position, ordered children, and a handful of
//! structural queries. Nodes are immutable once built.

use std::fmt;

/// Closed set of node kinds the engine and its checks dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A `class` declaration.
    ClassDef,
    /// An `interface` declaration.
    InterfaceDef,
    /// An `enum` declaration.
    EnumDef,
    /// A `new` expression; anonymous classes carry an `ObjBlock` child.
    LiteralNew,
    /// A class/interface/enum body block.
    ObjBlock,
    /// A method definition.
    MethodDef,
    /// A constructor definition.
    CtorDef,
    /// A field or local variable definition.
    VariableDef,
    /// The modifier list of a definition.
    Modifiers,
    /// An annotation inside a modifier list.
    Annotation,
    /// The `static` modifier keyword.
    LiteralStatic,
    /// The `abstract` modifier keyword.
    Abstract,
    /// The `final` modifier keyword.
    Final,
    /// The `public` modifier keyword.
    LiteralPublic,
    /// The `private` modifier keyword.
    LiteralPrivate,
    /// The `protected` modifier keyword.
    LiteralProtected,
    /// A formal parameter list.
    Parameters,
    /// A single formal parameter.
    ParameterDef,
    /// The declared type of a parameter, field, or return value.
    Type,
    /// An identifier token.
    Ident,
    /// A qualified-name dot; children are the left and right fragments.
    Dot,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ClassDef => "class-def",
            TokenKind::InterfaceDef => "interface-def",
            TokenKind::EnumDef => "enum-def",
            TokenKind::LiteralNew => "literal-new",
            TokenKind::ObjBlock => "obj-block",
            TokenKind::MethodDef => "method-def",
            TokenKind::CtorDef => "ctor-def",
            TokenKind::VariableDef => "variable-def",
            TokenKind::Modifiers => "modifiers",
            TokenKind::Annotation => "annotation",
            TokenKind::LiteralStatic => "static",
            TokenKind::Abstract => "abstract",
            TokenKind::Final => "final",
            TokenKind::LiteralPublic => "public",
            TokenKind::LiteralPrivate => "private",
            TokenKind::LiteralProtected => "protected",
            TokenKind::Parameters => "parameters",
            TokenKind::ParameterDef => "parameter-def",
            TokenKind::Type => "type",
            TokenKind::Ident => "ident",
            TokenKind::Dot => "dot",
        };
        write!(f, "{}", name)
    }
}

/// A node in a parsed Java syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    kind: TokenKind,
    text: String,
    line: usize,
    column: usize,
    children: Vec<AstNode>,
}

impl AstNode {
    /// Create a node with no position and no children.
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            line: 0,
            column: 0,
            children: Vec::new(),
        }
    }

    /// Set the source position (1-based line, 0-based column).
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    pub fn with_children(mut self, children: Vec<AstNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Node kind tag.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token text; empty for purely structural nodes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Source column (0-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Ordered child nodes.
    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// First *direct* child of the given kind, if any. Does not descend.
    pub fn find_first_token(&self, kind: TokenKind) -> Option<&AstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Iterate the direct children of the given kind.
    pub fn children_of_kind(&self, kind: TokenKind) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Whether this node or any descendant has the given kind.
    pub fn branch_contains(&self, kind: TokenKind) -> bool {
        self.kind == kind || self.children.iter().any(|c| c.branch_contains(kind))
    }

    /// Textual form of a (possibly dotted) name subtree.
    ///
    /// A `Dot` node joins its fragments with `.`, so the subtree for
    /// `java.lang.Object` yields exactly that string. Any other node yields
    /// its own token text. No import or symbol resolution happens here.
    pub fn qualified_name(&self) -> String {
        match self.kind {
            TokenKind::Dot => {
                let parts: Vec<String> =
                    self.children.iter().map(|c| c.qualified_name()).collect();
                parts.join(".")
            }
            _ => self.text.clone(),
        }
    }
}
