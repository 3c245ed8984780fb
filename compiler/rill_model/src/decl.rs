//! Declaration/label model.
//!
//! Every labeled rule element (`x=ID`, `xs+=expr`, implicit tracking
//! labels) becomes an accessor declaration on the generated rule
//! context. Declarations have two faces:
//! - the **storage** form: the field generated into the context class
//! - the **signature** form: what a context getter exposes, derivable
//!   without the full declaration (interface and listener stubs only
//!   need signatures)

use bitflags::bitflags;
use rill_ir::{ElementAst, ElementKind, ElementLabel};

bitflags! {
    /// Properties of a declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct DeclFlags: u8 {
        /// Compiler-synthesized, not user-authored.
        const IMPLICIT = 1 << 0;
        /// List-typed (`+=` label or repeated implicit tracking).
        const LIST = 1 << 1;
        /// Scoped to one alternative, not the whole context.
        const LOCAL = 1 << 2;
    }
}

/// A context-field declaration for one labeled element.
///
/// Shared fields (name, initializer, flags) are flattened into each
/// variant's payload; there is no base-declaration type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Decl {
    /// Singular token field (`x=ID`).
    Token {
        name: String,
        ttype: i32,
        init: Option<String>,
        flags: DeclFlags,
    },
    /// Token-list field (`xs+=ID`).
    TokenList {
        name: String,
        ttype: i32,
        init: Option<String>,
        flags: DeclFlags,
    },
    /// Singular rule-context field (`x=expr`).
    Context {
        name: String,
        ctx_type: String,
        init: Option<String>,
        flags: DeclFlags,
    },
    /// Rule-context-list field (`xs+=expr`).
    ContextList {
        name: String,
        ctx_type: String,
        init: Option<String>,
        flags: DeclFlags,
    },
}

impl Decl {
    /// The declared field name.
    pub fn name(&self) -> &str {
        match self {
            Decl::Token { name, .. }
            | Decl::TokenList { name, .. }
            | Decl::Context { name, .. }
            | Decl::ContextList { name, .. } => name,
        }
    }

    /// The declaration's flags.
    pub fn flags(&self) -> DeclFlags {
        match self {
            Decl::Token { flags, .. }
            | Decl::TokenList { flags, .. }
            | Decl::Context { flags, .. }
            | Decl::ContextList { flags, .. } => *flags,
        }
    }

    /// Derive the getter signature exposed on the generated context.
    pub fn signature(&self) -> DeclSignature {
        match self {
            Decl::Token { name, .. } => DeclSignature {
                name: name.clone(),
                ctx_type: None,
                takes_index: false,
            },
            Decl::TokenList { name, .. } => DeclSignature {
                name: name.clone(),
                ctx_type: None,
                takes_index: true,
            },
            Decl::Context { name, ctx_type, .. } => DeclSignature {
                name: name.clone(),
                ctx_type: Some(ctx_type.clone()),
                takes_index: false,
            },
            Decl::ContextList { name, ctx_type, .. } => DeclSignature {
                name: name.clone(),
                ctx_type: Some(ctx_type.clone()),
                takes_index: true,
            },
        }
    }
}

/// The signature form of a declaration: enough to generate an
/// interface or listener stub, nothing more.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclSignature {
    /// Getter name.
    pub name: String,
    /// Context class returned, or `None` for token getters.
    pub ctx_type: Option<String>,
    /// List-typed getters also accept an index argument.
    pub takes_index: bool,
}

/// Context class name generated for a parser rule (`expr` →
/// `ExprContext`).
pub fn context_type_name(rule: &str) -> String {
    let mut out = String::with_capacity(rule.len() + 7);
    let mut chars = rule.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out.push_str("Context");
    out
}

/// Build the declaration for a labeled element, or `None` for an
/// unlabeled one.
///
/// Token sets and wildcards bind token-typed labels: at runtime the
/// match produces a token whose exact type is only known dynamically,
/// so the field is token-typed with an invalid static type.
pub fn decl_for_element(element: &ElementAst) -> Option<Decl> {
    let label = element.label.as_ref()?;
    let flags = base_flags(label);
    let decl = match &element.kind {
        ElementKind::TokenRef(ttype) => token_decl(label, *ttype, flags),
        ElementKind::Set(_) | ElementKind::Wildcard => {
            token_decl(label, rill_ir::INVALID_TOKEN, flags)
        }
        ElementKind::RuleRef(rule) => {
            let ctx_type = context_type_name(rule);
            if label.is_list {
                Decl::ContextList {
                    name: label.name.clone(),
                    ctx_type,
                    init: None,
                    flags,
                }
            } else {
                Decl::Context {
                    name: label.name.clone(),
                    ctx_type,
                    init: None,
                    flags,
                }
            }
        }
    };
    Some(decl)
}

fn base_flags(label: &ElementLabel) -> DeclFlags {
    let mut flags = DeclFlags::empty();
    if label.implicit {
        flags |= DeclFlags::IMPLICIT;
    }
    if label.is_list {
        flags |= DeclFlags::LIST;
    }
    flags
}

fn token_decl(label: &ElementLabel, ttype: i32, flags: DeclFlags) -> Decl {
    if label.is_list {
        Decl::TokenList {
            name: label.name.clone(),
            ttype,
            init: None,
            flags,
        }
    } else {
        Decl::Token {
            name: label.name.clone(),
            ttype,
            init: None,
            flags,
        }
    }
}
