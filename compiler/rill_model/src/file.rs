//! Generated-file output model.
//!
//! The root the renderer walks for one generated parser or lexer file:
//! the rule-function models plus the serialized automaton payload
//! embedded verbatim. The payload is produced by the ATN-serialization
//! phase and never interpreted here.

use rill_atn::SerializedAtn;
use rill_ir::SourcePos;

use crate::decl::Decl;
use crate::error::ModelError;
use crate::left_recursion::{LeftRecursiveRule, LeftRecursiveRuleAltInfo};
use crate::nodes::SrcOp;

/// The output model for one rule function.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RuleFunction {
    /// The grammar rule's name.
    pub name: String,
    /// Context class generated for the rule.
    pub ctx_type: String,
    pub pos: SourcePos,
    /// The rule body, one op tree per construct.
    pub code: Vec<SrcOp>,
    /// Context-field declarations collected from labeled elements.
    pub decls: Vec<Decl>,
    /// Per-original-alternative rewrite metadata; only present for
    /// originally-left-recursive rules.
    pub left_recursive_alts: Option<Vec<LeftRecursiveRuleAltInfo>>,
}

impl RuleFunction {
    /// Model for an ordinary (non-left-recursive) rule.
    pub fn new(name: impl Into<String>, pos: SourcePos) -> Self {
        let name = name.into();
        let ctx_type = crate::decl::context_type_name(&name);
        RuleFunction {
            name,
            ctx_type,
            pos,
            code: Vec::new(),
            decls: Vec::new(),
            left_recursive_alts: None,
        }
    }

    /// Model for an originally-left-recursive rule, consuming the
    /// rewrite pass's alternative metadata.
    ///
    /// Fails if any alternative is missing its rewritten form; the
    /// rewrite contract requires every alternative to be rewritten
    /// before code generation.
    pub fn left_recursive(rule: LeftRecursiveRule, pos: SourcePos) -> Result<Self, ModelError> {
        let name = rule.rule().to_string();
        let alts = rule.finish()?;
        let ctx_type = crate::decl::context_type_name(&name);
        Ok(RuleFunction {
            name,
            ctx_type,
            pos,
            code: Vec::new(),
            decls: Vec::new(),
            left_recursive_alts: Some(alts),
        })
    }
}

/// Root of the output model for one generated file.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct GeneratedFile {
    /// The grammar file this output was generated from.
    pub grammar_file: String,
    /// Serialized automaton, embedded verbatim.
    pub serialized_atn: SerializedAtn,
    /// Rule-function models, in grammar order.
    pub rules: Vec<RuleFunction>,
}

impl GeneratedFile {
    /// Create the file model, attaching the opaque automaton payload.
    pub fn new(grammar_file: impl Into<String>, serialized_atn: SerializedAtn) -> Self {
        GeneratedFile {
            grammar_file: grammar_file.into(),
            serialized_atn,
            rules: Vec::new(),
        }
    }

    /// Append a rule-function model.
    pub fn add_rule(&mut self, rule: RuleFunction) {
        self.rules.push(rule);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::left_recursion::LeftRecursiveRuleAltInfo;

    #[test]
    fn left_recursive_rule_consumes_rewrite_metadata() {
        let mut rule = LeftRecursiveRule::new("e");
        rule.add_alt(LeftRecursiveRuleAltInfo::new(1, "e '+' e", 5).rewritten("'+' e[5]"));
        rule.add_alt(LeftRecursiveRuleAltInfo::new(2, "INT", 0).rewritten("INT"));

        let func = match RuleFunction::left_recursive(rule, SourcePos::new(10, 1)) {
            Ok(f) => f,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(func.name, "e");
        assert_eq!(func.ctx_type, "EContext");
        let alts = match &func.left_recursive_alts {
            Some(alts) => alts,
            None => panic!("expected rewrite metadata"),
        };
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].next_prec, 5);
    }

    #[test]
    fn incomplete_rewrite_fails_construction() {
        let mut rule = LeftRecursiveRule::new("e");
        rule.add_alt(LeftRecursiveRuleAltInfo::new(1, "e '+' e", 5));
        assert!(RuleFunction::left_recursive(rule, SourcePos::UNKNOWN).is_err());
    }

    #[test]
    fn file_model_carries_the_payload_verbatim() {
        let payload = SerializedAtn::new(vec![4, 0, 3, -1, 42]);
        let mut file = GeneratedFile::new("Expr.g4", payload.clone());
        file.add_rule(RuleFunction::new("e", SourcePos::new(10, 1)));

        assert_eq!(file.serialized_atn, payload);
        assert_eq!(file.serialized_atn.as_slice(), &[4, 0, 3, -1, 42]);
        assert_eq!(file.serialized_atn.to_string(), "4,0,3,-1,42");
        assert_eq!(file.rules.len(), 1);
    }
}
