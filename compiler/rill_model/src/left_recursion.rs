//! Left-recursion alternative metadata.
//!
//! A left-recursive rule is rewritten upstream into an iterative,
//! precedence-guarded form (precedence climbing). This module holds
//! the per-alternative metadata the rewrite pass produces and threads
//! it, unchanged, into rule-function model construction. Nothing here
//! recomputes precedence: `next_prec` is carried exactly as assigned.

use crate::error::ModelError;

/// Metadata for one original alternative of a left-recursive rule.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LeftRecursiveRuleAltInfo {
    /// Original alternative index, 1-based.
    pub alt_num: usize,
    /// User-authored alternative label (`# label`), if any.
    pub alt_label: Option<String>,
    /// True when the alternative contributes to a labeled list context.
    pub is_list_label: bool,
    /// Rendered text of the original alternative. The grammar AST owns
    /// the authoritative node; this is display text for diagnostics
    /// and generated comments.
    pub original_text: String,
    /// The rewritten, precedence-guarded alternative. Produced by the
    /// rewrite pass; must be present before rule-function construction
    /// consumes this info.
    pub rewritten_text: Option<String>,
    /// Precedence the next recursive call inside this alternative must
    /// compare against at runtime. Assigned by the rewrite pass and
    /// propagated verbatim into the generated guard condition.
    pub next_prec: u32,
}

impl LeftRecursiveRuleAltInfo {
    /// Create info for an alternative awaiting its rewritten form.
    pub fn new(alt_num: usize, original_text: impl Into<String>, next_prec: u32) -> Self {
        LeftRecursiveRuleAltInfo {
            alt_num,
            alt_label: None,
            is_list_label: false,
            original_text: original_text.into(),
            rewritten_text: None,
            next_prec,
        }
    }

    /// Attach the user-authored alternative label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>, is_list: bool) -> Self {
        self.alt_label = Some(label.into());
        self.is_list_label = is_list;
        self
    }

    /// Record the rewritten alternative produced by the rewrite pass.
    #[must_use]
    pub fn rewritten(mut self, text: impl Into<String>) -> Self {
        self.rewritten_text = Some(text.into());
        self
    }
}

/// All alternative metadata for one originally-left-recursive rule,
/// in original alternative order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LeftRecursiveRule {
    rule: String,
    alts: Vec<LeftRecursiveRuleAltInfo>,
}

impl LeftRecursiveRule {
    /// Start collecting alternatives for a rule.
    pub fn new(rule: impl Into<String>) -> Self {
        LeftRecursiveRule {
            rule: rule.into(),
            alts: Vec::new(),
        }
    }

    /// The rule's name.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Append the next original alternative's info.
    pub fn add_alt(&mut self, info: LeftRecursiveRuleAltInfo) {
        self.alts.push(info);
    }

    /// Number of original alternatives collected.
    pub fn alt_count(&self) -> usize {
        self.alts.len()
    }

    /// The collected infos, in original alternative order.
    pub fn alts(&self) -> &[LeftRecursiveRuleAltInfo] {
        &self.alts
    }

    /// Hand the infos to rule-function construction, consumed exactly
    /// once.
    ///
    /// Verifies the half of the rewrite contract this crate owns:
    /// every alternative must carry its rewritten form. A miss is an
    /// internal-consistency failure in the rewrite pass, not a grammar
    /// error.
    pub fn finish(self) -> Result<Vec<LeftRecursiveRuleAltInfo>, ModelError> {
        for info in &self.alts {
            if info.rewritten_text.is_none() {
                return Err(ModelError::MissingRewrittenAlt {
                    rule: self.rule.clone(),
                    alt_num: info.alt_num,
                });
            }
        }
        Ok(self.alts)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn expr_rule() -> LeftRecursiveRule {
        // e : e '*' e | e '+' e | INT ;
        let mut rule = LeftRecursiveRule::new("e");
        rule.add_alt(LeftRecursiveRuleAltInfo::new(1, "e '*' e", 6).rewritten("'*' e[6]"));
        rule.add_alt(LeftRecursiveRuleAltInfo::new(2, "e '+' e", 5).rewritten("'+' e[5]"));
        rule.add_alt(LeftRecursiveRuleAltInfo::new(3, "INT", 0).rewritten("INT"));
        rule
    }

    #[test]
    fn rewrite_of_k_alts_yields_k_infos() {
        let rule = expr_rule();
        assert_eq!(rule.alt_count(), 3);
        let infos = match rule.finish() {
            Ok(infos) => infos,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(infos.len(), 3);
        assert!(infos.iter().all(|i| i.rewritten_text.is_some()));
        // alt order and precedence are preserved verbatim
        assert_eq!(infos[0].next_prec, 6);
        assert_eq!(infos[1].next_prec, 5);
        assert_eq!(infos[2].alt_num, 3);
    }

    #[test]
    fn missing_rewritten_alt_is_internal_error() {
        let mut rule = LeftRecursiveRule::new("e");
        rule.add_alt(LeftRecursiveRuleAltInfo::new(1, "e '+' e", 5));
        let err = match rule.finish() {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert_eq!(
            err,
            ModelError::MissingRewrittenAlt {
                rule: "e".to_string(),
                alt_num: 1
            }
        );
    }

    #[test]
    fn labels_and_list_flags_are_carried() {
        let info = LeftRecursiveRuleAltInfo::new(2, "e '+' e", 5)
            .with_label("add", true)
            .rewritten("'+' e[5]");
        assert_eq!(info.alt_label.as_deref(), Some("add"));
        assert!(info.is_list_label);
    }
}
