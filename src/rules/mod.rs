//! Token rule matcher for hierarchical subject names.
//!
//! BISAC-style names such as `Fiction / Romance / Historical` are split into
//! lowercase tokens and matched against ordered rule tables. A rule is a list of
//! [`RuleToken`]s and an outcome; the first rule in a [`RuleSet`] that matches
//! decides. A [`RuleOutcome::Stop`] rule matches but yields no answer, which keeps
//! a subject out of every later rule in the same set.
//!
//! ## Example
//!
//! ```rust,no_run
//! use work_classifier::rules::{RuleOutcome, RuleSet, RuleSpec, RuleToken};
//!
//! const FICTION: &[RuleSpec<bool>] = &[
//!     (RuleOutcome::Stop, &[RuleToken::Literal("poetry")]),
//!     (RuleOutcome::Value(true), &[RuleToken::Fiction]),
//! ];
//! let rules = RuleSet::compile(FICTION).unwrap();
//!
//! assert_eq!(rules.value(&["fiction", "westerns"]), Some(&true));
//! ```
//!
//! [`RuleToken`]: matcher::RuleToken
//! [`RuleSet`]: matcher::RuleSet
//! [`RuleOutcome::Stop`]: matcher::RuleOutcome::Stop

pub mod matcher;

pub use matcher::{MatchingRule, RuleError, RuleOutcome, RuleSet, RuleSpec, RuleToken};
