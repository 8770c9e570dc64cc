use regex::{Regex, RegexBuilder};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("{token} may only appear as the first rule token, found at position {position}")]
    MisplacedSpecialToken { token: String, position: usize },

    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Subject tokens that mean "some kind of fiction"
pub const FICTION_TOKENS: &[&str] = &["juvenile fiction", "young adult fiction", "fiction"];

/// Subject tokens that mean "some kind of nonfiction"
pub const NONFICTION_TOKENS: &[&str] = &["juvenile nonfiction", "young adult nonfiction"];

pub const JUVENILE_TOKENS: &[&str] = &["juvenile fiction", "juvenile nonfiction"];

pub const YOUNG_ADULT_TOKENS: &[&str] = &["young adult fiction", "young adult nonfiction"];

/// One element of a rule's pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleToken {
    /// Case-insensitive exact match
    Literal(&'static str),
    /// Case-insensitive regular expression search
    Pattern(&'static str),
    /// Any member of a set of synonymous tokens
    OneOf(&'static [&'static str]),
    /// Zero or more tokens, up to the next rule token
    Anything,
    /// Exactly one token of any value
    Something,
    /// Leading only: fiction, juvenile fiction or young adult fiction
    Fiction,
    /// Leading only: anything but fiction
    Nonfiction,
    /// Leading only: juvenile fiction or juvenile nonfiction
    Juvenile,
    /// Leading only: young adult fiction or young adult nonfiction
    YoungAdult,
}

impl RuleToken {
    fn is_leading_only(self) -> bool {
        matches!(
            self,
            Self::Fiction | Self::Nonfiction | Self::Juvenile | Self::YoungAdult
        )
    }
}

impl std::fmt::Display for RuleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "\"{s}\""),
            Self::Pattern(p) => write!(f, "/{p}/"),
            Self::OneOf(set) => write!(f, "{{{}}}", set.join("|")),
            Self::Anything => write!(f, "anything"),
            Self::Something => write!(f, "something"),
            Self::Fiction => write!(f, "fiction"),
            Self::Nonfiction => write!(f, "nonfiction"),
            Self::Juvenile => write!(f, "juvenile"),
            Self::YoungAdult => write!(f, "ya"),
        }
    }
}

/// What a matching rule yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome<T> {
    Value(T),
    /// Matched, but this ruleset has no answer for the subject
    Stop,
}

impl<T> RuleOutcome<T> {
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Stop => None,
        }
    }
}

/// Rule declaration as written in a static table
pub type RuleSpec<T> = (RuleOutcome<T>, &'static [RuleToken]);

#[derive(Debug)]
enum Matcher {
    Literal(String),
    Pattern(Regex),
    OneOf(&'static [&'static str]),
    Anything,
    Something,
    Fiction,
    Nonfiction,
    Juvenile,
    YoungAdult,
}

impl Matcher {
    fn compile(token: RuleToken) -> Result<Self, RuleError> {
        Ok(match token {
            RuleToken::Literal(s) => Self::Literal(s.to_lowercase()),
            RuleToken::Pattern(p) => Self::Pattern(RegexBuilder::new(p).case_insensitive(true).build()?),
            RuleToken::OneOf(set) => Self::OneOf(set),
            RuleToken::Anything => Self::Anything,
            RuleToken::Something => Self::Something,
            RuleToken::Fiction => Self::Fiction,
            RuleToken::Nonfiction => Self::Nonfiction,
            RuleToken::Juvenile => Self::Juvenile,
            RuleToken::YoungAdult => Self::YoungAdult,
        })
    }

    /// Test a single subject token without consuming anything
    fn accepts(&self, token: &str) -> bool {
        match self {
            Self::Literal(s) => token == s,
            Self::Pattern(re) => re.is_match(token),
            Self::OneOf(set) => set.contains(&token),
            Self::Anything | Self::Something => true,
            Self::Fiction => FICTION_TOKENS.contains(&token),
            Self::Nonfiction => !FICTION_TOKENS.contains(&token),
            Self::Juvenile => JUVENILE_TOKENS.contains(&token),
            Self::YoungAdult => YOUNG_ADULT_TOKENS.contains(&token),
        }
    }
}

/// A pattern over a subject's token list plus the outcome it yields
#[derive(Debug)]
pub struct MatchingRule<T> {
    outcome: RuleOutcome<T>,
    tokens: Vec<RuleToken>,
    matchers: Vec<Matcher>,
}

impl<T> MatchingRule<T> {
    /// Build a rule
    ///
    /// # Errors
    ///
    /// Returns an error if a leading-only token appears after position 0 or a
    /// pattern fails to compile.
    pub fn new(outcome: RuleOutcome<T>, tokens: &[RuleToken]) -> Result<Self, RuleError> {
        if let Some((position, token)) = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, t)| t.is_leading_only())
        {
            return Err(RuleError::MisplacedSpecialToken {
                token: token.to_string(),
                position,
            });
        }
        let matchers = tokens
            .iter()
            .map(|&t| Matcher::compile(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            outcome,
            tokens: tokens.to_vec(),
            matchers,
        })
    }

    #[must_use]
    pub fn tokens(&self) -> &[RuleToken] {
        &self.tokens
    }

    #[must_use]
    pub fn outcome(&self) -> &RuleOutcome<T> {
        &self.outcome
    }

    /// Match lowercase subject tokens against this rule
    ///
    /// Every rule token must be satisfied; subject tokens left over after the
    /// last rule token do not prevent a match.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, subject: &[S]) -> Option<&RuleOutcome<T>> {
        let mut rules: VecDeque<&Matcher> = self.matchers.iter().collect();
        let mut remaining: VecDeque<&str> = subject.iter().map(AsRef::as_ref).collect();

        while !rules.is_empty() && !remaining.is_empty() {
            if !consume(&mut rules, &mut remaining) {
                return None;
            }
        }

        match rules.len() {
            0 => Some(&self.outcome),
            1 if matches!(rules[0], Matcher::Anything) => Some(&self.outcome),
            _ => None,
        }
    }
}

/// Pop the next rule token (and possibly more) and match it against the subject
fn consume(rules: &mut VecDeque<&Matcher>, subject: &mut VecDeque<&str>) -> bool {
    let Some(rule) = rules.pop_front() else {
        return true;
    };

    if matches!(rule, Matcher::Anything) {
        let Some(next) = rules.pop_front() else {
            // Trailing "anything" swallows the rest.
            subject.clear();
            return true;
        };
        while let Some(token) = subject.pop_front() {
            if next.accepts(token) {
                return true;
            }
        }
        return false;
    }

    let Some(token) = subject.pop_front() else {
        return false;
    };

    if matches!(rule, Matcher::Nonfiction) {
        if FICTION_TOKENS.contains(&token) {
            return false;
        }
        // Only a nonfiction marker is consumed; any other token was just a peek.
        if !NONFICTION_TOKENS.contains(&token) {
            subject.push_front(token);
        }
        return true;
    }

    rule.accepts(token)
}

/// An ordered list of rules; the first match wins
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<MatchingRule<T>>,
}

impl<T: Copy> RuleSet<T> {
    /// Compile a static rule table
    ///
    /// # Errors
    ///
    /// Returns the first construction error among the rules.
    pub fn compile(specs: &[RuleSpec<T>]) -> Result<Self, RuleError> {
        let rules = specs
            .iter()
            .map(|(outcome, tokens)| MatchingRule::new(*outcome, tokens))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }
}

impl<T> RuleSet<T> {
    /// Outcome of the first matching rule, `None` if no rule matches
    #[must_use]
    pub fn first_match<S: AsRef<str>>(&self, subject: &[S]) -> Option<&RuleOutcome<T>> {
        self.rules.iter().find_map(|rule| rule.matches(subject))
    }

    /// Value of the first matching rule; a stop rule or no match yields `None`
    #[must_use]
    pub fn value<S: AsRef<str>>(&self, subject: &[S]) -> Option<&T> {
        self.first_match(subject).and_then(RuleOutcome::value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RuleOutcome::{Stop, Value};
    use super::RuleToken::{Anything, Fiction, Juvenile, Literal, Nonfiction, OneOf, Pattern, Something, YoungAdult};
    use super::*;

    fn rule(tokens: &'static [RuleToken]) -> MatchingRule<&'static str> {
        MatchingRule::new(Value("hit"), tokens).unwrap()
    }

    fn hit(rule: &MatchingRule<&'static str>, subject: &[&str]) -> bool {
        rule.matches(subject).is_some()
    }

    #[test]
    fn test_literal_tokens_match_in_lockstep() {
        let r = rule(&[Literal("Fiction"), Literal("Romance")]);
        assert!(hit(&r, &["fiction", "romance"]));
        assert!(hit(&r, &["fiction", "romance", "historical"]));
        assert!(!hit(&r, &["fiction"]));
        assert!(!hit(&r, &["fiction", "mystery"]));
        assert!(!hit(&r, &[]));
    }

    #[test]
    fn test_pattern_and_one_of() {
        let r = rule(&[Pattern("^bibles?$"), OneOf(&["children", "youth & teen"])]);
        assert!(hit(&r, &["bibles", "youth & teen"]));
        assert!(hit(&r, &["bible", "children"]));
        assert!(!hit(&r, &["bibles", "general"]));
    }

    #[test]
    fn test_anything_finds_next_token_later() {
        let r = rule(&[Literal("fiction"), Anything, Literal("urban")]);
        assert!(hit(&r, &["fiction", "african american", "urban"]));
        assert!(hit(&r, &["fiction", "urban"]));
        assert!(!hit(&r, &["fiction", "romance", "historical"]));
    }

    #[test]
    fn test_trailing_anything_always_matches() {
        let r = rule(&[Literal("fiction"), Anything]);
        assert!(hit(&r, &["fiction"]));
        assert!(hit(&r, &["fiction", "a", "b"]));
        let only = rule(&[Anything]);
        assert!(hit(&only, &[]));
    }

    #[test]
    fn test_something_consumes_exactly_one() {
        let r = rule(&[Something, Literal("romance")]);
        assert!(hit(&r, &["fiction", "romance"]));
        assert!(!hit(&r, &["romance"]));
    }

    #[test]
    fn test_leading_special_tokens() {
        let fiction = rule(&[Fiction, Literal("romance")]);
        assert!(hit(&fiction, &["young adult fiction", "romance"]));
        assert!(!hit(&fiction, &["juvenile nonfiction", "romance"]));

        let juvenile = rule(&[Juvenile, Anything]);
        assert!(hit(&juvenile, &["juvenile nonfiction", "history"]));
        assert!(!hit(&juvenile, &["young adult nonfiction", "history"]));

        let ya = rule(&[YoungAdult, Anything]);
        assert!(hit(&ya, &["young adult fiction"]));
    }

    #[test]
    fn test_nonfiction_returns_unmarked_token() {
        let r = rule(&[Nonfiction, Literal("history")]);
        // Plain adult nonfiction has no marker, so the token is put back.
        assert!(hit(&r, &["history", "europe"]));
        // A nonfiction marker is consumed.
        assert!(hit(&r, &["juvenile nonfiction", "history"]));
        assert!(!hit(&r, &["fiction", "history"]));
        assert!(!hit(&r, &["young adult fiction", "history"]));
    }

    #[test]
    fn test_misplaced_special_token_rejected() {
        let err = MatchingRule::new(Value(1), &[Literal("history"), Nonfiction]).unwrap_err();
        assert!(matches!(
            err,
            RuleError::MisplacedSpecialToken { position: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = MatchingRule::new(Value(1), &[Pattern("(unclosed")]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern(_)));
    }

    #[test]
    fn test_ruleset_first_match_wins_and_stop_blocks() {
        let specs: &[RuleSpec<bool>] = &[
            (Stop, &[Literal("drama")]),
            (Value(true), &[Fiction]),
            (Value(false), &[Nonfiction]),
        ];
        let rules = RuleSet::compile(specs).unwrap();
        assert_eq!(rules.value(&["fiction", "romance"]), Some(&true));
        assert_eq!(rules.value(&["history"]), Some(&false));
        assert_eq!(rules.first_match(&["drama", "american"]), Some(&Stop));
        assert_eq!(rules.value(&["drama", "american"]), None);
        assert_eq!(rules.len(), 3);
    }
}
