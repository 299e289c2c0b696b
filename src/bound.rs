//! Rewrites unbounded quantifiers so every generated string has a finite length.

use crate::{Error, MAX_REPEAT};
use regex_syntax::ast::{self, print::Printer, Ast, RepetitionKind, RepetitionRange};
use std::{fmt, str::FromStr};

/// Replaces every `+` with `{1,10}` and every `*` with `{0,10}`.
///
/// The replacement is textual: quantifier characters inside character
/// classes and escaped ones are rewritten as well, e.g. `[a+]` becomes `[a{1,10}]`.
/// Use [`BoundMode::Syntax`] to only rewrite real repetition operators.
pub fn limit_regex(regex: &str) -> String {
    limit_regex_to(regex, MAX_REPEAT)
}

fn limit_regex_to(regex: &str, max_repeat: u32) -> String {
    regex
        .replace('+', &format!("{{1,{}}}", max_repeat))
        .replace('*', &format!("{{0,{}}}", max_repeat))
}

/// How a regex is bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundMode {
    /// Unconditional string replacement, see [`limit_regex`].
    #[default]
    Textual,
    /// Parses the regex and rewrites only repetition operators.
    Syntax,
}

impl BoundMode {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::Syntax => "syntax",
        }
    }
}

impl fmt::Display for BoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "textual" => Ok(Self::Textual),
            "syntax" => Ok(Self::Syntax),
            _ => Err(format!("unknown bound mode `{}`, expected `textual` or `syntax`", s)),
        }
    }
}

/// Bounds a regex with a configurable upper repetition limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub mode: BoundMode,
    pub max_repeat: u32,
}

impl Default for Bound {
    fn default() -> Self {
        Self {
            mode: BoundMode::default(),
            max_repeat: MAX_REPEAT,
        }
    }
}

impl Bound {
    pub fn new(mode: BoundMode, max_repeat: u32) -> Self {
        Self { mode, max_repeat }
    }

    /// Returns `regex` with every unbounded quantifier given an upper limit of `max_repeat`.
    ///
    /// Only [`BoundMode::Syntax`] can fail, when `regex` does not parse.
    pub fn apply(&self, regex: &str) -> Result<String, Error> {
        match self.mode {
            BoundMode::Textual => Ok(limit_regex_to(regex, self.max_repeat)),
            BoundMode::Syntax => {
                let mut ast = ast::parse::Parser::new().parse(regex)?;
                bound_repetitions(&mut ast, self.max_repeat);
                let mut out = String::with_capacity(regex.len());
                Printer::new()
                    .print(&ast, &mut out)
                    .expect("writing to a String never fails");
                Ok(out)
            }
        }
    }
}

fn bound_repetitions(ast: &mut Ast, max_repeat: u32) {
    let mut to_visit = vec![ast];

    while let Some(node) = to_visit.pop() {
        match node {
            Ast::Repetition(rep) => {
                if let Some(kind) = bounded_kind(&rep.op.kind, max_repeat) {
                    rep.op.kind = kind;
                }
                to_visit.push(&mut rep.ast);
            }
            Ast::Group(group) => to_visit.push(&mut group.ast),
            Ast::Alternation(alt) => to_visit.extend(alt.asts.iter_mut()),
            Ast::Concat(concat) => to_visit.extend(concat.asts.iter_mut()),
            _ => (),
        }
    }
}

fn bounded_kind(kind: &RepetitionKind, max_repeat: u32) -> Option<RepetitionKind> {
    let range = match kind {
        RepetitionKind::ZeroOrMore => RepetitionRange::Bounded(0, max_repeat),
        RepetitionKind::OneOrMore => RepetitionRange::Bounded(1, max_repeat),
        RepetitionKind::Range(RepetitionRange::AtLeast(min)) => {
            RepetitionRange::Bounded(*min, max_repeat.max(*min))
        }
        _ => return None,
    };
    Some(RepetitionKind::Range(range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn syntax(regex: &str) -> String {
        Bound::new(BoundMode::Syntax, MAX_REPEAT).apply(regex).unwrap()
    }

    #[test]
    fn textual_rewrites_quantifiers() {
        assert_eq!(limit_regex("a+b*c"), "a{1,10}b{0,10}c");
        assert_eq!(limit_regex("abc"), "abc");
        assert_eq!(limit_regex(""), "");
    }

    #[test]
    fn textual_rewrites_inside_classes() {
        // known limitation of the textual rewrite
        assert_eq!(limit_regex("[a+]"), "[a{1,10}]");
        assert_eq!(limit_regex(r"\*"), r"\{0,10}");
    }

    #[test]
    fn textual_leaves_other_quantifiers() {
        assert_eq!(limit_regex("a?b{2}c{1,3}"), "a?b{2}c{1,3}");
    }

    #[test]
    fn textual_respects_max_repeat() {
        let bound = Bound::new(BoundMode::Textual, 3);
        assert_eq!(bound.apply("x+y*").unwrap(), "x{1,3}y{0,3}");
    }

    #[test]
    fn syntax_rewrites_repetitions() {
        assert_eq!(syntax("a+b*c"), "a{1,10}b{0,10}c");
        assert_eq!(syntax("(ab)+|c*"), "(ab){1,10}|c{0,10}");
        assert_eq!(syntax("a{2,}"), "a{2,10}");
        assert_eq!(syntax("a{12,}"), "a{12,12}");
    }

    #[test]
    fn syntax_leaves_bounded_and_literals() {
        assert_eq!(syntax("[a+]"), "[a+]");
        assert_eq!(syntax(r"\+\*"), r"\+\*");
        assert_eq!(syntax("a?b{2}c{1,3}"), "a?b{2}c{1,3}");
    }

    #[test]
    fn syntax_keeps_laziness() {
        assert_eq!(syntax("a+?"), "a{1,10}?");
        assert_eq!(syntax("(?:x*?)"), "(?:x{0,10}?)");
    }

    #[test]
    fn syntax_nested() {
        assert_eq!(syntax("((a+)*)+"), "((a{1,10}){0,10}){1,10}");
    }

    #[test]
    fn syntax_rejects_invalid() {
        let err = Bound::new(BoundMode::Syntax, 10).apply("(a+").unwrap_err();
        assert!(err.is_regex());
    }

    #[test]
    fn mode_str_conversions() {
        for mode in [BoundMode::Textual, BoundMode::Syntax] {
            assert_eq!(mode, mode.to_string().parse().unwrap());
        }
        assert!("ast".parse::<BoundMode>().is_err());
    }

    proptest! {
        #[test]
        fn textual_removes_plus(s in "[a-z+]{0,32}") {
            let out = limit_regex(&s);
            prop_assert!(!out.contains('+'));
            prop_assert_eq!(out.matches("{1,10}").count(), s.matches('+').count());
        }

        #[test]
        fn textual_removes_star(s in "[a-z*]{0,32}") {
            let out = limit_regex(&s);
            prop_assert!(!out.contains('*'));
            prop_assert_eq!(out.matches("{0,10}").count(), s.matches('*').count());
        }

        #[test]
        fn textual_matches_positional_rewrite(s in "[a-c+*]{0,32}") {
            let expected: String = s
                .chars()
                .map(|c| match c {
                    '+' => "{1,10}".to_string(),
                    '*' => "{0,10}".to_string(),
                    c => c.to_string(),
                })
                .collect();
            prop_assert_eq!(limit_regex(&s), expected);
        }

        #[test]
        fn textual_identity_without_quantifiers(s in "[^+*]{0,32}") {
            prop_assert_eq!(limit_regex(&s), s);
        }
    }
}
