//! Exclude-pattern compilation.
//!
//! The branch exclude filter is a space-separated list of name globs where
//! `*` is the only wildcard. The list compiles once per scan into a single
//! anchored regex alternation; matching a branch name is then one regex
//! probe with no per-reference allocation.

use regex::Regex;

/// An immutable matcher over branch names, compiled from the
/// space-separated glob list of a retention policy.
///
/// Matching is case-sensitive and anchored at both ends: the whole name
/// must match a whole token, never a substring. Tokens are ORed together.
/// An empty list (or one made entirely of empty tokens from repeated
/// spaces) matches nothing.
#[derive(Debug, Clone)]
pub struct CompiledExcludePattern {
    /// `None` when no token survived compilation; matches nothing.
    regex: Option<Regex>,
}

impl CompiledExcludePattern {
    /// Compiles a space-separated glob list into a matcher.
    ///
    /// Each token becomes one alternative: literal runs are escaped so
    /// regex metacharacters in branch names stay literal, and each run of
    /// adjacent `*` collapses to a single any-characters segment.
    /// Compilation is infallible; malformed input simply contributes no
    /// match.
    #[must_use]
    pub fn compile(filter: &str) -> Self {
        let alternatives: Vec<String> = filter
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(token_to_regex)
            .collect();

        if alternatives.is_empty() {
            return Self { regex: None };
        }

        let source = format!("\\A(?:{})\\z", alternatives.join("|"));
        // The source is built exclusively from escaped literals and ".*",
        // so compilation cannot fail on user input.
        Self {
            regex: Regex::new(&source).ok(),
        }
    }

    /// Returns `true` if `name` matches any token of the compiled list.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Returns `true` if the compiled pattern can never match.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

/// Translates one glob token into a regex alternative.
fn token_to_regex(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 8);
    let mut literal = String::new();
    let mut prev_star = false;

    for ch in token.chars() {
        if ch == '*' {
            if !literal.is_empty() {
                out.push_str(&regex::escape(&literal));
                literal.clear();
            }
            // Adjacent stars collapse to one any-run segment.
            if !prev_star {
                out.push_str(".*");
            }
            prev_star = true;
        } else {
            literal.push(ch);
            prev_star = false;
        }
    }
    if !literal.is_empty() {
        out.push_str(&regex::escape(&literal));
    }
    out
}
