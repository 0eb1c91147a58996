//! Shell-style path patterns for selecting files to commit
//!
//! Matching works on the whole repository-relative path. `*` and `?` stop at
//! `/`, so `*.md` matches `README.md` but not `docs/README.md`.
//!
//! Supported syntax:
//! - `*` any run of non-separator characters
//! - `?` a single non-separator character
//! - `[abc]`, `[a-z]`, `[^a-z]` character classes; a class may name `/`
//! - `\c` the literal character `c`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub pattern: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error in pattern '{}'", self.pattern)
    }
}

impl std::error::Error for PatternError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
}

/// A compiled glob pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let bad = || PatternError {
            pattern: source.to_string(),
        };
        let mut tokens = Vec::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '*' => {
                    // consecutive stars behave like one
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                }
                '?' => tokens.push(Token::AnyChar),
                '\\' => tokens.push(Token::Literal(chars.next().ok_or_else(bad)?)),
                '[' => {
                    let negated = chars.next_if_eq(&'^').is_some();
                    let mut items = Vec::new();
                    loop {
                        match chars.next() {
                            None => return Err(bad()),
                            Some(']') if !items.is_empty() => break,
                            Some(']') | Some('-') => return Err(bad()),
                            Some(lo) => {
                                let lo = if lo == '\\' {
                                    chars.next().ok_or_else(bad)?
                                } else {
                                    lo
                                };
                                if chars.next_if_eq(&'-').is_some() {
                                    let hi = match chars.next() {
                                        None | Some(']') | Some('-') => return Err(bad()),
                                        Some('\\') => chars.next().ok_or_else(bad)?,
                                        Some(hi) => hi,
                                    };
                                    items.push(ClassItem::Range(lo, hi));
                                } else {
                                    items.push(ClassItem::Char(lo));
                                }
                            }
                        }
                    }
                    tokens.push(Token::Class { negated, items });
                }
                c => tokens.push(Token::Literal(c)),
            }
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `path` matches
    pub fn matches(&self, path: &str) -> bool {
        let text: Vec<char> = path.chars().collect();
        let (mut ti, mut si) = (0, 0);
        // position of the last `*` and the text index it currently extends to
        let mut backtrack: Option<(usize, usize)> = None;

        while si < text.len() {
            if let Some(token) = self.tokens.get(ti) {
                let c = text[si];
                let step = match token {
                    Token::AnyRun => {
                        backtrack = Some((ti, si));
                        ti += 1;
                        continue;
                    }
                    Token::Literal(l) => *l == c,
                    Token::AnyChar => c != '/',
                    Token::Class { negated, items } => class_contains(items, c) != *negated,
                };
                if step {
                    ti += 1;
                    si += 1;
                    continue;
                }
            }

            match backtrack {
                // a star never swallows a separator
                Some((star, from)) if text[from] != '/' => {
                    backtrack = Some((star, from + 1));
                    ti = star + 1;
                    si = from + 1;
                }
                _ => return false,
            }
        }

        self.tokens[ti..].iter().all(|t| *t == Token::AnyRun)
    }
}

fn class_contains(items: &[ClassItem], c: char) -> bool {
    items.iter().any(|item| match *item {
        ClassItem::Char(x) => x == c,
        ClassItem::Range(lo, hi) => lo <= c && c <= hi,
    })
}

/// Ordered list of patterns; empty means "everything"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Parse a comma-separated list, trimming items and skipping empty ones
    ///
    /// Malformed patterns are dropped with a warning, so they match nothing.
    pub fn parse(list: &str) -> Self {
        let patterns = split_patterns(list)
            .into_iter()
            .filter_map(|p| match Pattern::new(&p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("ignoring commit-files entry: {}", e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when at least one pattern matches
    pub fn matches_any(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

/// Split a comma-separated list into trimmed, non-empty items
pub fn split_patterns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
