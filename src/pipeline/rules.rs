//! Lexical CSS rewrite rules
//!
//! The minifier is a fixed sequence of text rewrites:
//! 1. strip `/* ... */` comments (unterminated comments run to end of input),
//!    repeating until no opener is left
//! 2. collapse whitespace runs to a single space
//! 3. drop whitespace around `{`, `}`, `:`, `;` and `,`
//! 4. drop semicolons directly before `}`
//! 5. trim the result
//!
//! Later rules assume earlier ones have run. Nothing here understands CSS
//! strings or `url()` contents, so those can be rewritten too.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static COMMENT_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
static PUNCTUATION_RE: OnceLock<Regex> = OnceLock::new();
static TRAILING_SEMICOLON_RE: OnceLock<Regex> = OnceLock::new();

/// A single rewrite step of the minifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Remove `/* ... */` comments
    StripComments,
    /// Replace whitespace runs with one space
    CollapseWhitespace,
    /// Remove whitespace adjacent to structural punctuation
    TrimPunctuation,
    /// Remove `;` before `}`
    ElideTrailingSemicolons,
    /// Trim leading and trailing whitespace
    TrimEnds,
}

impl Rule {
    /// All rules in the order they must be applied
    pub const ORDERED: [Rule; 5] = [
        Rule::StripComments,
        Rule::CollapseWhitespace,
        Rule::TrimPunctuation,
        Rule::ElideTrailingSemicolons,
        Rule::TrimEnds,
    ];

    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::StripComments => "strip-comments",
            Self::CollapseWhitespace => "collapse-whitespace",
            Self::TrimPunctuation => "trim-punctuation",
            Self::ElideTrailingSemicolons => "elide-trailing-semicolons",
            Self::TrimEnds => "trim-ends",
        }
    }

    /// Apply this rule to `input`
    ///
    /// Borrows the input unchanged when the rule has nothing to rewrite.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Self::StripComments => comment_re().replace_all(input, ""),
            Self::CollapseWhitespace => whitespace_re().replace_all(input, " "),
            Self::TrimPunctuation => punctuation_re().replace_all(input, "$1"),
            Self::ElideTrailingSemicolons => trailing_semicolon_re().replace_all(input, "}"),
            Self::TrimEnds => Cow::Borrowed(input.trim()),
        }
    }
}

fn comment_re() -> &'static Regex {
    COMMENT_RE.get_or_init(|| {
        // Lazy match up to the first `*/`, or to end of input when the comment never closes.
        Regex::new(r"(?s)/\*.*?(?:\*/|\z)").expect("comment regex is valid")
    })
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"))
}

fn punctuation_re() -> &'static Regex {
    PUNCTUATION_RE
        .get_or_init(|| Regex::new(r"\s*([{}:;,])\s*").expect("punctuation regex is valid"))
}

fn trailing_semicolon_re() -> &'static Regex {
    TRAILING_SEMICOLON_RE
        .get_or_init(|| Regex::new(r";+\}").expect("trailing semicolon regex is valid"))
}

/// Minify CSS text
///
/// Total over all strings: never fails and never grows the input.
/// Callers are expected to reject blank input before calling this (see
/// [`crate::pipeline::prepare_input`] and [`crate::pipeline::MinifyPipeline`]).
///
/// # Examples
///
/// ```
/// use css_slim::pipeline::minify;
///
/// assert_eq!(minify("/* comment */ .a { color: red; }"), ".a{color:red}");
/// assert_eq!(minify(".a ,  .b {\n  margin : 0 ;\n}"), ".a,.b{margin:0}");
/// ```
pub fn minify(source: &str) -> String {
    let mut current = source.to_string();
    for rule in Rule::ORDERED {
        let before = current.len();
        current = match rule {
            Rule::StripComments => strip_comments_fully(&current),
            _ => rule.apply(&current).into_owned(),
        };
        log::debug!("{}: {} -> {} bytes", rule.name(), before, current.len());
    }
    current
}

/// Strip comments until none remain
///
/// Removing a comment can join a `/` and a `*` into a new opener, as in
/// `a//*x*/*b`, so one pass is not always enough.
fn strip_comments_fully(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        match Rule::StripComments.apply(&current) {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => current = next,
        }
    }
}
