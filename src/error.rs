use std::fmt;
use std::io;
use std::path::PathBuf;

/// The type of error that can occur while running the generation loop.
#[derive(Debug)]
pub struct Error(pub(crate) ErrorRepr);

impl Error {
    /// Wraps a failure reported by a third-party [`crate::LineParser`].
    pub fn parser(msg: impl Into<String>) -> Self {
        Self(ErrorRepr::Parser(msg.into()))
    }

    /// Returns `true` if the error was caused by an invalid regex.
    pub fn is_regex(&self) -> bool {
        matches!(self.0, ErrorRepr::Regex(_))
    }

    /// Returns `true` if the accumulated result had no play to report.
    pub fn is_no_plays(&self) -> bool {
        matches!(self.0, ErrorRepr::NoPlays)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorRepr::Regex(e) => Some(e),
            ErrorRepr::Json(e) => Some(e),
            ErrorRepr::Io(e) => Some(e),
            ErrorRepr::Sample(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) enum ErrorRepr {
    Regex(regex_syntax::Error),
    Json(serde_json::Error),
    Io(io::Error),
    Sample(rand_regex::Error),
    EmptyFixture(PathBuf),
    Unsatisfiable(String),
    Parser(String),
    NoPlays,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorRepr::Regex(e) => e.fmt(f),
            ErrorRepr::Json(e) => write!(f, "Line is not valid JSON: {}", e),
            ErrorRepr::Io(e) => e.fmt(f),
            ErrorRepr::Sample(e) => write!(f, "Cannot sample regex: {}", e),
            ErrorRepr::EmptyFixture(p) => write!(f, "Fixture has no seed line: {}", p.display()),
            ErrorRepr::Unsatisfiable(r) => write!(f, "No string can match regex: {}", r),
            ErrorRepr::Parser(e) => write!(f, "Parser rejected line: {}", e),
            ErrorRepr::NoPlays => write!(f, "No plays were recorded"),
        }
    }
}

impl From<regex_syntax::Error> for Error {
    fn from(e: regex_syntax::Error) -> Self {
        Self(ErrorRepr::Regex(e))
    }
}

impl From<regex_syntax::ast::Error> for Error {
    fn from(e: regex_syntax::ast::Error) -> Self {
        Self(ErrorRepr::Regex(e.into()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self(ErrorRepr::Json(e))
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self(ErrorRepr::Io(e))
    }
}
