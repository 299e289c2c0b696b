use crate::{Error, Game};

/// A streaming parser that describes the line it expects next as a regex.
pub trait LineParser {
    /// Parses `line`, updates the parser's state, and returns the next line's regex.
    fn parse_line(&mut self, line: &str) -> Result<String, Error>;

    /// Builds and returns everything accumulated so far.
    fn finish(&mut self) -> Result<Game, Error>;
}

impl<P: LineParser + ?Sized> LineParser for &mut P {
    fn parse_line(&mut self, line: &str) -> Result<String, Error> {
        (**self).parse_line(line)
    }

    fn finish(&mut self) -> Result<Game, Error> {
        (**self).finish()
    }
}
