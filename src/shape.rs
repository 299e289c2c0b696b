use crate::schema::{JsonType, ToRegex};
use crate::{Error, Game, LineParser, Play};
use log::debug;
use serde_json::Value;

/// Options for [`ShapeParser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Log every parsed line at `debug` level.
    pub debug: bool,
}

/// A [`LineParser`] for JSON lines.
///
/// Every line must be a JSON document. The regex returned for a line matches
/// any line with the same shape: the same keys in the same order, with values
/// of the same JSON types. Objects with an `inning` object are recorded as plays.
#[derive(Debug, Default)]
pub struct ShapeParser {
    options: ParserOptions,
    game: Game,
}

impl ShapeParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            game: Game::default(),
        }
    }

    /// Plays recorded so far.
    pub fn plays(&self) -> &[Play] {
        &self.game.plays
    }

    fn record(&mut self, value: &Value) {
        self.game.lines += 1;

        let has_inning = value.get("inning").is_some_and(Value::is_object);
        if !has_inning {
            return;
        }
        match serde_json::from_value::<Play>(value.clone()) {
            Ok(play) => self.game.plays.push(play),
            Err(e) => debug!("skipping play: {}", e),
        }
    }
}

impl LineParser for ShapeParser {
    fn parse_line(&mut self, line: &str) -> Result<String, Error> {
        if self.options.debug {
            debug!("line {}: {:?}", self.game.lines, line);
        }
        let value: Value = serde_json::from_str(line)?;
        self.record(&value);
        Ok(JsonType::infer(&value).to_regex())
    }

    /// Hands over the recorded game; the parser starts over afterwards.
    fn finish(&mut self) -> Result<Game, Error> {
        Ok(std::mem::take(&mut self.game))
    }
}
