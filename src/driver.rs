use crate::error::ErrorRepr;
use crate::{Bound, Error, Game, Generator, LineParser, ITERATIONS};
use fxhash::FxHashSet;
use log::{info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Reads the first line of `path`, without its line ending.
pub fn read_seed(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let seed = line.trim_end_matches(['\n', '\r']);
    if seed.is_empty() {
        return Err(Error(ErrorRepr::EmptyFixture(path.to_path_buf())));
    }
    Ok(seed.to_string())
}

/// Alternates between a [`LineParser`] and a [`Generator`].
///
/// Starting from a seed line, the parser describes the next line as a regex,
/// the regex is bounded, the generator produces a line matching it, and that
/// line is parsed in turn.
#[derive(Debug)]
pub struct Driver<P, G> {
    parser: P,
    generator: G,
    bound: Bound,
    iterations: usize,
}

impl<P: LineParser, G: Generator> Driver<P, G> {
    pub fn new(parser: P, generator: G) -> Self {
        Self {
            parser,
            generator,
            bound: Bound::default(),
            iterations: ITERATIONS,
        }
    }

    pub fn bound(mut self, bound: Bound) -> Self {
        self.bound = bound;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Runs the loop from `seed`, writing every generated line and finally the
    /// first play's inning number to `out`.
    ///
    /// The parser sees `iterations + 1` lines: the seed, then each generated line.
    pub fn run(mut self, seed: &str, out: &mut impl Write) -> Result<Game, Error> {
        let mut regex = self.bound.apply(&self.parser.parse_line(seed)?)?;
        let mut shapes = FxHashSet::default();

        for round in 0..self.iterations {
            trace!("round {}: {}", round, regex);
            let line = self.generator.generate(&regex)?;
            writeln!(out, "{}", line)?;

            shapes.insert(regex);
            regex = self.bound.apply(&self.parser.parse_line(&line)?)?;
        }

        let game = self.parser.finish()?;
        let number = game
            .first_inning_number()
            .ok_or(Error(ErrorRepr::NoPlays))?;
        writeln!(out, "{}", number)?;

        info!(
            "{} rounds, {} distinct regexes, {} plays",
            self.iterations,
            shapes.len(),
            game.plays.len()
        );
        Ok(game)
    }
}
