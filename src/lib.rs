#![allow(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]

mod bound;
mod driver;
mod error;
mod game;
mod generator;
mod parser;
mod schema;
mod shape;

pub use bound::{limit_regex, Bound, BoundMode};
pub use driver::{read_seed, Driver};
pub use error::Error;
pub use game::{Game, Inning, Play};
pub use generator::{Generator, RegexGenerator};
pub use parser::LineParser;
pub use schema::{JsonType, KeyValueType, ToRegex};
pub use shape::{ParserOptions, ShapeParser};

/// Upper bound given to unbounded repetitions.
pub const MAX_REPEAT: u32 = 10;

/// Number of generated lines per run.
pub const ITERATIONS: usize = 10;
