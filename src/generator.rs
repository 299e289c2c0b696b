use crate::error::ErrorRepr;
use crate::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Produces random strings matching a regex.
pub trait Generator {
    fn generate(&mut self, regex: &str) -> Result<String, Error>;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn generate(&mut self, regex: &str) -> Result<String, Error> {
        (**self).generate(regex)
    }
}

/// A [`Generator`] backed by `rand_regex`.
///
/// Repetitions without an upper bound are capped at `min + max_repeat`.
/// Assertions that cannot hold at their position, such as the `^` in `a^b`,
/// are reported as errors instead of being dropped from the output.
#[derive(Debug)]
pub struct RegexGenerator {
    rng: StdRng,
    max_repeat: u32,
    // the driver usually asks for the same regex round after round
    compiled: Option<(String, rand_regex::Regex)>,
}

impl RegexGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new(max_repeat: u32) -> Self {
        Self::with_rng(StdRng::from_os_rng(), max_repeat)
    }

    /// Creates a generator that yields the same strings for the same `seed`.
    pub fn seeded(seed: u64, max_repeat: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), max_repeat)
    }

    fn with_rng(rng: StdRng, max_repeat: u32) -> Self {
        Self {
            rng,
            max_repeat,
            compiled: None,
        }
    }
}

fn compile(regex: &str, max_repeat: u32) -> Result<rand_regex::Regex, Error> {
    let hir = regex_syntax::ParserBuilder::new().build().parse(regex)?;
    rand_regex::Regex::with_hir(hir, max_repeat).map_err(|e| {
        Error(match e {
            rand_regex::Error::Unsatisfiable => ErrorRepr::Unsatisfiable(regex.to_string()),
            e => ErrorRepr::Sample(e),
        })
    })
}

impl Generator for RegexGenerator {
    fn generate(&mut self, regex: &str) -> Result<String, Error> {
        let (source, compiled) = match self.compiled.take() {
            Some((source, compiled)) if source == regex => (source, compiled),
            _ => (regex.to_string(), compile(regex, self.max_repeat)?),
        };
        let generated: String = self.rng.sample(&compiled);
        self.compiled = Some((source, compiled));
        Ok(generated)
    }
}
