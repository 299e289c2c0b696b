use clap::Parser;
use log::error;
use regex_loop::{
    read_seed, Bound, BoundMode, Driver, Error, ParserOptions, RegexGenerator, ShapeParser,
    ITERATIONS, MAX_REPEAT,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Feed a JSON-lines parser its own regex-generated lines", long_about = None)]
struct Args {
    /// File whose first line seeds the loop
    #[arg(short, long, default_value = "test_data/sample.jsonl")]
    fixture: PathBuf,

    /// Number of lines to generate
    #[arg(short = 'n', long, default_value_t = ITERATIONS)]
    iterations: usize,

    /// Upper bound for unbounded repetitions
    #[arg(long, default_value_t = MAX_REPEAT)]
    max_repeat: u32,

    /// How regexes are bounded: `textual` or `syntax`
    #[arg(long, default_value_t = BoundMode::Textual)]
    bound: BoundMode,

    /// Seed for the generator, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log every parsed line
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let env = env_logger::Env::default().filter_or("REGEX_LOOP_LOG", level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

fn run(args: &Args) -> Result<(), Error> {
    let seed = read_seed(&args.fixture)?;
    let parser = ShapeParser::new(ParserOptions { debug: args.debug });
    let generator = match args.seed {
        Some(seed) => RegexGenerator::seeded(seed, args.max_repeat),
        None => RegexGenerator::new(args.max_repeat),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Driver::new(parser, generator)
        .bound(Bound::new(args.bound, args.max_repeat))
        .iterations(args.iterations)
        .run(&seed, &mut out)?;
    Ok(())
}
