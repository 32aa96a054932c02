use anyhow::{Context, anyhow};
use polish_grammar::{GenerationOptions, Sentence, Vocabulary};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

const DEFAULT_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Print,
    Jsonl,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "print" => Some(Command::Print),
            "jsonl" => Some(Command::Jsonl),
            _ => None,
        }
    }
}

/// Flags shared by every command.
struct Settings {
    seed: u64,
    options: GenerationOptions,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let Some(command) = Command::parse(&args[1]) else {
        eprintln!("Error: Unknown command '{}'", args[1]);
        print_usage();
        return Err(anyhow!("Unknown command"));
    };

    let (positional, settings) = parse_flags(&args[2..])?;

    let vocabulary = Vocabulary::polish().context("Failed to build the built-in vocabulary")?;
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);

    match command {
        Command::Print => {
            let count: usize = match positional.first() {
                Some(count) => count.parse().context("Failed to parse count as a number")?,
                None => DEFAULT_COUNT,
            };

            for _ in 0..count {
                let sentence = Sentence::generate(&vocabulary, &settings.options, &mut rng);
                println!("{}; {}", sentence.render(), sentence.translation());
            }
        }
        Command::Jsonl => {
            if positional.len() < 2 {
                eprintln!("Error: 'jsonl' command requires a count and an output path");
                eprintln!("Usage: generate-sentences jsonl <count> <output_path>");
                eprintln!("Example: generate-sentences jsonl 500 ./out/sentences.jsonl");
                return Err(anyhow!("Missing arguments for 'jsonl' command"));
            }

            let count: usize = positional[0]
                .parse()
                .context("Failed to parse count as a number")?;
            let output_path = PathBuf::from(&positional[1]);

            write_jsonl(&vocabulary, &settings, &mut rng, count, &output_path)?;
            println!("Wrote {count} sentences to {}", output_path.display());
        }
    }

    Ok(())
}

fn write_jsonl(
    vocabulary: &Vocabulary,
    settings: &Settings,
    rng: &mut ChaCha8Rng,
    count: usize,
    output_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create output directory {parent:?}"))?;
    }

    let file = File::create(output_path)
        .context(format!("Failed to create output file {output_path:?}"))?;
    let mut writer = BufWriter::new(file);

    for _ in 0..count {
        let pair = Sentence::generate(vocabulary, &settings.options, rng).to_pair();
        let json = serde_json::to_string(&pair)?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Splits `--seed` and `--options` out of the arguments, returning the rest in order.
fn parse_flags(args: &[String]) -> anyhow::Result<(Vec<String>, Settings)> {
    let mut positional = Vec::new();
    let mut seed = None;
    let mut options = GenerationOptions::default();

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("'--seed' requires a value")?;
                seed = Some(value.parse::<u64>().context("Failed to parse seed as a number")?);
            }
            "--options" => {
                let path = args.next().context("'--options' requires a file path")?;
                options = load_options(path)?;
            }
            _ => positional.push(arg.clone()),
        }
    }

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Generating with seed {seed}");

    Ok((positional, Settings { seed, options }))
}

fn load_options(path: &str) -> anyhow::Result<GenerationOptions> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read options file: {path}"))?;
    let options: GenerationOptions = serde_json::from_str(&content)
        .context(format!("Failed to parse options file: {path}"))?;
    options.validate()?;
    log::debug!("Loaded generation options: {options:?}");
    Ok(options)
}

fn print_usage() {
    eprintln!("Usage: generate-sentences <command> [args...] [--seed <n>] [--options <file>]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  print [count]                Print sentences with their translations");
    eprintln!("  jsonl <count> <output_path>  Write sentence pairs as JSON lines");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --seed <n>        Seed for reproducible output (random if omitted)");
    eprintln!("  --options <file>  JSON file with generation options, e.g.");
    eprintln!("                    {{\"max_adjectives\": 1, \"possessive_probability\": 0.5}}");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  generate-sentences print 40              # Print 40 random sentences");
    eprintln!("  generate-sentences print 10 --seed 7     # Same 10 sentences every run");
    eprintln!("  generate-sentences jsonl 500 out.jsonl   # Write 500 sentence pairs");
}
