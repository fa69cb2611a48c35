use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rustml_eval::{
    DEFAULT_DELIMITER, EvalConfig, Evaluator, FEW_SHOT_EXEMPLARS, ReplayGenerator, build_prompt,
    extract_answer_with, load_problems, normalize, score_answers,
};

/// RustML GSM8K — extract, score, and evaluate free-form math answers.
#[derive(Parser)]
#[command(name = "rustml-gsm8k", version, about)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the final numeric answer from a response.
    Extract {
        /// Response text (reads from stdin if omitted and --file not given).
        text: Option<String>,

        /// Read the response from a file.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Phrase that introduces the final answer.
        #[arg(long, default_value = DEFAULT_DELIMITER)]
        delimiter: String,

        /// Strip thousands separators from the extracted answer.
        #[arg(long)]
        normalize: bool,
    },

    /// Compare the answers stated in a model response and a reference.
    Score {
        /// Model response text.
        model_text: String,

        /// Reference answer text.
        reference_text: String,

        /// Phrase that introduces the final answer.
        #[arg(long, default_value = DEFAULT_DELIMITER)]
        delimiter: String,

        /// Print the full comparison as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the few-shot chain-of-thought prompt for a question.
    Prompt {
        /// The question to append after the exemplars.
        question: String,

        /// Number of exemplars to include (0-8).
        #[arg(long, default_value_t = FEW_SHOT_EXEMPLARS.len())]
        shots: usize,
    },

    /// Score recorded model responses against a GSM8K JSONL dataset.
    Eval {
        /// GSM8K JSONL file with `question` and `answer` fields.
        #[arg(long, value_name = "PATH")]
        dataset: PathBuf,

        /// JSONL file of `{"response": ...}` objects, one per problem, in order.
        #[arg(long, value_name = "PATH")]
        responses: PathBuf,

        /// Evaluation config JSON (flags below override it).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Evaluate at most N problems.
        #[arg(long)]
        limit: Option<usize>,

        /// Phrase that introduces the final answer.
        #[arg(long)]
        delimiter: Option<String>,

        /// Number of exemplars in the prompt (0-8).
        #[arg(long)]
        shots: Option<usize>,

        /// Print the full summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_text(text: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    if let Some(t) = text {
        Ok(t.to_string())
    } else if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    } else {
        eprintln!("Reading from stdin...");
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    }
}

fn build_config(
    path: Option<&PathBuf>,
    limit: Option<usize>,
    delimiter: Option<String>,
    shots: Option<usize>,
) -> Result<EvalConfig> {
    let mut config = match path {
        Some(p) => EvalConfig::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display()))?,
        None => EvalConfig::default(),
    };
    if let Some(limit) = limit {
        config = config.with_limit(limit);
    }
    if let Some(delimiter) = delimiter {
        config = config.with_delimiter(delimiter);
    }
    if let Some(shots) = shots {
        config = config.with_num_shots(shots);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Extract {
            text,
            file,
            delimiter,
            normalize: strip,
        } => {
            let input = read_text(text.as_deref(), file.as_ref())?;
            let answer = extract_answer_with(&input, &delimiter);
            if answer.is_empty() {
                eprintln!("No number found");
            }
            if strip {
                println!("{}", normalize(&answer));
            } else {
                println!("{answer}");
            }
        }

        Command::Score {
            model_text,
            reference_text,
            delimiter,
            json,
        } => {
            let predicted = extract_answer_with(&model_text, &delimiter);
            let reference = extract_answer_with(&reference_text, &delimiter);
            let outcome = score_answers(&predicted, &reference);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if outcome.correct {
                println!("correct");
            } else {
                println!("incorrect");
            }
        }

        Command::Prompt { question, shots } => {
            let config = EvalConfig::default().with_num_shots(shots);
            config.validate().context("Invalid --shots")?;
            println!("{}", build_prompt(&question, config.num_shots));
        }

        Command::Eval {
            dataset,
            responses,
            config,
            limit,
            delimiter,
            shots,
            json,
        } => {
            let config = build_config(config.as_ref(), limit, delimiter, shots)?;
            let problems = load_problems(&dataset)
                .with_context(|| format!("Failed to load dataset: {}", dataset.display()))?;
            let mut generator = ReplayGenerator::from_jsonl(&responses)
                .with_context(|| format!("Failed to load responses: {}", responses.display()))?;
            if generator.remaining() < problems.len() {
                log::warn!(
                    "{} responses for {} problems; missing responses score as incorrect",
                    generator.remaining(),
                    problems.len()
                );
            }

            let summary = Evaluator::new(config).run(&problems, &mut generator)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let acc = &summary.accuracy;
                println!(
                    "Accuracy: {}/{} ({:.2}%)",
                    acc.correct(),
                    acc.total(),
                    acc.percent()
                );
            }
        }
    }

    Ok(())
}
