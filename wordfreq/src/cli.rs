// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::analysis::analyze;
use crate::core::counter::Entry;
use crate::core::ignore::{IgnoredWords, load_ignored_words};
use crate::core::report::{bottom_entries, frequency_of, top_entries, write_report};
use crate::utils::print_ranked_words;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze
    pub file: PathBuf,

    /// Number of words to show in the most/least frequent lists
    #[arg(short = 't', long, default_value = "5")]
    pub top: usize,

    /// Write the alphabetical frequency report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File of words to skip during counting (one word per line)
    #[arg(short, long)]
    pub ignore: Option<PathBuf>,

    /// Skip the interactive frequency prompt
    #[arg(short = 'n', long)]
    pub no_prompt: bool,
}

/// Runs the analysis end to end: count, report, optionally export.
///
/// # Errors
///
/// Returns an error if the input file or ignore list cannot be read, or
/// if the output file cannot be written.
pub fn run(args: Args) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read input file: {}", args.file.display()))?;

    let ignored = match args.ignore.as_deref() {
        Some(path) => load_ignored_words(path)?,
        None => IgnoredWords::new(),
    };

    let analysis = analyze(&content, &ignored);
    println!("Total # of words: {}", analysis.stats.total_words);
    println!("Total # of unique words: {}", analysis.stats.unique_words);

    let entries = analysis.counter.to_sorted_vec();

    if !args.no_prompt {
        run_query_loop(io::stdin().lock(), io::stdout(), &entries)?;
    }

    let top = top_entries(&entries, args.top);
    print_ranked_words(
        &format!("{} most frequently used words in this text:", top.len()),
        &top,
    );

    let bottom = bottom_entries(&entries, args.top);
    print_ranked_words(
        &format!("{} least frequently used words in this text:", bottom.len()),
        &bottom,
    );

    if let Some(path) = &args.output {
        write_report(path, &entries)?;
        println!("Content, arranged alphabetically, successfully outputted to the file!");
    }

    Ok(())
}

/// Interactive lookup: reads one word per line until `q` or EOF, and
/// reports how often it appears (0 when absent). Queries are trimmed
/// and lowercased to match the tokenizer's normalization.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output`
/// fails.
pub fn run_query_loop<R, W>(mut input: R, mut output: W, entries: &[Entry<String>]) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "Enter a word to get its frequency (enter 'q' to quit): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let word = line.trim().to_lowercase();
        if word == "q" {
            break;
        }
        if word.is_empty() {
            continue;
        }

        let count = frequency_of(entries, &word);
        writeln!(output, "The word '{word}' appears {count} times.\n")?;
    }
    Ok(())
}
