use std::fs;
use std::io::{self, BufWriter, Write as _};

use anyhow::{Context, Result};
use itertools::Itertools;

use divsubset::search::{best_mask, subset_sum};
use divsubset::{check, Instance, Solution};

enum Mode {
    Solve { json: bool },
    Check { input: String, output: String },
}

fn main() -> Result<()> {
    let mut json = false;
    let mut verbose = false;
    let mut check_files: Option<(String, String)> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json = true;
                i += 1;
            }
            "--verbose" | "-v" => {
                verbose = true;
                i += 1;
            }
            "--check" => {
                let input = operand(&args, i + 1);
                let output = operand(&args, i + 2);
                check_files = Some((input, output));
                i += 3;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let mode = match check_files {
        // --check only reads the plain-text forms.
        Some(_) if json => usage_and_exit(2),
        Some((input, output)) => Mode::Check { input, output },
        None => Mode::Solve { json },
    };

    match mode {
        Mode::Solve { json } => run_solve(json, verbose),
        Mode::Check { input, output } => run_check(&input, &output, verbose),
    }
}

fn run_solve(json: bool, verbose: bool) -> Result<()> {
    let text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
    let instance = if json {
        Instance::from_json(&text)?
    } else {
        Instance::parse(&text)?
    };

    let mask = best_mask(&instance.numbers);
    let solution = Solution::from_mask(mask, instance.len());
    if verbose {
        eprintln!(
            "n = {}, best mask = {:#b}, {} selected, subset sum = {}",
            instance.len(),
            mask,
            mask.len(),
            subset_sum(&instance.numbers, mask)
        );
        if mask.is_empty() {
            eprintln!("no non-empty subset qualifies");
        }
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    if json {
        writeln!(stdout, "{}", solution.to_json()?)?;
    } else {
        stdout.write_all(solution.to_line().as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn run_check(input: &str, output: &str, verbose: bool) -> Result<()> {
    let instance = Instance::parse(
        &fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?,
    )?;
    let solution = Solution::parse_line(
        &fs::read_to_string(output).with_context(|| format!("failed to read {output}"))?,
    )?;
    if verbose {
        eprintln!(
            "checking indices [{}] against {} values",
            solution.indices.iter().join(", "),
            instance.len()
        );
    }

    check(&instance, &solution).with_context(|| format!("{output} is not a valid answer"))?;
    println!("OK");
    Ok(())
}

/// File operand of `--check`; a missing operand or another flag is a usage error.
fn operand(args: &[String], i: usize) -> String {
    match args.get(i) {
        Some(arg) if !arg.starts_with('-') => arg.clone(),
        _ => usage_and_exit(2),
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  divsubset [--json] [--verbose] < INPUT\n  divsubset --check INPUT OUTPUT [--verbose]\n\nOptions:\n  --json               Read {{\"numbers\": [...]}} and write {{\"indices\": [...]}}\n  --check INPUT OUTPUT Verify a solver's OUTPUT against the INPUT instance (text form only)\n  --verbose/-v         Print search diagnostics to stderr\n"
    );
    std::process::exit(code)
}
