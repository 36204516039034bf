// Veritext CLI
// Analyze a text file (or stdin) and print the detection result as JSON.

use anyhow::{Context, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use veritext::{validate_input, DetectionEngine};

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        eprintln!(
            "Usage:\n  veritext [<path>] [--no-validate]\n\nReads the file at <path> (or stdin when omitted), runs AI-text\ndetection, and prints the result as JSON. `--no-validate` skips the\n50-word minimum / 800-word maximum check."
        );
        return Ok(());
    }

    let path = args.iter().skip(1).find(|a| !a.starts_with("--"));
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read file failed: {}", path))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin failed")?;
            buffer
        }
    };

    if !has_flag(&args, "--no-validate") {
        validate_input(&text)?;
    }

    let engine = DetectionEngine::new();
    let result = engine.analyze(&text);

    eprintln!("Verdict: {} ({:.2}%)", result.label(), result.ai_confidence);
    if let Some(family) = result.likely_model {
        eprintln!(
            "Likely model: {} ({:.2}%)",
            family.as_str(),
            result.model_confidence.unwrap_or(0.0)
        );
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
