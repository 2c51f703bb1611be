//! Motioncraft command-line interface.

mod cli_args;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::json;

use cli_args::{Cli, Commands};
use motioncraft_engine::generate;
use motioncraft_spec::{normalize_phases, resolve_micro, MotionSpec, SpecError};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            input,
            duration_ms,
            previous,
            output,
            pretty,
        } => cmd_generate(input.as_deref(), duration_ms, previous, output.as_deref(), pretty),
        Commands::Validate { input, json } => cmd_validate(&input, json),
    }
}

fn cmd_generate(
    input: Option<&str>,
    duration_ms: u64,
    previous: f64,
    output: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let text = input.map(read_input).transpose()?;
    let result = generate(text.as_deref(), duration_ms, previous);

    let doc = json!({
        "duration_ms": duration_ms,
        "source": result.source.as_str(),
        "seed": result.seed,
        "curve_hash": result.curve_hash,
        "samples": result.samples,
    });
    let rendered = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {path}"))?;
            eprintln!(
                "{} {} samples via {} tier -> {}",
                "generated".green().bold(),
                result.samples.len(),
                result.source,
                path
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_validate(input: &str, machine: bool) -> Result<()> {
    let text = read_input(input)?;

    match MotionSpec::from_response(&text) {
        Ok(spec) => {
            let phases = normalize_phases(&spec.phases);
            let micro = resolve_micro(&spec.micro);

            if machine {
                let doc = json!({
                    "tier": "phases",
                    "seed": spec.seed,
                    "micro": {"jitter": micro.jitter, "swing": micro.swing},
                    "phases": phases,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
                return Ok(());
            }

            println!(
                "{} structured spec: {} phase(s), seed {}",
                "ok".green().bold(),
                phases.len(),
                spec.seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "absent (not reproducible)".yellow().to_string()),
            );
            println!(
                "   micro: jitter {:.3}, swing {:.3}",
                micro.jitter, micro.swing
            );
            println!(
                "   {:<3} {:<12} {:>6} {:>6} {:>6} {:<10} {:>6} {:>6} {:>6}",
                "#", "name", "ratio", "floor", "peak", "curve", "tempo", "var", "rests"
            );
            for (i, p) in phases.iter().enumerate() {
                println!(
                    "   {:<3} {:<12} {:>6.3} {:>6.2} {:>6.2} {:<10} {:>6.2} {:>6.2} {:>6.2}",
                    i + 1,
                    p.name,
                    p.duration_ratio,
                    p.floor,
                    p.peak,
                    p.intensity_curve.as_str(),
                    p.tempo_hz,
                    p.variation,
                    p.rests
                );
            }
        }
        Err(reason) => {
            let params = motioncraft_engine::heuristic::params_from_text(&text);

            if machine {
                let doc = json!({
                    "tier": "heuristic",
                    "reason": reason.to_string(),
                    "params": {
                        "intensity": params.intensity,
                        "frequency": params.frequency,
                        "smoothness": params.smoothness,
                        "variation": params.variation,
                    },
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
                return Ok(());
            }

            println!(
                "{} no usable spec ({}); heuristic tier would run",
                "warn".yellow().bold(),
                describe(&reason),
            );
            println!(
                "   intensity {:.2}, frequency {:.2} Hz, smoothness {:.2}, variation {:.2}",
                params.intensity, params.frequency, params.smoothness, params.variation
            );
        }
    }
    Ok(())
}

fn describe(reason: &SpecError) -> String {
    match reason {
        SpecError::NoJsonObject => "no JSON object in input".to_string(),
        SpecError::NoPhases => "spec has an empty phase list".to_string(),
        SpecError::JsonParse(err) => format!("JSON did not parse: {err}"),
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}
