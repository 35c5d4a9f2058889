// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Context, Result};
use modal::algorithms::SubsequenceSearcher;
use modal::config::RegistryFile;
use modal::guitar::{render_fretboard_ascii, scale_annotation, Fretboard};
use modal::music::{
    gen_conventional_scales, generate_scale_names, scale_label, scale_modes, Interval, Note,
    Scale, ScaleRegistry,
};
use std::env;

const DEFAULT_FRETS: usize = 12;

fn print_usage() {
    println!("modal - Scale explorer");
    println!();
    println!("Usage: modal [--registry FILE] COMMAND");
    println!();
    println!("Commands:");
    println!("  --scales                 List every conventional scale with its names");
    println!("  --modes <NAME>           List the modes of a registered scale");
    println!("  --name <STEP>...         Name the scale with the given steps (must close the octave)");
    println!("  --find <NAME> <STEP>...  Find the degrees of a scale where a run of steps occurs");
    println!("  --fretboard <ROOT> <NAME> [FRETS]");
    println!("                           Draw a scale on a standard-tuned fretboard (default 12 frets)");
    println!("  --help                   Show this help message");
    println!();
    println!("Options:");
    println!("  --registry <FILE>        Load extra scales from a YAML or TOML registry file");
}

fn parse_steps(args: &[String]) -> Result<Vec<i32>> {
    args.iter()
        .map(|arg| {
            arg.parse()
                .map_err(|_| anyhow!("Invalid step: {}", arg))
        })
        .collect()
}

fn lookup<'a>(registry: &'a ScaleRegistry, name: &str) -> Result<&'a Scale> {
    registry.get(name).ok_or_else(|| {
        anyhow!(
            "Unknown scale: {} (known: {})",
            name,
            registry.available_scales().join(", ")
        )
    })
}

fn step_list(scale: &Scale) -> String {
    scale
        .steps()
        .iter()
        .map(|step| step.half_steps().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn list_scales(registry: &ScaleRegistry) {
    for (index, scale) in gen_conventional_scales().enumerate() {
        let family = registry
            .family_of(&scale)
            .map(|(family, mode)| format!("{} mode {}", family.name(), mode + 1))
            .unwrap_or_else(|| "-".to_string());
        let names: Vec<String> = generate_scale_names(&scale, registry).collect();

        println!("{:>2}. [{}] {}", index + 1, step_list(&scale), scale);
        println!("    family: {}", family);
        if !names.is_empty() {
            println!("    names:  {}", names.join(", "));
        }
    }
}

fn list_modes(registry: &ScaleRegistry, name: &str) -> Result<()> {
    let scale = lookup(registry, name)?;
    for (index, mode) in scale_modes(scale).enumerate() {
        println!(
            "{}. {} [{}] {}",
            index + 1,
            scale_label(&mode, registry),
            step_list(&mode),
            mode
        );
    }
    Ok(())
}

fn name_scale(registry: &ScaleRegistry, steps: &[i32]) -> Result<()> {
    let steps: Vec<Interval> = steps.iter().copied().map(Interval).collect();
    let scale = Scale::from_closed_steps(&steps).context("Steps do not describe a scale")?;

    println!("{}", scale);
    let names: Vec<String> = generate_scale_names(&scale, registry).collect();
    if names.is_empty() {
        println!("No close reference scale");
    }
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

fn find_pattern(registry: &ScaleRegistry, name: &str, pattern: &[i32]) -> Result<()> {
    let scale = lookup(registry, name)?;
    let steps: Vec<i32> = scale.steps().iter().map(|step| step.half_steps()).collect();
    let searcher = SubsequenceSearcher::new(steps)?;
    let modes: Vec<Scale> = scale_modes(scale).collect();

    let mut found = false;
    for degree in searcher.find_subsequence_indices(pattern) {
        found = true;
        let mode = &modes[degree % modes.len()];
        println!("degree {}: {}", degree + 1, scale_label(mode, registry));
    }
    if !found {
        println!("Pattern does not occur in {}", name);
    }
    Ok(())
}

fn draw_fretboard(registry: &ScaleRegistry, root: &str, name: &str, frets: usize) -> Result<()> {
    let root: Note = root
        .parse()
        .with_context(|| format!("Invalid root note: {}", root))?;
    let scale = lookup(registry, name)?;

    println!("{} {}: {}", root, name, scale.with_root(root));
    println!();
    println!(
        "{}",
        render_fretboard_ascii(&Fretboard::standard(), frets, scale_annotation(root, scale))
    );
    Ok(())
}

fn load_registry(path: Option<&str>) -> Result<ScaleRegistry> {
    match path {
        Some(path) => RegistryFile::load(path)?.build_registry(),
        None => Ok(ScaleRegistry::with_builtins()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let registry_path = match args.iter().position(|arg| arg == "--registry") {
        Some(index) => {
            if index + 1 >= args.len() {
                bail!("--registry requires a file path");
            }
            let path = args.remove(index + 1);
            args.remove(index);
            Some(path)
        }
        None => None,
    };

    if args.is_empty() {
        println!("modal - Scale explorer");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let registry = load_registry(registry_path.as_deref())?;

    match args[0].as_str() {
        "--scales" => {
            list_scales(&registry);
        }
        "--modes" => {
            if args.len() < 2 {
                eprintln!("Error: --modes requires a scale name");
                std::process::exit(1);
            }
            list_modes(&registry, &args[1])?;
        }
        "--name" => {
            if args.len() < 2 {
                eprintln!("Error: --name requires a list of steps");
                std::process::exit(1);
            }
            name_scale(&registry, &parse_steps(&args[1..])?)?;
        }
        "--find" => {
            if args.len() < 3 {
                eprintln!("Error: --find requires a scale name and a list of steps");
                std::process::exit(1);
            }
            find_pattern(&registry, &args[1], &parse_steps(&args[2..])?)?;
        }
        "--fretboard" => {
            if args.len() < 3 {
                eprintln!("Error: --fretboard requires a root note and a scale name");
                std::process::exit(1);
            }
            let frets: usize = match args.get(3) {
                Some(frets) => frets
                    .parse()
                    .map_err(|_| anyhow!("Invalid number of frets: {}", frets))?,
                None => DEFAULT_FRETS,
            };
            draw_fretboard(&registry, &args[1], &args[2], frets)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
