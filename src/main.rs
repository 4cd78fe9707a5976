//! CLI binary for burst-plan.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use burst_plan::report::{render_json, render_outcome, render_tasks};
use burst_plan::source::{parse_seed, time_seed, FileSource, SyntheticSource, TaskSource};
use burst_plan::{PlanConfig, Planner};

/// Finds a set of task bursts that fits in one day.
#[derive(Parser, Debug)]
#[command(name = "burst-plan", version, about)]
struct Cli {
    /// Seed for the synthetic task list (integer, or any text to hash).
    /// Defaults to the current time.
    seed: Option<String>,

    /// Second positional argument; accepted and ignored.
    #[arg(hide = true)]
    _ignored: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read tasks from a JSON file instead of generating them.
    #[arg(short, long, conflicts_with = "seed")]
    tasks: Option<PathBuf>,

    /// Daily capacity in hours (overrides the config file).
    #[arg(long)]
    capacity: Option<f64>,

    /// Stop after evaluating this many candidate schedules.
    #[arg(long)]
    max_candidates: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "burst_plan=warn",
        1 => "burst_plan=info",
        2 => "burst_plan=debug",
        _ => "burst_plan=trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    print!("{}", run(cli)?);
    Ok(())
}

/// Loads the config file, if any, and applies command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<PlanConfig> {
    let mut config = match cli.config {
        Some(ref path) => PlanConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlanConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    if let Some(limit) = cli.max_candidates {
        config = config.with_max_candidates(limit);
    }
    config.validate()?;
    Ok(config)
}

/// Reads tasks, plans, and renders the output text.
fn run(cli: Cli) -> anyhow::Result<String> {
    let config = resolve_config(&cli)?;

    let mut source: Box<dyn TaskSource> = match cli.tasks {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let seed = cli.seed.as_deref().map(parse_seed).unwrap_or_else(time_seed);
            eprintln!("seed= {seed}");
            Box::new(SyntheticSource::new(
                seed,
                config.generator.clone(),
                config.capacity,
            ))
        }
    };
    let tasks = source
        .tasks()
        .with_context(|| format!("reading tasks from {} source", source.name()))?;

    let report = Planner::try_new(config)?.plan(&tasks);

    if cli.json {
        Ok(format!("{}\n", render_json(&report)?))
    } else {
        Ok(format!("{}{}", render_tasks(&tasks), render_outcome(&report)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("burst-plan").chain(args.iter().copied()))
    }

    fn temp_file(dir: &str, name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(dir);
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        assert_eq!(parse(&[]).unwrap().seed, None);
        assert_eq!(parse(&["42"]).unwrap().seed.as_deref(), Some("42"));

        let two = parse(&["42", "extra"]).unwrap();
        assert_eq!(two.seed.as_deref(), Some("42"));

        let err = parse(&["1", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_tasks_conflicts_with_seed() {
        let err = parse(&["--tasks", "tasks.json", "7"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(parse(&["--tasks", "tasks.json"]).is_ok());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = temp_file(
            "burst-plan-test-cli-config",
            "config.toml",
            "capacity = 9.0\nmax_candidates = 5\n",
        );
        let path_arg = path.to_string_lossy().into_owned();

        let config = resolve_config(&parse(&["--config", &path_arg]).unwrap()).unwrap();
        assert_eq!(config.capacity, 9.0);
        assert_eq!(config.max_candidates, Some(5));

        let cli = parse(&["--config", &path_arg, "--capacity", "6", "--max-candidates", "50"])
            .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.capacity, 6.0);
        assert_eq!(config.max_candidates, Some(50));
    }

    #[test]
    fn test_invalid_capacity_flag() {
        let cli = parse(&["--capacity", "0"]).unwrap();
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_sub_hour_capacity_with_task_file() {
        let path = temp_file(
            "burst-plan-test-cli-tasks",
            "tasks.json",
            r#"[{"name":"A","time":0.25,"bursts":1}]"#,
        );
        let path_arg = path.to_string_lossy().into_owned();

        let cli = parse(&["--tasks", &path_arg, "--capacity", "0.5"]).unwrap();
        let output = run(cli).unwrap();
        assert!(output.contains("A\t1\n"));
        assert!(output.contains("TOTAL: 0.25 (0.25 left)"));
    }

    #[test]
    fn test_sub_hour_capacity_rejected_for_synthetic_tasks() {
        let cli = parse(&["7", "--capacity", "0.5"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_seeded_run_is_repeatable() {
        let first = run(parse(&["1234"]).unwrap()).unwrap();
        let second = run(parse(&["1234", "ignored"]).unwrap()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(" tasks\n"));
    }

    #[test]
    fn test_json_output() {
        let output = run(parse(&["5", "--json"]).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["capacity"], 7.0);
        assert!(value["outcome"]["status"].is_string());
    }
}
