use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_assembly::dispatching::PriorityRule;
use u_assembly::models::{Problem, ReferenceWorker};
use u_assembly::report::ScheduleReport;
use u_assembly::{GreedyScheduler, SchedulerConfig};

/// Greedy assembly-line scheduler.
#[derive(Debug, Parser)]
#[command(name = "u-assembly", version, about)]
struct Cli {
    /// Problem file (TOML). Uses the built-in sample plant when omitted.
    #[arg(short, long, value_name = "FILE")]
    problem: Option<PathBuf>,

    /// Scheduler configuration file (TOML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the reference worker strategy from the configuration.
    #[arg(long, value_enum)]
    reference_worker: Option<ReferenceArg>,

    /// Overrides the ready-set ordering from the configuration.
    #[arg(long, value_enum)]
    rule: Option<RuleArg>,

    /// Time units per Gantt chart cell.
    #[arg(long, default_value_t = 10)]
    gantt_scale: i64,

    /// Log level used when RUST_LOG is unset.
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReferenceArg {
    First,
    LeastSkilled,
    MostSkilled,
    Assigned,
}

impl From<ReferenceArg> for ReferenceWorker {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::First => Self::First,
            ReferenceArg::LeastSkilled => Self::LeastSkilled,
            ReferenceArg::MostSkilled => Self::MostSkilled,
            ReferenceArg::Assigned => Self::Assigned,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RuleArg {
    Lpt,
    Spt,
    SkillDemand,
    Fifo,
}

impl From<RuleArg> for PriorityRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Lpt => Self::Lpt,
            RuleArg::Spt => Self::Spt,
            RuleArg::SkillDemand => Self::SkillDemand,
            RuleArg::Fifo => Self::Fifo,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let problem = match &cli.problem {
        Some(path) => Problem::from_file(path)
            .with_context(|| format!("failed to load problem {}", path.display()))?,
        None => {
            info!("no problem file given, using the sample plant");
            Problem::sample()
        }
    };

    let mut config = match &cli.config {
        Some(path) => SchedulerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    if let Some(reference) = cli.reference_worker {
        config.reference_worker = reference.into();
    }
    if let Some(rule) = cli.rule {
        config.priority_rule = rule.into();
    }

    info!(
        jobs = problem.jobs.len(),
        lines = problem.lines.len(),
        workers = problem.workers.len(),
        ?config,
        "scheduling"
    );

    match GreedyScheduler::with_config(config).schedule(&problem) {
        Ok(schedule) => {
            let report = ScheduleReport::new(&problem, &schedule).with_gantt_scale(cli.gantt_scale);
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(aborted) => {
            let report =
                ScheduleReport::new(&problem, &aborted.partial).with_gantt_scale(cli.gantt_scale);
            println!("{report}");
            error!("{aborted}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}
