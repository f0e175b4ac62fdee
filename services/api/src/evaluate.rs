use clap::Args;
use ghostjob::config::{load_dotenv, ScoringConfig, TelemetryConfig};
use ghostjob::error::AppError;
use ghostjob::scoring::{GhostJobAssessment, RawSignals, ScoringEngine};
use ghostjob::telemetry;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Job description text
    #[arg(long, conflicts_with = "description_file")]
    pub(crate) description: Option<String>,
    /// Read the job description from a file
    #[arg(long)]
    pub(crate) description_file: Option<PathBuf>,
    /// Posting age as displayed, e.g. "3 weeks ago"
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Compensation or preferences text shown next to the posting
    #[arg(long)]
    pub(crate) compensation: Option<String>,
    /// Mark the posting as reposted
    #[arg(long)]
    pub(crate) reposted: bool,
    /// Header text fragment scanned for the "Reposted" marker (repeatable)
    #[arg(long = "header")]
    pub(crate) headers: Vec<String>,
    /// Seed the score jitter for reproducible output (overrides GHOSTJOB_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    load_dotenv();
    telemetry::init(&TelemetryConfig::from_env())?;

    let signals = build_signals(&args)?;
    let scoring = scoring_config(&args)?;
    let assessment = ScoringEngine::new(scoring.jitter()).evaluate(&signals);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

/// `--seed` wins over `GHOSTJOB_SEED`; server settings are never read.
pub(crate) fn scoring_config(args: &EvaluateArgs) -> Result<ScoringConfig, AppError> {
    match args.seed {
        Some(seed) => Ok(ScoringConfig { seed: Some(seed) }),
        None => Ok(ScoringConfig::from_env()?),
    }
}

pub(crate) fn build_signals(args: &EvaluateArgs) -> Result<RawSignals, AppError> {
    let description = match (&args.description, &args.description_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let mut signals = RawSignals::new(
        description,
        args.age.clone().unwrap_or_default(),
        args.compensation.clone().unwrap_or_default(),
        args.reposted,
    );
    signals.merge_repost_marker(args.headers.iter().map(String::as_str));

    Ok(signals)
}

pub(crate) fn render_assessment(assessment: &GhostJobAssessment) -> String {
    let mut output = format!(
        "{}\n- severity {} | badge color {}\n",
        assessment.badge,
        assessment.severity.as_str(),
        assessment.color
    );

    if assessment.components.is_empty() {
        output.push_str("- no ghost job signals detected\n");
    }
    for component in &assessment.components {
        output.push_str(&format!(
            "  - {}: +{:.1} ({})\n",
            component.factor.label(),
            component.points,
            component.notes
        ));
    }

    output
}
