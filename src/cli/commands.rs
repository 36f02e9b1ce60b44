// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   summarize  — key terms + summary, or a structured sheet
//   mcq        — generate multiple-choice questions
//   quiz       — take an adaptive quiz from a saved question set
//   progress   — dashboard, trend and learning path from past quizzes
//   plan       — build a study schedule
//   tips       — study tips, topic groups and resources
//   resources  — resource catalog by subject or search
//   config     — show or write a config file
//
// Optional flags left unset fall back to the StudyConfig
// values, so `--config` can change the defaults.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::plan_use_case::PlanRequest;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise a notes file
    Summarize(SummarizeArgs),

    /// Generate multiple-choice questions from notes
    Mcq(McqArgs),

    /// Take an adaptive quiz from a saved question set
    Quiz(QuizArgs),

    /// Report on recorded quizzes and suggest what to study next
    Progress(ProgressArgs),

    /// Build a one-day study plan
    Plan(PlanArgs),

    /// Study tips, topic groups and resources for a notes file
    Tips(TipsArgs),

    /// Free learning resources for a subject, or matching a search
    Resources(ResourcesArgs),

    /// Print the effective config, or write it with --out
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Notes file or directory (.txt, .md, .docx)
    #[arg(long)]
    pub notes: PathBuf,

    /// Target summary length in words
    #[arg(long)]
    pub words: Option<usize>,

    /// Print a structured revision sheet as JSON
    #[arg(long)]
    pub structured: bool,

    /// Subject used in revision tips
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args, Debug)]
pub struct McqArgs {
    /// Notes file or directory (.txt, .md, .docx)
    #[arg(long)]
    pub notes: PathBuf,

    /// Maximum number of questions
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible question sets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the questions to this JSON file instead of printing them
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Question set written by `mcq --out`
    #[arg(long)]
    pub questions: PathBuf,

    /// Subject the attempt is recorded under
    #[arg(long)]
    pub subject: Option<String>,

    /// Number of questions to ask
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Only report on this subject
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Subject to plan for
    #[arg(long)]
    pub subject: String,

    /// Hours available today
    #[arg(long)]
    pub hours: f64,

    /// exam, homework, revision, project or general study
    #[arg(long, default_value = "general study")]
    pub scenario: String,

    /// Export the plan as CSV (file path or directory)
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Convert CLI PlanArgs into the application-layer PlanRequest.
/// The application layer never sees clap types.
impl From<PlanArgs> for PlanRequest {
    fn from(a: PlanArgs) -> Self {
        PlanRequest {
            subject:  a.subject,
            hours:    a.hours,
            scenario: a.scenario,
            csv:      a.csv,
        }
    }
}

#[derive(Args, Debug)]
pub struct TipsArgs {
    /// Notes file or directory (.txt, .md, .docx)
    #[arg(long)]
    pub notes: PathBuf,

    /// Subject for resource suggestions
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Subject to list resources for
    #[arg(long)]
    pub subject: Option<String>,

    /// Search titles and descriptions instead
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Change a value, e.g. --set mcq_count=15 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Write the config to this JSON file instead of printing it
    #[arg(long)]
    pub out: Option<PathBuf>,
}
