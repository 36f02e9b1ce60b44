// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, loads the config, hands the work to Layer 2 and prints
// the result. All business logic lives in the application layer.
//
// Global flags:
//   --config <file.json>  StudyConfig overrides
//   --data-dir <dir>      where quiz progress is stored
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Terminal prompt for the `quiz` command
pub mod interactive;

use std::{io, path::PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use crate::application::{
    config::StudyConfig,
    mcq_use_case::McqUseCase,
    plan_use_case::PlanUseCase,
    progress_use_case::ProgressUseCase,
    quiz_use_case::QuizUseCase,
    summarize_use_case::SummarizeUseCase,
    tips_use_case::TipsUseCase,
};
use crate::domain::study::Resource;
use crate::infra::config_store::{load_config, save_config};
use commands::{
    Commands, ConfigArgs, McqArgs, PlanArgs, ProgressArgs, QuizArgs, ResourcesArgs, SummarizeArgs,
    TipsArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "study-pal",
    version,
    about = "Turn study notes into summaries, multiple-choice quizzes and study plans."
)]
pub struct Cli {
    /// JSON file with StudyConfig overrides
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for quiz progress (progress.json, attempts.csv)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the config, then route to the matching handler
    pub fn run(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }

        match self.command {
            Commands::Summarize(args) => run_summarize(config, args),
            Commands::Mcq(args)       => run_mcq(&config, args),
            Commands::Quiz(args)      => run_quiz(&config, args),
            Commands::Progress(args)  => run_progress(&config, args),
            Commands::Plan(args)      => run_plan(args),
            Commands::Tips(args)      => run_tips(config, args),
            Commands::Resources(args) => run_resources(config, args),
            Commands::Config(args)    => run_config(config, args),
        }
    }
}

fn run_summarize(config: StudyConfig, args: SummarizeArgs) -> Result<()> {
    let subject  = config.subject_or_default(args.subject.as_deref());
    let use_case = SummarizeUseCase::new(config);

    if args.structured {
        let sheet = use_case.structured(&args.notes, &subject, args.words)?;
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }

    let out = use_case.summarize(&args.notes, args.words)?;
    println!("Key terms: {}", out.key_terms.join(", "));
    println!("\nSummary ({} of {} words):\n{}", out.summary_words, out.original_words, out.summary);
    Ok(())
}

fn run_mcq(config: &StudyConfig, args: McqArgs) -> Result<()> {
    let request  = McqUseCase::request_from(config, args.notes, args.count, args.seed, args.out);
    let use_case = McqUseCase::new(request);
    let questions = use_case.execute()?;

    match use_case.output_path() {
        Some(path) => println!("Saved {} questions to {}", questions.len(), path.display()),
        None       => println!("{}", serde_json::to_string_pretty(&questions)?),
    }
    Ok(())
}

fn run_quiz(config: &StudyConfig, args: QuizArgs) -> Result<()> {
    let use_case = QuizUseCase::new(config, args.questions, args.subject.as_deref(), args.count);
    let mut rng  = rand::thread_rng();

    let mut quiz = use_case.prepare(&mut rng)?;
    println!(
        "{} quiz: {} questions, starting at {} level",
        quiz.subject,
        quiz.total,
        quiz.session.level(),
    );

    interactive::run_quiz(&mut quiz.session, quiz.total, io::stdin().lock(), io::stdout().lock())?;

    if quiz.session.asked() == 0 {
        println!("No answers given, nothing recorded.");
        return Ok(());
    }

    let report = use_case.finish(&quiz.session, &mut rng)?;
    let a      = &report.attempt;
    let f      = &report.feedback;
    println!("\nScore: {}/{} ({:.0}%)", a.score, a.total_questions, a.accuracy);
    println!("{} {}", f.emoji, f.main_message);
    println!("{}", f.encouragement);
    println!("Tip: {}", f.tip);
    println!("{}", report.streak_message);
    Ok(())
}

fn run_progress(config: &StudyConfig, args: ProgressArgs) -> Result<()> {
    let report = ProgressUseCase::new(config, args.subject.as_deref()).execute(Utc::now().date_naive())?;
    let m      = &report.metrics;

    if m.total_quizzes == 0 {
        match &report.subject {
            Some(s) => println!("No quizzes recorded for {s} yet."),
            None    => println!("No quizzes recorded yet."),
        }
    } else {
        println!("Subjects:");
        for s in &report.subjects {
            println!(
                "  {:<20} {:>3} quizzes  {:>4}/{:<4} correct  {:.0}% average",
                s.subject, s.quizzes, s.correct, s.questions, s.average_accuracy,
            );
        }
        println!(
            "\nOverall: {:.0}% over {} quizzes, {} level, {}",
            m.average_accuracy,
            m.total_quizzes,
            m.level.as_str(),
            m.trend.as_str(),
        );
    }

    if !report.topics.is_empty() {
        println!("\nTopics:");
        for t in &report.topics {
            println!(
                "  {:<20} {:>3} answers  {:.0}%  {}",
                t.topic, t.attempts, t.accuracy, t.mastery.as_str(),
            );
        }
    }

    println!("\nNext steps:");
    for step in &report.next_steps {
        let size = step.count.map(|n| format!(" ({n} questions)")).unwrap_or_default();
        println!(
            "  {} {} at {} level{}: {}",
            step.kind.as_str(), step.topic, step.difficulty, size, step.reason,
        );
    }

    println!("\n{}", report.streak_message);
    Ok(())
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let (plan, written) = PlanUseCase::new(args.into()).execute()?;

    println!("Study plan: {} ({} hours, {})\n", plan.subject, plan.total_hours, plan.scenario);
    for s in &plan.sessions {
        println!("{:<22} {:<7} {:<8} {}", s.time, s.kind.as_str(), s.duration, s.activity);
    }
    println!("\nTips:");
    for tip in &plan.tips {
        println!("  - {tip}");
    }
    if let Some(path) = written {
        println!("\nCSV written to {}", path.display());
    }
    Ok(())
}

fn run_tips(config: StudyConfig, args: TipsArgs) -> Result<()> {
    let guide = TipsUseCase::new(config).execute(&args.notes, args.subject.as_deref())?;

    println!("Study tips for {}:", guide.subject);
    for tip in &guide.tips {
        println!("  - {tip}");
    }

    println!("\nTopic groups:");
    for (i, group) in guide.topics.iter().enumerate() {
        println!("  {}. {}", i + 1, group.join(", "));
    }

    println!("\nResources:");
    print_resources(&guide.resources);
    Ok(())
}

fn run_resources(config: StudyConfig, args: ResourcesArgs) -> Result<()> {
    let resources = TipsUseCase::new(config).resources(args.subject.as_deref(), args.search.as_deref());
    if resources.is_empty() {
        println!("No resources found.");
    }
    print_resources(&resources);
    Ok(())
}

fn print_resources(resources: &[Resource]) {
    for r in resources {
        println!("  {} <{}>  {}", r.title, r.url, r.description);
    }
}

fn run_config(mut config: StudyConfig, args: ConfigArgs) -> Result<()> {
    for setting in &args.settings {
        config.apply(setting)?;
    }

    match args.out {
        Some(path) => {
            save_config(&path, &config)?;
            println!("Config written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
