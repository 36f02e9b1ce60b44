// ============================================================
// Layer 5b — Study Planner
// ============================================================
// Builds a one-day schedule for a subject:
//
//   9:00 AM - 9:45 AM   study   (activity from the subject table)
//   9:45 AM - 10:00 AM  break
//   10:00 AM - 10:45 AM study
//   ...
//
// One 45-minute session per requested hour (rounded up, at most
// eight), with a 15-minute break between sessions. Every fourth
// session is a review session.
//
// The plan can be exported as CSV for spreadsheets.

use chrono::NaiveDate;

use crate::domain::study::{SessionKind, StudyPlan, StudySession};

const SESSION_MINUTES: u32 = 45;
const BREAK_MINUTES:   u32 = 15;
const MAX_SESSIONS:    usize = 8;

/// Minutes after midnight of the first session (9:00 AM)
const DAY_START_MINUTES: u32 = 9 * 60;

const DEFAULT_SCENARIO: &str = "general study";

const GENERAL_TIPS: [&str; 2] = [
    "Take regular breaks to maintain focus",
    "Stay hydrated and have healthy snacks nearby",
];

const SCENARIO_TIPS_TAKEN: usize = 3;
const MAX_PLAN_TIPS:       usize = 5;

// ─── Lookup tables ────────────────────────────────────────────────────────────
/// Study activities for a subject, matched case-insensitively
fn activities_for(subject: &str) -> &'static [&'static str] {
    match subject.to_lowercase().as_str() {
        "aiml fundamentals" => &[
            "Review machine learning concepts",
            "Practice algorithm implementations",
            "Study neural network architectures",
            "Work through supervised learning examples",
            "Explore unsupervised learning techniques",
        ],
        "python basics" => &[
            "Practice Python syntax and data types",
            "Work on list and dictionary exercises",
            "Study control flow and functions",
            "Complete coding challenges",
            "Build small projects",
        ],
        "mathematics" => &[
            "Review key formulas and concepts",
            "Practice problem-solving exercises",
            "Work through example problems",
            "Create summary notes",
            "Self-test with practice problems",
        ],
        "physics" => &[
            "Study theoretical concepts",
            "Practice numerical problems",
            "Review diagrams and illustrations",
            "Apply concepts to real-world examples",
            "Solve past exam questions",
        ],
        "chemistry" => &[
            "Memorize chemical formulas",
            "Balance chemical equations",
            "Study reaction mechanisms",
            "Review periodic table trends",
            "Practice stoichiometry problems",
        ],
        "biology" => &[
            "Study biological processes",
            "Create concept maps",
            "Review diagrams and cycles",
            "Practice labeling exercises",
            "Summarize key pathways",
        ],
        "science" => &[
            "Review scientific concepts",
            "Practice experimental analysis",
            "Study diagrams and models",
            "Work through practice problems",
            "Create summary sheets",
        ],
        _ => &[
            "Active reading and note-taking",
            "Practice exercises",
            "Review and summarize",
            "Self-assessment quiz",
            "Concept mapping",
        ],
    }
}

/// Tips for a study scenario, matched case-insensitively
fn scenario_tips(scenario: &str) -> &'static [&'static str] {
    match scenario.to_lowercase().as_str() {
        "exam" => &[
            "Practice past exam questions",
            "Focus on high-weight topics",
            "Get adequate sleep before the exam",
            "Review key formulas and definitions",
            "Time yourself on practice tests",
        ],
        "homework" => &[
            "Break tasks into smaller chunks",
            "Start with the most challenging topics",
            "Check your work before submitting",
            "Use textbook examples as guides",
            "Ask for help early if stuck",
        ],
        "revision" => &[
            "Use active recall techniques",
            "Create flashcards for key concepts",
            "Teach concepts to someone else",
            "Summarize each topic in your own words",
            "Focus on weak areas first",
        ],
        "project" => &[
            "Set clear milestones and deadlines",
            "Research thoroughly before starting",
            "Document your process as you go",
            "Break the project into phases",
            "Plan for review and revision time",
        ],
        _ => &[
            "Set specific learning goals",
            "Take regular breaks",
            "Review notes within 24 hours",
            "Practice active learning techniques",
            "Track your progress",
        ],
    }
}

/// 12-hour clock: 540 → "9:00 AM", 780 → "1:00 PM"
pub fn format_clock(minutes_of_day: u32) -> String {
    let hour   = minutes_of_day / 60;
    let minute = minutes_of_day % 60;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = if hour > 12 { hour - 12 } else { hour };
    format!("{hour12}:{minute:02} {period}")
}

fn slot(start: u32, minutes: u32) -> String {
    format!("{} - {}", format_clock(start), format_clock(start + minutes))
}

// ─── Plan generation ──────────────────────────────────────────────────────────
/// Build a schedule for `hours` of study on `subject`.
///
/// An empty scenario is treated as "general study". Zero or
/// negative hours give a plan with no sessions.
pub fn generate_study_plan(subject: &str, hours: f64, scenario: &str) -> StudyPlan {
    let scenario   = if scenario.trim().is_empty() { DEFAULT_SCENARIO } else { scenario };
    let activities = activities_for(subject);

    // one session + break per hour
    let total_minutes   = hours * 60.0;
    let sessions_needed = (total_minutes / f64::from(SESSION_MINUTES + BREAK_MINUTES)).ceil();
    let session_count   = (sessions_needed.max(0.0) as usize).min(MAX_SESSIONS);

    let mut sessions = Vec::with_capacity(session_count * 2);
    let mut clock    = DAY_START_MINUTES;

    for i in 0..session_count {
        sessions.push(StudySession {
            time:     slot(clock, SESSION_MINUTES),
            activity: activities[i % activities.len()].to_string(),
            duration: format!("{SESSION_MINUTES} min"),
            kind:     if i % 4 == 3 { SessionKind::Review } else { SessionKind::Study },
        });
        clock += SESSION_MINUTES;

        if i + 1 < session_count {
            let activity = if i % 2 == 0 {
                "Short break - Stretch and hydrate"
            } else {
                "Break - Walk or rest your eyes"
            };
            sessions.push(StudySession {
                time:     slot(clock, BREAK_MINUTES),
                activity: activity.to_string(),
                duration: format!("{BREAK_MINUTES} min"),
                kind:     SessionKind::Break,
            });
            clock += BREAK_MINUTES;
        }
    }

    let tips: Vec<String> = GENERAL_TIPS
        .iter()
        .chain(scenario_tips(scenario).iter().take(SCENARIO_TIPS_TAKEN))
        .take(MAX_PLAN_TIPS)
        .map(|t| t.to_string())
        .collect();

    tracing::debug!(
        "Planned {} sessions for '{}' ({} hours, {})",
        session_count,
        subject,
        hours,
        scenario,
    );

    StudyPlan {
        subject: subject.to_string(),
        total_hours: hours,
        scenario: scenario.to_string(),
        sessions,
        tips,
    }
}

/// Render `plan` as CSV, stamped with the `generated` date.
///
/// Layout:
///   title line, total hours, generation date, blank line,
///   header row, one quoted row per session, blank line,
///   "Tips:" and one quoted tip per line.
pub fn plan_to_csv(plan: &StudyPlan, generated: NaiveDate) -> String {
    let mut lines: Vec<String> = vec![
        format!("Study Plan for {} - {}", plan.subject, plan.scenario),
        format!("Total Hours: {}", plan.total_hours),
        format!("Generated: {}", generated.format("%Y-%m-%d")),
        String::new(),
        "Time,Activity,Duration,Type".to_string(),
    ];

    lines.extend(plan.sessions.iter().map(|s| {
        [s.time.as_str(), s.activity.as_str(), s.duration.as_str(), s.kind.as_str()]
            .iter()
            .map(|cell| quote(cell))
            .collect::<Vec<_>>()
            .join(",")
    }));

    lines.push(String::new());
    lines.push("Tips:".to_string());
    lines.extend(plan.tips.iter().map(|t| quote(t)));

    lines.join("\n")
}

/// Wrap a CSV cell in quotes, doubling any embedded quotes
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Suggested file name, e.g. "study_plan_Organic_Chemistry.csv"
pub fn csv_file_name(plan: &StudyPlan) -> String {
    let subject = plan.subject.split_whitespace().collect::<Vec<_>>().join("_");
    format!("study_plan_{subject}.csv")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(9 * 60), "9:00 AM");
        assert_eq!(format_clock(9 * 60 + 45), "9:45 AM");
        assert_eq!(format_clock(12 * 60), "12:00 PM");
        assert_eq!(format_clock(13 * 60 + 5), "1:05 PM");
    }

    #[test]
    fn test_two_hour_plan() {
        let plan = generate_study_plan("Physics", 2.0, "exam");

        assert_eq!(plan.sessions.len(), 3);
        assert_eq!(plan.sessions[0].time, "9:00 AM - 9:45 AM");
        assert_eq!(plan.sessions[0].activity, "Study theoretical concepts");
        assert_eq!(plan.sessions[0].kind, SessionKind::Study);

        assert_eq!(plan.sessions[1].time, "9:45 AM - 10:00 AM");
        assert_eq!(plan.sessions[1].kind, SessionKind::Break);
        assert_eq!(plan.sessions[1].activity, "Short break - Stretch and hydrate");

        assert_eq!(plan.sessions[2].time, "10:00 AM - 10:45 AM");
        assert_eq!(plan.sessions[2].duration, "45 min");

        assert_eq!(plan.tips.len(), 5);
        assert_eq!(plan.tips[2], "Practice past exam questions");
    }

    #[test]
    fn test_every_fourth_session_is_review() {
        let plan    = generate_study_plan("Biology", 5.0, "revision");
        let studies = plan.study_sessions().collect::<Vec<_>>();
        assert_eq!(studies.len(), 5);
        assert_eq!(studies[3].kind, SessionKind::Review);
        assert!(studies.iter().enumerate().all(|(i, s)| (i == 3) == (s.kind == SessionKind::Review)));
    }

    #[test]
    fn test_sessions_are_capped_at_eight() {
        let plan = generate_study_plan("History", 12.0, "");
        assert_eq!(plan.study_sessions().count(), 8);
        // seven breaks between eight sessions
        assert_eq!(plan.sessions.len(), 15);
        assert_eq!(plan.scenario, "general study");
        assert_eq!(plan.sessions[14].time, "4:00 PM - 4:45 PM");
    }

    #[test]
    fn test_fractional_hours_round_up() {
        let plan = generate_study_plan("Chemistry", 1.5, "homework");
        assert_eq!(plan.study_sessions().count(), 2);
    }

    #[test]
    fn test_unknown_subject_uses_default_activities() {
        let plan = generate_study_plan("Art History", 1.0, "exam");
        assert_eq!(plan.sessions[0].activity, "Active reading and note-taking");
        assert!(generate_study_plan("Art", 0.0, "exam").sessions.is_empty());
    }

    #[test]
    fn test_plan_to_csv_layout() {
        let plan = generate_study_plan("Physics", 1.0, "exam");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let csv  = plan_to_csv(&plan, date);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Study Plan for Physics - exam");
        assert_eq!(lines[1], "Total Hours: 1");
        assert_eq!(lines[2], "Generated: 2024-03-09");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Time,Activity,Duration,Type");
        assert_eq!(lines[5], "\"9:00 AM - 9:45 AM\",\"Study theoretical concepts\",\"45 min\",\"study\"");
        assert_eq!(lines[7], "Tips:");
        assert_eq!(lines[8], "\"Take regular breaks to maintain focus\"");
        assert_eq!(lines.len(), 8 + plan.tips.len());
    }

    #[test]
    fn test_csv_file_name() {
        let plan = generate_study_plan("Organic  Chemistry", 1.0, "exam");
        assert_eq!(csv_file_name(&plan), "study_plan_Organic_Chemistry.csv");
    }
}
