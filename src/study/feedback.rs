// ============================================================
// Layer 5b — Motivational Feedback
// ============================================================
// Encouragement printed after a quiz. The accuracy band picks
// the message pool:
//
//   >= 90%  excellent
//   >= 70%  good
//   >= 50%  moderate
//   else    needs work
//
// Below 70% the learner also gets a random study tip.


use crate::domain::progress::accuracy_percent;
use crate::domain::study::MotivationalFeedback;
use crate::domain::traits::RandomSource;

/// (message, emoji)
type Template = (&'static str, &'static str);

const EXCELLENT: [Template; 4] = [
    ("Outstanding performance! You're mastering this subject!", "🌟"),
    ("Incredible work! Keep pushing those boundaries!", "🚀"),
    ("You're on fire! Your dedication is paying off!", "🔥"),
    ("Exceptional! You've really got a handle on this!", "💫"),
];

const GOOD: [Template; 4] = [
    ("Great job! You're making solid progress!", "👏"),
    ("Well done! Keep up the momentum!", "💪"),
    ("Nice work! You're getting stronger!", "⭐"),
    ("Good effort! Every step counts!", "🎯"),
];

const MODERATE: [Template; 4] = [
    ("You're on the right track! Keep practicing!", "📚"),
    ("Good attempt! Review the tricky parts and try again!", "💡"),
    ("Progress takes time. You're learning!", "🌱"),
    ("Keep going! Each attempt makes you stronger!", "🔄"),
];

const NEEDS_WORK: [Template; 4] = [
    ("Don't give up! Every expert was once a beginner!", "💭"),
    ("Learning is a journey. Take your time!", "🛤️"),
    ("Review the material and try again. You've got this!", "📖"),
    ("Mistakes help us learn. Keep pushing!", "🌈"),
];

const IMPROVEMENT_TIPS: [&str; 5] = [
    "Take a short break, then review what you missed.",
    "Try explaining the concepts out loud to solidify learning.",
    "Create flashcards for the questions you got wrong.",
    "Watch a video tutorial on the challenging topics.",
    "Practice similar questions to reinforce your knowledge.",
];

const KEEP_GOING_TIP: &str = "Keep up your excellent study habits!";

/// Below this accuracy a random improvement tip is shown
const TIP_THRESHOLD: f64 = 70.0;

fn templates_for(accuracy: f64) -> &'static [Template] {
    if accuracy >= 90.0 {
        &EXCELLENT
    } else if accuracy >= 70.0 {
        &GOOD
    } else if accuracy >= 50.0 {
        &MODERATE
    } else {
        &NEEDS_WORK
    }
}

fn encouragements_for(subject: &str) -> &'static [&'static str] {
    match subject.to_lowercase().as_str() {
        "aiml fundamentals" => &[
            "AI concepts take time to sink in - you're doing great!",
            "Machine learning is complex. Your persistence is admirable!",
            "Every neural network expert started where you are!",
        ],
        "python basics" => &[
            "Python is a fantastic skill to have. Keep coding!",
            "Every line of code is progress. You're becoming a programmer!",
            "Debugging is learning. Keep experimenting!",
        ],
        "mathematics" => &[
            "Math builds on itself. Your practice will compound!",
            "Problem-solving skills are developing with each question!",
            "Numbers are your friends - keep practicing!",
        ],
        "physics" => &[
            "Understanding physics opens up the universe!",
            "Every equation solved is a step toward mastery!",
            "Physics concepts connect to the real world - keep observing!",
        ],
        "chemistry" => &[
            "Chemistry is the study of change - and you're changing for the better!",
            "Each reaction you understand is knowledge gained!",
            "The periodic table is becoming your friend!",
        ],
        "biology" => &[
            "Life sciences are fascinating - keep exploring!",
            "Understanding biology helps you understand yourself!",
            "Every organism you learn about expands your world!",
        ],
        _ => &[
            "Learning never stops - you're on a great path!",
            "Knowledge compounds. Every session matters!",
            "Your future self will thank you for studying today!",
        ],
    }
}

/// Uniform pick from one of the static tables above, all non-empty
fn pick<'a, T, R: RandomSource>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Feedback for a quiz on `subject` where `score` of `total` were correct.
pub fn generate_motivational_feedback<R: RandomSource>(
    subject: &str,
    score:   usize,
    total:   usize,
    rng:     &mut R,
) -> MotivationalFeedback {
    let accuracy         = accuracy_percent(score, total);
    let (message, emoji) = *pick(templates_for(accuracy), rng);
    let encouragement    = *pick(encouragements_for(subject), rng);

    let tip = if accuracy < TIP_THRESHOLD {
        *pick(&IMPROVEMENT_TIPS, rng)
    } else {
        KEEP_GOING_TIP
    };

    MotivationalFeedback {
        main_message:  message.to_string(),
        emoji:         emoji.to_string(),
        encouragement: encouragement.to_string(),
        tip:           tip.to_string(),
    }
}

/// Message for a run of consecutive study days
pub fn streak_message(days: u32) -> String {
    match days {
        30.. => format!("🏆 Amazing {days}-day streak! You're unstoppable!"),
        14.. => format!("🔥 {days}-day streak! You're on fire!"),
        7..  => format!("⭐ {days}-day streak! Great consistency!"),
        3..  => format!("💪 {days}-day streak! Keep it going!"),
        _    => "🌱 Start building your study streak today!".to_string(),
    }
}
