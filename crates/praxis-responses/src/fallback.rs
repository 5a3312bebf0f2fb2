//! Canonical fallback options for choice questions without persisted options.
//!
//! Older templates stored choice questions without their option lists; the
//! live completion form and the report renderer both recover the options by
//! matching keywords in the question text against this table. There is
//! exactly one copy of the table in the system — if the form and the report
//! resolved options independently, displayed answers could silently disagree
//! between the two screens.
//!
//! Rules are ordered; the first matching keyword wins. Matching is a
//! case-insensitive substring test.

const FALLBACK_RULES: &[(&str, &[&str])] = &[
    ("session format", &["In-Person", "Online", "Phone"]),
    ("physical symptoms", &["Headaches", "Sleep problems", "Fatigue"]),
    (
        "psychological tools",
        &[
            "Cognitive restructuring",
            "Mindfulness exercises",
            "Breathing techniques",
            "Journaling",
            "Behavioral activation",
        ],
    ),
    (
        "support system",
        &["Family", "Friends", "Partner", "Support group", "None"],
    ),
    (
        "how often",
        &["Daily", "Several times a week", "Weekly", "Rarely"],
    ),
];

const FALLBACK_DEFAULT: &[&str] = &["Yes", "No"];

/// Resolve the fallback option list for a question's text.
///
/// Always returns a list: questions matching no rule get the generic
/// boolean options.
pub fn fallback_options(question_text: &str) -> &'static [&'static str] {
    let lowered = question_text.to_lowercase();
    for (keyword, options) in FALLBACK_RULES {
        if lowered.contains(keyword) {
            return options;
        }
    }
    FALLBACK_DEFAULT
}
