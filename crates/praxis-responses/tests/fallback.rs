use praxis_responses::fallback::fallback_options;

#[test]
fn session_format_rule_matches_case_insensitively() {
    let options = fallback_options("What Session Format works best for you?");
    assert_eq!(options, ["In-Person", "Online", "Phone"]);
}

#[test]
fn physical_symptoms_rule_produces_clinical_list() {
    let options = fallback_options("Which physical symptoms have you experienced recently?");
    assert_eq!(options, ["Headaches", "Sleep problems", "Fatigue"]);
}

#[test]
fn psychological_tools_rule_has_five_options() {
    let options = fallback_options("Which psychological tools have you tried?");
    assert_eq!(options.len(), 5);
}

#[test]
fn first_matching_rule_wins() {
    // Both "session format" and "how often" appear; the earlier rule applies.
    let options = fallback_options("How often does your session format change?");
    assert_eq!(options, ["In-Person", "Online", "Phone"]);
}

#[test]
fn unmatched_text_defaults_to_boolean_options() {
    let options = fallback_options("Have you attended therapy before?");
    assert_eq!(options, ["Yes", "No"]);
}

#[test]
fn resolution_is_deterministic() {
    let text = "Which physical symptoms have you experienced recently?";
    assert_eq!(fallback_options(text), fallback_options(text));
}
