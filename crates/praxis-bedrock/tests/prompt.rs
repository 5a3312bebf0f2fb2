use praxis_bedrock::prompt::build_report_input;

#[test]
fn input_block_is_tagged_and_carries_metadata() {
    let input = build_report_input(
        "Jordan Rivers",
        "Adult Intake Assessment",
        "## History\n\n- Presenting concern?: Anxiety\n",
    );

    assert!(input.starts_with("<assessment_responses>"));
    assert!(input.contains("Client: Jordan Rivers"));
    assert!(input.contains("Assessment: Adult Intake Assessment"));
    assert!(input.contains("- Presenting concern?: Anxiety"));
    assert!(input.contains("</assessment_responses>"));
}

#[test]
fn summary_without_trailing_newline_still_closes_block() {
    let input = build_report_input("A", "B", "- q: a");

    assert!(input.contains("- q: a\n</assessment_responses>"));
}

#[test]
fn instruction_follows_the_block() {
    let input = build_report_input("A", "B", "");
    let tag_end = input.find("</assessment_responses>").unwrap();
    let instruction = input.find("Write the clinical report draft").unwrap();

    assert!(instruction > tag_end);
}
