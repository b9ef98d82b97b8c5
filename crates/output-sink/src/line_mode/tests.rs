use super::LineMode;

#[test]
fn bool_conversion_selects_newline_modes() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
}

#[test]
fn string_conversion_normalises_known_terminators() {
    assert_eq!(LineMode::from("\n"), LineMode::WithNewline);
    assert_eq!(LineMode::from(""), LineMode::WithoutNewline);
    assert_eq!(LineMode::from(String::from("\n")), LineMode::WithNewline);
    assert_eq!(LineMode::from(";"), LineMode::terminator(";"));
}

#[test]
fn terminator_text_matches_mode() {
    assert_eq!(LineMode::WithNewline.as_str(), "\n");
    assert_eq!(LineMode::WithoutNewline.as_str(), "");
    assert_eq!(LineMode::terminator(String::from("\r\n")).as_str(), "\r\n");
}

#[test]
fn default_is_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
    assert!(LineMode::default().appends_terminator());
}
