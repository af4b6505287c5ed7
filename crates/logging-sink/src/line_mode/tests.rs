use super::LineMode;

#[test]
fn line_mode_conversions_round_trip() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithNewline.into();
    assert!(append);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
    assert!(LineMode::default().append_newline());
}
