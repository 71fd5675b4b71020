use super::*;

#[test]
fn stylesheet_targets_every_widget_surface() {
    for id in [PANEL_ID, HEADER_ID, CLOSE_ID, HISTORY_ID, INPUT_ROW_ID, INPUT_ID, SEND_ID, LAUNCHER_ID] {
        assert!(STYLESHEET.contains(&format!("#{id} {{")), "missing rule for #{id}");
    }
}

#[test]
fn stylesheet_aligns_user_right_and_bot_left() {
    assert!(STYLESHEET.contains(".message.user"));
    assert!(STYLESHEET.contains(".message.bot"));
    assert!(STYLESHEET.contains("align-self: flex-end"));
    assert!(STYLESHEET.contains("align-self: flex-start"));
}

#[test]
fn panel_sits_above_launcher() {
    assert!(STYLESHEET.contains("z-index: 1100"));
    assert!(STYLESHEET.contains("z-index: 1050"));
}

#[test]
fn display_maps_visibility() {
    assert_eq!(display(true), "block");
    assert_eq!(display(false), "none");
}
