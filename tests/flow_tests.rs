mod common;

use common::{analyze, load_fixture};
use edgelint::core::{Connection, Screen};
use edgelint::detector::analyze_flow;
use pretty_assertions::assert_eq;

#[test]
fn test_numeric_ids_are_normalized() {
    // A -> B, and B links nowhere
    let screens = load_fixture("numeric_ids.json");

    let flow = analyze_flow(&screens);

    assert_eq!(flow.dead_ends, vec!["B"]);
    assert_eq!(flow.orphan_screens, vec!["A"]);
}

#[test]
fn test_login_flow_fixture() {
    let result = analyze(&load_fixture("login_flow.json"));

    // Inbox has `"connections": null`, Settings omits the field.
    assert_eq!(result.flow_issues.dead_ends, vec!["Inbox", "Settings"]);
    assert_eq!(result.flow_issues.orphan_screens, vec!["Login Form", "Settings"]);
}

#[test]
fn test_self_link_does_not_rescue_orphan() {
    let screens = vec![
        Screen::new("a", "Carousel").with_connections(vec![Connection::to_frame("a")]),
        Screen::new("b", "Detail"),
    ];

    let flow = analyze_flow(&screens);

    assert_eq!(flow.dead_ends, vec!["Detail"]);
    assert_eq!(flow.orphan_screens, vec!["Carousel", "Detail"]);
}

#[test]
fn test_unknown_targets_are_ignored() {
    let screens = vec![Screen::new("a", "Home").with_connections(vec![Connection::to_frame("missing")])];

    let flow = analyze_flow(&screens);

    assert!(flow.dead_ends.is_empty());
    assert_eq!(flow.orphan_screens, vec!["Home"]);
}

#[test]
fn test_empty_input() {
    let flow = analyze_flow(&[]);
    assert!(flow.dead_ends.is_empty());
    assert!(flow.orphan_screens.is_empty());
}
