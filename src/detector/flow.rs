use crate::core::{FlowIssues, Screen};
use std::collections::HashSet;

/// Dead ends (no outgoing connections) and orphans (no incoming connection
/// from another screen) across one batch of screens.
///
/// Both lists keep input order, and a screen may be in both.
pub fn analyze_flow(screens: &[Screen]) -> FlowIssues {
    let targeted = inbound_targets(screens);

    let dead_ends = screens
        .iter()
        .filter(|screen| screen.connections.is_empty())
        .map(|screen| screen.name.clone())
        .collect();

    let orphan_screens = screens
        .iter()
        .filter(|screen| !targeted.contains(screen.id.as_str()))
        .map(|screen| screen.name.clone())
        .collect();

    FlowIssues {
        dead_ends,
        orphan_screens,
    }
}

/// Ids targeted by some screen other than themselves
fn inbound_targets(screens: &[Screen]) -> HashSet<&str> {
    screens
        .iter()
        .flat_map(|screen| {
            screen
                .connections
                .iter()
                .filter(move |connection| connection.target_frame_id != screen.id)
                .map(|connection| connection.target_frame_id.as_str())
        })
        .collect()
}
