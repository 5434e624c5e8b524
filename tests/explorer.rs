//! Tests for the explorer controller: selection, playback wiring and panels.
mod common;
use agentvis::error::ScenarioError;
use agentvis::explorer::{
    LogStyle, PLAY_LABEL, PLAYING_LABEL, insights_for, selector_entries,
};
use agentvis::prelude::*;
use agentvis::scenario::ColorTheme;
use common::{create_malformed_scenario, create_simple_scenario};
use std::time::Duration;

#[test]
fn test_initial_view_is_sequential_and_idle() {
    let explorer = ExplorerController::with_manual_clock().unwrap();
    let view = explorer.view();

    assert_eq!(view.scenario_id, "sequential");
    assert_eq!(view.title, "Sequential Orchestration");
    assert!(!view.is_playing);
    assert_eq!(view.cursor, -1);
    assert_eq!(view.active_node_id, None);
    assert_eq!(view.caption, None);
    assert!(!view.playable);
    assert_eq!(view.play_label, PLAY_LABEL);
    assert_eq!(view.log_style, LogStyle::idle());
    assert_eq!(view.insights.len(), 2);
}

#[test]
fn test_custom_catalog_without_sequential_starts_on_first_entry() {
    let catalog = ScenarioCatalog::from_templates(vec![create_simple_scenario()]).unwrap();
    let explorer = ExplorerController::new(catalog, ManualTimer::new()).unwrap();
    assert_eq!(explorer.selected_id(), "simple");

    let empty = ScenarioCatalog::from_templates(Vec::new()).unwrap();
    assert!(ExplorerController::new(empty, ManualTimer::new()).is_err());
}

#[test]
fn test_sequential_cannot_play() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    assert_eq!(explorer.play(), StartOutcome::NoSteps);
    assert!(!explorer.view().is_playing);
}

#[test]
fn test_rail_hive_playback_through_the_view() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("rail_hive").unwrap();
    assert!(explorer.view().playable);

    assert_eq!(explorer.play(), StartOutcome::Started);
    let view = explorer.view();
    assert!(view.is_playing);
    assert_eq!(view.cursor, 0);
    assert_eq!(view.active_node_id.as_deref(), Some("copilot"));
    assert!(view.caption.as_deref().unwrap().starts_with("[CO-PILOT]"));
    assert_eq!(view.play_label, PLAYING_LABEL);
    // Co-Pilot carries the blue theme.
    assert_eq!(view.log_style, LogStyle::idle());

    explorer.advance(Duration::from_millis(4000));
    let view = explorer.view();
    assert_eq!(view.active_node_id.as_deref(), Some("guardian"));
    assert_eq!(view.log_style, LogStyle::for_theme(Some(ColorTheme::Red)));
    assert!(explorer.render().contains(r#"class="node active draggable" data-node-id="guardian""#));

    explorer.advance(Duration::from_secs(60));
    let view = explorer.view();
    assert!(!view.is_playing);
    assert_eq!(view.cursor, -1);
    assert_eq!(view.play_label, PLAY_LABEL);
}

#[test]
fn test_switching_scenario_mid_run_cancels_playback() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("rail_hive").unwrap();
    explorer.play();
    explorer.advance(Duration::from_millis(4000));
    let stale = explorer.playback().pending_timer().unwrap();

    explorer.select("financial_swarm").unwrap();
    assert!(!explorer.view().is_playing);
    assert_eq!(explorer.view().cursor, -1);
    assert!(explorer.playback().timer().pending().is_empty());

    // Whatever was in flight for the previous scenario is ignored.
    assert_eq!(explorer.on_timer(stale), TimerOutcome::Stale);
    assert!(explorer.advance(Duration::from_secs(60)).is_empty());

    // The new scenario plays from its own first step.
    assert_eq!(explorer.play(), StartOutcome::Started);
    assert_eq!(explorer.view().active_node_id.as_deref(), Some("mgr"));
}

#[test]
fn test_reselecting_same_scenario_resets_playback_and_layout() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("rail_hive").unwrap();
    explorer.move_node("doctor", Position::new(5.0, 5.0));
    explorer.play();

    explorer.select("rail_hive").unwrap();
    assert!(!explorer.view().is_playing);
    assert_eq!(
        explorer.scenario().node("doctor").unwrap().position,
        Position::new(20.0, 80.0)
    );
}

#[test]
fn test_select_unknown_scenario_changes_nothing() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("rail_hive").unwrap();
    explorer.play();

    assert_eq!(
        explorer.select("mesh"),
        Err(ScenarioError::NotFound("mesh".to_string()))
    );
    assert_eq!(explorer.selected_id(), "rail_hive");
    assert!(explorer.view().is_playing);
}

#[test]
fn test_move_node_touches_only_that_node() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    let before = explorer.scenario().clone();

    assert!(explorer.move_node("researcher", Position::new(40.0, 60.0)));
    let after = explorer.scenario();
    for (old, new) in before.nodes.iter().zip(&after.nodes) {
        if old.id == "researcher" {
            assert_eq!(new.position, Position::new(40.0, 60.0));
        } else {
            assert_eq!(old, new);
        }
    }
    assert_eq!(before.edges, after.edges);

    // The catalog template keeps the canonical layout.
    assert_eq!(
        explorer
            .catalog()
            .get("sequential")
            .unwrap()
            .node("researcher")
            .unwrap()
            .position,
        Position::new(30.0, 50.0)
    );
}

#[test]
fn test_drag_to_uses_canvas_bounds() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    let bounds = CanvasBounds::new(0.0, 0.0, 1000.0, 600.0);

    assert_eq!(
        explorer.drag_to("researcher", 400.0, 360.0, &bounds),
        Some(Position::new(40.0, 60.0))
    );
    assert_eq!(explorer.drag_to("nobody", 400.0, 360.0, &bounds), None);
    assert!(explorer.render().contains("translate(400 360)"));
}

#[test]
fn test_drag_outside_canvas_clamps_and_moves_only_that_node() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    let before = explorer.scenario().clone();
    let bounds = CanvasBounds::new(100.0, 50.0, 800.0, 400.0);

    assert_eq!(
        explorer.drag_to("reviewer", 2000.0, 0.0, &bounds),
        Some(Position::new(100.0, 0.0))
    );
    for (old, new) in before.nodes.iter().zip(&explorer.scenario().nodes) {
        if old.id == "reviewer" {
            assert_eq!(new.position, Position::new(100.0, 0.0));
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let mut first = ExplorerController::with_manual_clock().unwrap();
    let second = ExplorerController::with_manual_clock().unwrap();

    first.move_node("user", Position::new(90.0, 90.0));
    first.select("rail_hive").unwrap();
    first.play();

    assert_eq!(second.selected_id(), "sequential");
    assert!(!second.view().is_playing);
    assert_eq!(
        second.scenario().node("user").unwrap().position,
        Position::new(10.0, 50.0)
    );
}

#[test]
fn test_step_naming_missing_node_highlights_nothing() {
    let mut scenario = create_malformed_scenario();
    // Keep the broken step but drop the dangling edge so only the step is bad.
    scenario.edges.retain(|e| e.id != "e3");
    let catalog = ScenarioCatalog::from_templates(vec![scenario]).unwrap();
    let mut explorer = ExplorerController::new(catalog, ManualTimer::new()).unwrap();

    explorer.play();
    let view = explorer.view();
    assert!(view.is_playing);
    assert_eq!(view.active_node_id, None);
    assert_eq!(view.caption.as_deref(), Some("Nobody home."));
    assert!(!explorer.render().contains("node active"));

    explorer.advance(Duration::from_millis(500));
    assert_eq!(explorer.view().active_node_id.as_deref(), Some("a"));
}

#[test]
fn test_stop_returns_to_idle() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("financial_swarm").unwrap();
    explorer.play();
    explorer.stop();
    assert!(!explorer.view().is_playing);
    assert!(explorer.advance(Duration::from_secs(30)).is_empty());
}

#[test]
fn test_insights_and_selector() {
    assert_eq!(insights_for("sequential")[0].topic, "Context Handoff");
    assert_eq!(insights_for("hierarchical").len(), 2);
    assert_eq!(insights_for("rail_hive").len(), 3);
    assert!(insights_for("financial_swarm").is_empty());
    assert!(insights_for("unknown").is_empty());

    let ids: Vec<&str> = selector_entries().iter().map(|e| e.scenario_id).collect();
    assert_eq!(ids, vec!["sequential", "hierarchical", "rail_hive"]);
}

#[test]
fn test_log_style_by_theme() {
    assert_eq!(LogStyle::for_theme(Some(ColorTheme::Purple)).border, "#a855f7");
    assert_eq!(LogStyle::for_theme(Some(ColorTheme::Green)).border, "#10b981");
    assert_eq!(LogStyle::for_theme(Some(ColorTheme::Amber)).border, "#f59e0b");
    assert_eq!(LogStyle::for_theme(Some(ColorTheme::Slate)), LogStyle::idle());
    assert_eq!(LogStyle::for_theme(None), LogStyle::idle());
}

#[test]
fn test_selecting_same_scenario_twice_renders_identically() {
    let mut explorer = ExplorerController::with_manual_clock().unwrap();
    explorer.select("hierarchical").unwrap();
    let first = explorer.render();
    explorer.select("hierarchical").unwrap();
    assert_eq!(explorer.render(), first);
}
