use crate::scenario::{EdgeKind, Scenario};
use itertools::Itertools;
use std::fmt::Write;

/// Formats a scenario as a plain-text listing for debugging and logs.
pub fn outline(scenario: &Scenario) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_outline(&mut output, scenario);
    output
}

fn write_outline(output: &mut String, scenario: &Scenario) -> std::fmt::Result {
    writeln!(
        output,
        "======== SCENARIO: {} ({}) ========",
        scenario.title, scenario.id
    )?;
    writeln!(output, "{}", scenario.description)?;

    writeln!(output, "\n--- NODES ---")?;
    for node in &scenario.nodes {
        let sub_label = node
            .sub_label
            .as_deref()
            .map(|s| format!(" / {}", s))
            .unwrap_or_default();
        writeln!(
            output,
            "{:<14} {:<12} ({:>5.1}, {:>5.1})  {}{}",
            node.id,
            node.kind.to_string(),
            node.position.x,
            node.position.y,
            node.label,
            sub_label
        )?;
    }

    writeln!(output, "\n--- EDGES ---")?;
    for edge in &scenario.edges {
        let flags = [
            (edge.kind != EdgeKind::Default).then(|| edge.kind.to_string()),
            edge.animated.then(|| "animated".to_string()),
        ]
        .into_iter()
        .flatten()
        .join(", ");
        writeln!(
            output,
            "{:<5} {} -> {}{}{}",
            edge.id,
            edge.source,
            edge.target,
            edge.label
                .as_deref()
                .map(|l| format!(" \"{}\"", l))
                .unwrap_or_default(),
            if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags)
            }
        )?;
    }

    if scenario.is_playable() {
        writeln!(
            output,
            "\n--- STEPS ({} ms total) ---",
            scenario.total_duration_ms()
        )?;
        for (i, step) in scenario.steps().iter().enumerate() {
            writeln!(
                output,
                "{:04}: {:<12} {:>6} ms  {}",
                i, step.active_node_id, step.duration_ms, step.caption
            )?;
        }
    }

    writeln!(output, "\n================ END OF SCENARIO ================")
}
