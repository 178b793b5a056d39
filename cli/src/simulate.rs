//! Headless fast-forward of a scenario.
//!
//! Runs the engine on a fixed timestep with no sleeping, then prints the
//! final state. JSON output makes this usable from scripts.

use std::path::Path;

use chrono::Local;

use tempo_core::{AppSettings, Engine, StateSnapshot};

use crate::render;

pub fn run(
    scenario_arg: Option<&Path>,
    duration_ms: f64,
    step_ms: f64,
    json: bool,
) -> Result<(), String> {
    let settings = AppSettings::load();
    let scenario = crate::resolve_scenario(scenario_arg, &settings)?;
    let mut engine = Engine::new(scenario, &settings);

    let step_ms = step_ms.max(1.0);
    let duration_ms = duration_ms.max(0.0);
    let timer = std::time::Instant::now();

    let mut simulated = 0.0;
    let mut steps: u64 = 0;
    while simulated + step_ms <= duration_ms {
        engine.tick(step_ms);
        simulated += step_ms;
        steps += 1;
    }
    // Partial final step so the simulated span matches the request
    let leftover = duration_ms - simulated;
    if leftover > 0.0 {
        engine.tick(leftover);
        steps += 1;
    }

    let snapshot = StateSnapshot::from_engine(&engine);
    if json {
        let line = snapshot.to_json().map_err(|e| e.to_string())?;
        println!("{line}");
    } else {
        println!(
            "Simulated {:.0}ms in {} steps ({}ms wall, finished {})",
            duration_ms,
            steps,
            timer.elapsed().as_millis(),
            Local::now().format("%H:%M:%S"),
        );
        render::print_snapshot(&snapshot);
    }
    Ok(())
}
