//! Race simulation demo command.

use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use racesim_engine::{Engine, SimConfig};
use tracing::info;

use super::roster::{demo_drivers, demo_track};

pub fn run(laps: u16, drivers: usize, seed: u32) -> Result<()> {
    info!(laps, drivers, seed, "starting demo race");
    println!("\n{}", "Running race simulation...".cyan());
    println!("Track: {}", "Autodromo Nazionale Monza".yellow());
    println!("Laps: {}", laps.to_string().yellow());
    println!("Drivers: {}", drivers.to_string().yellow());

    let mut track = demo_track();
    track.default_total_laps = laps;
    let config = SimConfig {
        track,
        drivers: demo_drivers(drivers),
        total_laps: laps,
        seed,
    };

    let mut engine = Engine::new(config)?;
    engine.start_race();

    let progress = ProgressBar::new(laps as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} lap {pos}/{len}")
            .unwrap(),
    );

    let mut last_lap = 0u16;
    while engine.state().status != racesim_core::RaceStatus::Finished {
        engine.update(0.1);
        let current_lap = engine.state().leader().map(|v| v.lap_count).unwrap_or(0);
        if current_lap != last_lap {
            progress.set_position(current_lap as u64);
            last_lap = current_lap;
        }
        if engine.state().elapsed_time > 24.0 * 3600.0 {
            break;
        }
    }
    progress.finish_with_message("race complete");

    print_leaderboard(&engine);
    Ok(())
}

fn print_leaderboard(engine: &Engine) {
    println!("\n{}", "Final classification".green().bold());
    println!("{}", "─".repeat(60));

    let state = engine.state();
    let mut order = state.driver_order.clone();
    order.sort_by_key(|id| state.vehicles[id].position);

    for id in order {
        let vehicle = &state.vehicles[&id];
        let status = if vehicle.is_retired() {
            "DNF".red().to_string()
        } else if vehicle.has_finished {
            "Finished".green().to_string()
        } else {
            "Running".yellow().to_string()
        };
        println!(
            "  P{:<3} {:<12} lap {:<3} {}",
            vehicle.position,
            id.0,
            vehicle.lap_count,
            status
        );
    }
}
