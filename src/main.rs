//! Meeble Crossing - Entry Point
//!
//! Headless driver for the game-state core. The real game embeds the
//! session in a rendering engine; this binary steps it from the
//! terminal so the gameplay rules can be exercised without one.

use meeble_crossing::combat::tables::WeaponTables;
use meeble_crossing::core::config::GameplayConfig;
use meeble_crossing::core::error::Result;
use meeble_crossing::core::types::Vec2;
use meeble_crossing::session::LevelSession;
use meeble_crossing::simulation::events::Outcome;
use meeble_crossing::simulation::tick::FrameInput;

use std::io::{self, Write};

const SEED: u64 = 42;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("meeble_crossing=debug")
        .init();

    tracing::info!("Meeble Crossing starting...");

    let mut session = LevelSession::new(GameplayConfig::default(), WeaponTables::builtin(), SEED)?;

    // Inputs held between ticks; fire/switch are one-frame edges
    let mut held = FrameInput::default();

    println!("\n=== MEEBLE CROSSING ===");
    println!("Cross the map, collect weapons, reach the checkerboard tile.");
    println!();
    println!("Commands:");
    println!("  tick / t          - Advance one frame");
    println!("  run <n>           - Advance n frames");
    println!("  left/right/up/down/stop - Set held movement");
    println!("  sprint            - Toggle sprint");
    println!("  aim <x> <y>       - Set the aim point");
    println!("  fire              - Fire the equipped weapon (one frame)");
    println!("  switch            - Cycle the equipped weapon (one frame)");
    println!("  status / s        - Show detailed status");
    println!("  json              - Dump the UI snapshot as JSON");
    println!("  restart           - Restart the level");
    println!("  quit / q          - Exit");
    println!();

    loop {
        display_status(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line == "quit" || line == "q" {
            break;
        }

        if line == "tick" || line == "t" {
            step(&mut session, &held);
            continue;
        }

        if let Some(n) = line.strip_prefix("run ") {
            if let Ok(n) = n.parse::<u32>() {
                println!("Running {} frames...", n);
                for _ in 0..n {
                    step(&mut session, &held);
                }
            } else {
                println!("Usage: run <number>");
            }
            continue;
        }

        match line {
            "left" => held.move_x = -1.0,
            "right" => held.move_x = 1.0,
            "up" => held.move_y = -1.0,
            "down" => held.move_y = 1.0,
            "stop" => {
                held.move_x = 0.0;
                held.move_y = 0.0;
            }
            "sprint" => {
                held.sprint = !held.sprint;
                println!("Sprint {}", if held.sprint { "on" } else { "off" });
            }
            "fire" => {
                let input = FrameInput { fire: true, ..held };
                step(&mut session, &input);
            }
            "switch" => {
                let input = FrameInput {
                    switch_weapon: true,
                    ..held
                };
                step(&mut session, &input);
            }
            "restart" => {
                let input = FrameInput {
                    restart: true,
                    ..FrameInput::default()
                };
                session.tick(&input);
                held = FrameInput::default();
                println!("Level restarted.");
            }
            "status" | "s" => display_detailed_status(&session),
            "json" => println!("{}", session.ui_snapshot_json()?),
            _ => {
                if let Some(rest) = line.strip_prefix("aim ") {
                    let parts: Vec<&str> = rest.split_whitespace().collect();
                    match (
                        parts.first().and_then(|v| v.parse::<f32>().ok()),
                        parts.get(1).and_then(|v| v.parse::<f32>().ok()),
                    ) {
                        (Some(x), Some(y)) => {
                            held.aim = Vec2::new(x, y);
                            println!("Aiming at ({}, {})", x, y);
                        }
                        _ => println!("Usage: aim <x> <y>"),
                    }
                } else {
                    println!("Unknown command. Available: tick, run <n>, left/right/up/down/stop, sprint, aim, fire, switch, status, restart, quit");
                }
            }
        }
    }

    println!(
        "\nGoodbye! Final state: tick {}, outcome {:?}.",
        session.current_tick,
        session.outcome()
    );
    Ok(())
}

fn step(session: &mut LevelSession, input: &FrameInput) {
    let events = session.tick(input);
    for event in events {
        println!("  {:?}", event);
    }
}

fn display_status(session: &LevelSession) {
    println!(
        "[tick {} | pos ({:.0},{:.0}) | hp {:.0} | stamina {:.0} | weapons {} | enemies {} | {:?}]",
        session.current_tick,
        session.player.pos.x,
        session.player.pos.y,
        session.player.health.value(),
        session.player.stamina.value(),
        session.player.inventory.len(),
        session.enemy_count(),
        session.outcome()
    );
}

fn display_detailed_status(session: &LevelSession) {
    println!("Tick: {}  Clock: {}ms", session.current_tick, session.now_ms);
    println!(
        "Player: pos ({:.1}, {:.1})  health {:.0}/{:.0}  stamina {:.0}",
        session.player.pos.x,
        session.player.pos.y,
        session.player.health.value(),
        session.player.health.max(),
        session.player.stamina.value(),
    );
    let slots: Vec<String> = session
        .player
        .inventory
        .slots()
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            if Some(i) == session.player.inventory.equipped_index() {
                format!("[{:?}]", kind)
            } else {
                format!("{:?}", kind)
            }
        })
        .collect();
    println!("Inventory: {}", if slots.is_empty() { "(empty)".into() } else { slots.join(", ") });
    for enemy in session.enemies() {
        println!(
            "Enemy {:?}: pos ({:.1}, {:.1})  health {:.0}  in_contact {}",
            enemy.id, enemy.pos.x, enemy.pos.y, enemy.health.value(), enemy.in_contact
        );
    }
    for pickup in session.pickups() {
        println!(
            "Pickup {:?} at ({:.1}, {:.1})",
            pickup.kind, pickup.pos.x, pickup.pos.y
        );
    }
    println!(
        "Projectiles in flight: {}  Outcome: {:?}",
        session.projectile_count(),
        session.outcome()
    );
    if session.outcome() == Outcome::Won {
        println!("You Win!");
    }
}
