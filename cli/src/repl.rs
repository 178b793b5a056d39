//! Interactive session: wall-clock ticking plus a line-based command loop.
//!
//! Input is read on a helper thread so the tick loop never blocks on
//! stdin. Lines are parsed with the same clap machinery as the top-level
//! CLI, so `help` inside the session documents itself.

use std::io::BufRead;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use tempo_core::{AppSettings, Command, Engine, StateSnapshot};
use tempo_types::{ActionId, Chord};

use crate::announcer::Announcer;
use crate::render;

pub fn run(scenario_arg: Option<&Path>, frame_ms: f64) -> Result<(), String> {
    let settings = AppSettings::load();
    let scenario = crate::resolve_scenario(scenario_arg, &settings)?;
    let mut engine = Engine::new(scenario, &settings);
    engine.add_listener(Box::new(Announcer::new()));

    println!("tempo session started. Type 'help' for commands, 'exit' to quit.");
    render::print_snapshot(&StateSnapshot::from_engine(&engine));

    let lines = spawn_stdin_reader();
    let frame = Duration::from_millis(frame_ms.max(1.0) as u64);
    let mut last_tick = Instant::now();

    loop {
        // Drain pending input before advancing time
        let mut quit = false;
        loop {
            match lines.try_recv() {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match respond(line, &mut engine) {
                        Ok(true) => {
                            quit = true;
                            break;
                        }
                        Ok(false) => {}
                        Err(err) => println!("{err}"),
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    quit = true;
                    break;
                }
            }
        }
        if quit {
            break;
        }

        let now = Instant::now();
        let delta_ms = now.duration_since(last_tick).as_secs_f64() * 1000.0;
        last_tick = now;
        engine.tick(delta_ms);

        std::thread::sleep(frame);
    }

    Ok(())
}

/// Read stdin on a helper thread, forwarding whole lines over a channel
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[derive(Parser)]
#[command(version, about = "session commands")]
struct ReplCli {
    #[command(subcommand)]
    command: Option<ReplCommand>,
}

#[derive(Subcommand)]
enum ReplCommand {
    /// Grant the player action points
    Gain { amount: u32 },
    /// Spend player action points
    Spend { amount: u32 },
    /// Gift action points to a party member
    Gift { member: String },
    /// Grant an entity action points
    GainEntity { id: String, amount: u32 },
    /// Grant a party member action points
    GainParty { id: String, amount: u32 },
    /// Toggle the player's time pause
    Pause,
    /// Toggle the entity group stop
    StopEntities,
    /// Toggle the party group stop
    StopParty,
    /// Set how many points one gift moves
    SetGift { amount: u32 },
    /// Rebind an action, e.g. `bind spend_ap ctrl+s`
    Bind { action: String, chord: String },
    /// Enable chord resolution
    KeysOn,
    /// Disable chord resolution
    KeysOff,
    /// Send a chord through the keybind registry, e.g. `press ctrl+g`
    Press { chord: String },
    /// Print the current state
    Status,
    /// Print the current state as one JSON line
    Json,
    Exit,
}

fn respond(line: &str, engine: &mut Engine) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "tempo".to_string());
    let cli = ReplCli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(ReplCommand::Gain { amount }) => engine.execute(Command::GainPlayerAp(amount)),
        Some(ReplCommand::Spend { amount }) => {
            if !engine.spend_player_ap(amount) {
                println!("Not enough action points");
            }
        }
        Some(ReplCommand::Gift { member }) => {
            engine.execute(Command::GiveApToPartyMember { member_id: member });
        }
        Some(ReplCommand::GainEntity { id, amount }) => {
            engine.execute(Command::GainEntityAp {
                entity_id: id,
                amount,
            });
        }
        Some(ReplCommand::GainParty { id, amount }) => {
            engine.execute(Command::GainPartyMemberAp {
                member_id: id,
                amount,
            });
        }
        Some(ReplCommand::Pause) => engine.execute(Command::TogglePlayerTimePause),
        Some(ReplCommand::StopEntities) => engine.execute(Command::ToggleEntityTimeStop),
        Some(ReplCommand::StopParty) => engine.execute(Command::TogglePartyTimeStop),
        Some(ReplCommand::SetGift { amount }) => engine.execute(Command::SetGiftAmount(amount)),
        Some(ReplCommand::Bind { action, chord }) => {
            let action: ActionId = action.parse().map_err(|e| format!("error: {e}"))?;
            let chord: Chord = chord.parse().map_err(|e| format!("error: {e}"))?;
            engine.execute(Command::ChangeKeybind { action, chord });
        }
        Some(ReplCommand::KeysOn) => engine.execute(Command::SetKeybindsEnabled(true)),
        Some(ReplCommand::KeysOff) => engine.execute(Command::SetKeybindsEnabled(false)),
        Some(ReplCommand::Press { chord }) => {
            let chord: Chord = chord.parse().map_err(|e| format!("error: {e}"))?;
            if engine.press(&chord).is_none() {
                println!("Nothing bound to {chord}");
            }
        }
        Some(ReplCommand::Status) => {
            render::print_snapshot(&StateSnapshot::from_engine(engine));
        }
        Some(ReplCommand::Json) => {
            let json = StateSnapshot::from_engine(engine)
                .to_json()
                .map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Some(ReplCommand::Exit) => return Ok(true),
        None => {}
    }
    Ok(false)
}
