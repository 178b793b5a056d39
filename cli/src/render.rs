//! Text rendering for state snapshots.
//!
//! Bars pick up their configured color via truecolor escapes when stdout
//! is a terminal; piped output stays plain.

use atty::Stream;

use tempo_core::{BarSnapshot, StateSnapshot};
use tempo_types::formatting::{fill_bar, format_ap, format_countdown_ms, format_fill_pct};

const BAR_WIDTH: usize = 24;

fn use_color() -> bool {
    atty::is(Stream::Stdout)
}

fn paint(text: &str, color: [u8; 4]) -> String {
    if !use_color() {
        return text.to_string();
    }
    let [r, g, b, _] = color;
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

fn bar_line(bar: &BarSnapshot) -> String {
    let gauge = paint(&fill_bar(bar.fill, BAR_WIDTH), bar.color);
    let next = if bar.paused {
        "held".to_string()
    } else {
        format!("next in {}", format_countdown_ms(bar.remaining_ms, "now"))
    };
    format!(
        "  {:<10} {} {:>6}  {:>5} AP  {}",
        bar.name,
        gauge,
        format_fill_pct(bar.fill),
        format_ap(bar.ap, bar.max_ap),
        next,
    )
}

pub fn print_snapshot(snapshot: &StateSnapshot) {
    println!("--- Player ---");
    println!("{}", bar_line(&snapshot.player));
    if snapshot.player_time_paused {
        println!("  (time paused)");
    }

    if !snapshot.entities.is_empty() {
        let suffix = if snapshot.entity_time_stopped {
            " (stopped)"
        } else {
            ""
        };
        println!("--- Entities{suffix} ---");
        for bar in &snapshot.entities {
            println!("{}", bar_line(bar));
        }
    }

    if !snapshot.party.is_empty() {
        let suffix = if snapshot.party_time_stopped {
            " (stopped)"
        } else {
            ""
        };
        println!("--- Party{suffix} ---");
        for bar in &snapshot.party {
            println!("{}", bar_line(bar));
        }
    }

    println!(
        "  gift: {} AP   keybinds: {}",
        snapshot.gift_amount,
        if snapshot.keybinds_enabled { "on" } else { "off" },
    );
}
