use std::io::{self, Write};

use holiday_countdown::persistence::JsonFileStore;
use holiday_countdown::{
    HolidayApiClient, HolidayCountdownSensor, SensorConfig, SensorState, SensorValue, UpdateOutcome,
};

fn print_help() {
    println!(
        "Commands:\n  help      Show this help\n  show      Show the current countdown state\n  list      List the resident holiday periods\n  refresh   Attempt a refresh (subject to the cooldown)\n  quit|exit Exit"
    );
}

fn render_state(state: &SensorState) -> String {
    let value = match state.value {
        SensorValue::Unknown => "unknown".to_string(),
        SensorValue::Days(days) => days.to_string(),
        SensorValue::Error => "error".to_string(),
    };
    let mut out = format!("state: {value}\n  name: {}", state.holiday_name);
    if let Some(duration) = state.duration_days {
        out.push_str(&format!("\n  duration_days: {duration}"));
    }
    if let Some(countdown) = state.countdown_days {
        out.push_str(&format!("\n  countdown_days: {countdown}"));
    }
    if let Some(start) = state.start_date {
        out.push_str(&format!("\n  start_date: {start}"));
    }
    if let Some(next) = &state.next_holiday {
        out.push_str(&format!("\n  next_holiday: {next}"));
    }
    out
}

fn outcome_text(outcome: UpdateOutcome) -> &'static str {
    match outcome {
        UpdateOutcome::Refreshed => "refreshed",
        UpdateOutcome::NotDue => "not due",
        UpdateOutcome::Throttled => "throttled (cooldown active)",
        UpdateOutcome::AlreadyRunning => "a refresh is already in flight",
        UpdateOutcome::Failed => "failed (see log)",
    }
}

#[tokio::main]
async fn main() {
    let cache_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "holiday_cache.json".to_string());
    let config = SensorConfig::default();
    let client = match HolidayApiClient::new(&config.endpoint, config.fetch_timeout) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to build http client: {err}");
            return;
        }
    };
    let sensor = HolidayCountdownSensor::new(client, JsonFileStore::new(&cache_path), config);

    println!("Holiday Countdown (CLI) - type 'help' for commands\n");
    sensor.attach().await;
    println!("{}", render_state(&sensor.state()));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", render_state(&sensor.state())),
            "list" => {
                let holidays = sensor.holidays();
                if holidays.is_empty() {
                    println!("No holiday periods resident.");
                }
                for period in holidays {
                    println!(
                        "{}  {}  ({} day{})",
                        period.start_date,
                        period.name,
                        period.duration_days,
                        if period.duration_days == 1 { "" } else { "s" }
                    );
                }
            }
            "refresh" => {
                let outcome = sensor.update().await;
                println!("Refresh: {}", outcome_text(outcome));
                println!("{}", render_state(&sensor.state()));
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
