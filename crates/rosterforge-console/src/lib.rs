//! Colorful console output for roster evaluation.
//!
//! Provides a custom `tracing` layer that formats RosterForge events.
//!
//! ## Log Levels
//!
//! - **INFO**: preprocessing and evaluation results
//! - **DEBUG**: evaluation start, components, staffing bounds
//! - **TRACE**: individual consecutive-shift penalties

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the layer with an `RUST_LOG` filter
/// defaulting to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RosterConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____            _            _____
|  _ \ ___  ___| |_ ___ _ __|  ___|__  _ __ __ _  ___
| |_) / _ \/ __| __/ _ \ '__| |_ / _ \| '__/ _` |/ _ \
|  _ < (_) \__ \ ||  __/ |  |  _| (_) | | | (_| |  __/
|_| \_\___/|___/\__\___|_|  |_|  \___/|_|  \__, |\___|
                                           |___/
"#;

    let version_line = format!("                   v{} - Nurse Roster Evaluation\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats roster events with colors.
pub struct RosterConsoleLayer;

impl<S: Subscriber> Layer<S> for RosterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("rosterforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    scenario: Option<String>,
    position_count: Option<u64>,
    component_count: Option<u64>,
    component: Option<u64>,
    nurse_count: Option<u64>,
    nurse: Option<u64>,
    day: Option<u64>,
    amount: Option<u64>,
    skill: Option<u64>,
    max_staff: Option<u64>,
    max_staff_no_penalty: Option<u64>,
    nb_days: Option<u64>,
    hard_violations: Option<u64>,
    duration_ms: Option<u64>,
    total_cost: Option<i64>,
    feasible: Option<bool>,
    parallel: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "scenario" => self.scenario = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "position_count" => self.position_count = Some(value),
            "component_count" => self.component_count = Some(value),
            "component" => self.component = Some(value),
            "nurse_count" => self.nurse_count = Some(value),
            "nurse" => self.nurse = Some(value),
            "day" => self.day = Some(value),
            "amount" => self.amount = Some(value),
            "skill" => self.skill = Some(value),
            "max_staff" => self.max_staff = Some(value),
            "max_staff_no_penalty" => self.max_staff_no_penalty = Some(value),
            "nb_days" => self.nb_days = Some(value),
            "hard_violations" => self.hard_violations = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "total_cost" => self.total_cost = i64::try_from(value).ok(),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "total_cost" => self.total_cost = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "feasible" => self.feasible = Some(value),
            "parallel" => self.parallel = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "scenario" => self.scenario = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "positions_built" => format_positions_built(v),
        "component_built" => format_component_built(v),
        "sub_scenario" => format_sub_scenario(v),
        "staffing_bounds" => format_staffing_bounds(v),
        "evaluate_start" => format_evaluate_start(v),
        "evaluate_end" => format_evaluate_end(v),
        "consecutive_shift_shortfall" => format_shift_streak(v, level, "short by"),
        "consecutive_shift_excess" => format_shift_streak(v, level, "over by"),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_positions_built(v: &EventVisitor) -> String {
    format!(
        "{} Positions │ {} positions │ {} components │ {} nurses",
        "◆".bright_blue().bold(),
        count(v.position_count).bright_yellow(),
        count(v.component_count).bright_yellow(),
        count(v.nurse_count).bright_yellow(),
    )
}

fn format_component_built(v: &EventVisitor) -> String {
    format!(
        "  {} component {} │ {} positions │ {} nurses",
        "·".bright_black(),
        count(v.component).white().bold(),
        count(v.position_count),
        count(v.nurse_count),
    )
}

fn format_sub_scenario(v: &EventVisitor) -> String {
    format!(
        "{} Sub-scenario {} │ {} nurses",
        "◇".bright_blue(),
        v.scenario.as_deref().unwrap_or("?").white().bold(),
        count(v.nurse_count).bright_yellow(),
    )
}

fn format_staffing_bounds(v: &EventVisitor) -> String {
    format!(
        "  {} skill {} │ {} nurse-days │ {} without penalty",
        "·".bright_black(),
        count(v.skill).white().bold(),
        count(v.max_staff),
        count(v.max_staff_no_penalty).bright_magenta(),
    )
}

fn format_evaluate_start(v: &EventVisitor) -> String {
    let mode = if v.parallel.unwrap_or(false) {
        "parallel"
    } else {
        "serial"
    };
    format!(
        "{} Evaluating │ {} nurses │ {} days │ {}",
        "▶".bright_green().bold(),
        count(v.nurse_count).bright_yellow(),
        count(v.nb_days).bright_yellow(),
        mode.bright_black(),
    )
}

fn format_evaluate_end(v: &EventVisitor) -> String {
    let hard = v.hard_violations.unwrap_or(0);
    let feasible = v.feasible.unwrap_or(hard == 0);
    let status = if feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };
    let cost = v.total_cost.unwrap_or(0);

    format!(
        "{} Evaluated │ {} │ {} │ {} │ {}",
        "■".bright_cyan().bold(),
        format_score(hard, cost),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format!("{} nurses", count(v.nurse_count)).bright_black(),
    )
}

fn format_shift_streak(v: &EventVisitor, level: Level, what: &str) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "  {} nurse {} │ day {} │ same-shift streak {} {}",
        "✗".bright_red(),
        count(v.nurse),
        count(v.day),
        what,
        count(v.amount).bright_red(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(hard: u64, cost: i64) -> String {
    let hard_str = if hard > 0 {
        format!("-{}hard", hard.to_formatted_string(&Locale::en))
            .bright_red()
            .to_string()
    } else {
        "0hard".bright_green().to_string()
    };
    let soft_str = if cost > 0 {
        format!("-{}soft", cost.to_formatted_string(&Locale::en))
            .yellow()
            .to_string()
    } else {
        "0soft".white().to_string()
    };
    format!("{}/{}", hard_str, soft_str)
}

#[cfg(test)]
mod tests;
