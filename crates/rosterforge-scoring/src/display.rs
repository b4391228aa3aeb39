//! Plain-text rendering of a roster and its costs.

use std::fmt::Write;

use rosterforge_core::calendar::day_name;
use rosterforge_core::{Scenario, REST};

use crate::analysis::CostBreakdown;
use crate::live::LiveNurse;

/// Nurse by day grid: first letter of the shift name, `-` for rest.
///
/// ```text
///         | M | T | W |
/// ---------------------
/// Ann     | D | D | - |
/// ```
pub fn schedule_grid(scenario: &Scenario, nurses: &[LiveNurse<'_>]) -> String {
    let width = nurses
        .iter()
        .map(|n| n.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let mut header = format!("{:width$}", "", width = width);
    if let Some(first) = nurses.first() {
        let roster = first.roster();
        for day in roster.first_day()..roster.first_day() + roster.nb_days() {
            let letter = day_name(day).chars().next().unwrap_or('?');
            let _ = write!(header, " | {}", letter);
        }
    }
    header.push_str(" |");
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len()));

    for nurse in nurses {
        let _ = write!(out, "{:width$}", nurse.name(), width = width);
        for a in nurse.roster().assignments() {
            let letter = if a.shift == REST {
                '-'
            } else {
                scenario.shifts().name(a.shift).chars().next().unwrap_or('?')
            };
            let _ = write!(out, " | {}", letter);
        }
        let _ = writeln!(out, " |");
    }
    out
}

/// Schedule grid followed by the hard and soft constraint totals.
pub fn log_string(scenario: &Scenario, nurses: &[LiveNurse<'_>], breakdown: &CostBreakdown) -> String {
    let mut out = String::from("Complete shift schedule\n\n");
    out.push_str(&schedule_grid(scenario, nurses));
    out.push('\n');
    let _ = write!(out, "{}", breakdown);
    out
}
