use super::*;

fn visitor(event: &str) -> EventVisitor {
    EventVisitor {
        event: Some(event.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_unknown_events_are_silent() {
    assert!(format_event(&visitor("solve_start"), Level::INFO).is_empty());
    assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
}

#[test]
fn test_positions_built() {
    let v = EventVisitor {
        position_count: Some(4),
        component_count: Some(2),
        nurse_count: Some(1200),
        ..visitor("positions_built")
    };
    let out = format_event(&v, Level::INFO);
    assert!(out.contains("Positions"));
    assert!(out.contains("1,200"));
}

#[test]
fn test_evaluate_end() {
    let v = EventVisitor {
        total_cost: Some(12_345),
        hard_violations: Some(2),
        feasible: Some(false),
        duration_ms: Some(1500),
        nurse_count: Some(30),
        ..visitor("evaluate_end")
    };
    let out = format_event(&v, Level::INFO);
    assert!(out.contains("12,345soft"));
    assert!(out.contains("2hard"));
    assert!(out.contains("INFEASIBLE"));
    assert!(out.contains("1.50s"));
}

#[test]
fn test_streak_events_only_at_trace() {
    let v = EventVisitor {
        nurse: Some(3),
        day: Some(9),
        amount: Some(1),
        ..visitor("consecutive_shift_excess")
    };
    assert!(format_event(&v, Level::DEBUG).is_empty());
    let out = format_event(&v, Level::TRACE);
    assert!(out.contains("over by"));
}

#[test]
fn test_duration_format() {
    assert_eq!(format_duration_ms(250), "250ms");
    assert_eq!(format_duration_ms(2500), "2.50s");
    assert_eq!(format_duration_ms(125_000), "2m 5s");
}
