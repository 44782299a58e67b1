//! Unit tests for watts-series.

use watts_core::{AgentId, AgentPowerRow, Cell, Row};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(time: i64, quantity: f64) -> Row {
    Row::new()
        .with("time", Cell::Integer(time))
        .with("quantity", Cell::Real(quantity))
}

fn agent(id: i64, prototype: &str, enter: i64, lifetime: i64, value: f64) -> AgentPowerRow {
    AgentPowerRow {
        agent_id:   AgentId(id),
        prototype:  prototype.to_owned(),
        enter_time: enter,
        lifetime,
        spec:       ":cycamore:Reactor".to_owned(),
        value,
    }
}

// ── accumulate ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod accumulate {
    use watts_core::CoreError;

    use super::*;
    use crate::accumulate;

    #[test]
    fn values_land_on_their_step() {
        let s = accumulate(&[at(0, 1.5), at(3, 2.0)], "time", Some("quantity"), 5).unwrap();
        assert_eq!(s, vec![1.5, 0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn same_step_sums() {
        let s = accumulate(&[at(2, 1.0), at(2, 4.0)], "time", Some("quantity"), 3).unwrap();
        assert_eq!(s, vec![0.0, 0.0, 5.0]);
    }

    #[test]
    fn no_value_field_counts_rows() {
        let s = accumulate(&[at(1, 9.0), at(1, 9.0), at(0, 9.0)], "time", None, 2).unwrap();
        assert_eq!(s, vec![1.0, 2.0]);
    }

    #[test]
    fn empty_rows_zero_fill() {
        assert_eq!(accumulate(&[], "time", None, 4).unwrap(), vec![0.0; 4]);
    }

    #[test]
    fn time_past_duration_is_surfaced() {
        match accumulate(&[at(5, 1.0)], "time", Some("quantity"), 5) {
            Err(CoreError::IndexOutOfRange { index, duration, .. }) => {
                assert_eq!((index, duration), (5, 5));
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn negative_time_is_surfaced() {
        assert!(matches!(
            accumulate(&[at(-1, 1.0)], "time", None, 5),
            Err(CoreError::IndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn text_value_is_non_numeric() {
        let row = Row::new()
            .with("time", Cell::Integer(0))
            .with("quantity", Cell::Text("lots".into()));
        assert!(matches!(
            accumulate(&[row], "time", Some("quantity"), 1),
            Err(CoreError::NonNumeric { .. })
        ));
    }
}

// ── accumulate_lifetimes ──────────────────────────────────────────────────────

#[cfg(test)]
mod lifetimes {
    use watts_core::CoreError;

    use super::*;
    use crate::{GroupClassifier, MatchRule, PrototypeGroups, accumulate_lifetimes};

    fn groups(names: &[&str]) -> PrototypeGroups {
        PrototypeGroups::new(names.iter().copied(), "legacy")
    }

    #[test]
    fn single_agent_window() {
        // Enters at step 3 with lifetime 5: indices 2..=6 are active.
        let d = accumulate_lifetimes(&[agent(1, "lwr", 3, 5, 10.0)], &groups(&["lwr"]), 10, 1.0).unwrap();
        let expected = vec![0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 10.0, 0.0, 0.0, 0.0];
        assert_eq!(d.power["lwr"], expected);
        assert_eq!(d.power["legacy"], vec![0.0; 10]);
    }

    #[test]
    fn overlapping_agents_sum() {
        let rows = [agent(1, "lwr_a", 1, 4, 10.0), agent(2, "lwr_b", 3, 4, 5.0)];
        let d = accumulate_lifetimes(&rows, &groups(&["lwr"]), 8, 1.0).unwrap();
        assert_eq!(d.power["lwr"], vec![10.0, 10.0, 15.0, 15.0, 5.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn unmatched_prototype_goes_to_legacy() {
        let d = accumulate_lifetimes(&[agent(1, "magnox", 1, 2, 7.0)], &groups(&["lwr"]), 3, 1.0).unwrap();
        assert_eq!(d.power["legacy"], vec![7.0, 7.0, 0.0]);
        assert_eq!(d.power["lwr"], vec![0.0; 3]);
        assert!(!d.nameplate.contains_key("legacy"));
    }

    #[test]
    fn values_are_scaled() {
        let d = accumulate_lifetimes(&[agent(1, "lwr", 1, 1, 1000.0)], &groups(&["lwr"]), 2, 1e-3).unwrap();
        assert_eq!(d.power["lwr"], vec![1.0, 0.0]);
        assert_eq!(d.nameplate["lwr"], 1.0);
    }

    #[test]
    fn window_clipped_at_duration() {
        let d = accumulate_lifetimes(&[agent(1, "lwr", 4, 100, 2.0)], &groups(&["lwr"]), 5, 1.0).unwrap();
        assert_eq!(d.power["lwr"], vec![0.0, 0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn negative_lifetime_runs_to_end() {
        let d = accumulate_lifetimes(&[agent(1, "lwr", 2, -1, 3.0)], &groups(&["lwr"]), 4, 1.0).unwrap();
        assert_eq!(d.power["lwr"], vec![0.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn enter_at_zero_clips_front() {
        let d = accumulate_lifetimes(&[agent(1, "lwr", 0, 3, 1.0)], &groups(&["lwr"]), 4, 1.0).unwrap();
        assert_eq!(d.power["lwr"], vec![1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn enter_after_end_is_out_of_range() {
        assert!(matches!(
            accumulate_lifetimes(&[agent(1, "lwr", 6, 1, 1.0)], &groups(&["lwr"]), 5, 1.0),
            Err(CoreError::IndexOutOfRange { index: 5, duration: 5, .. })
        ));
    }

    #[test]
    fn nameplate_requires_exact_name() {
        let rows = [agent(1, "lwr_uprated", 1, 1, 9.0)];
        let d = accumulate_lifetimes(&rows, &groups(&["lwr", "sfr"]), 1, 1.0).unwrap();
        assert_eq!(d.nameplate["lwr"], 0.0);
        assert_eq!(d.nameplate["sfr"], 0.0);
    }

    #[test]
    fn nameplate_last_write_wins() {
        // Two agents share the exact class name; the later row's value is kept.
        let rows = [agent(1, "lwr", 1, 1, 900.0), agent(2, "lwr", 1, 1, 1100.0)];
        let d = accumulate_lifetimes(&rows, &groups(&["lwr"]), 1, 1.0).unwrap();
        assert_eq!(d.nameplate["lwr"], 1100.0);

        let reversed = [agent(2, "lwr", 1, 1, 1100.0), agent(1, "lwr", 1, 1, 900.0)];
        let d = accumulate_lifetimes(&reversed, &groups(&["lwr"]), 1, 1.0).unwrap();
        assert_eq!(d.nameplate["lwr"], 900.0);
    }

    #[test]
    fn nameplate_kept_when_power_lands_in_another_class() {
        // "lwr_big" also contains "lwr", listed later, so its power goes there.
        let rows = [agent(1, "lwr_big", 1, 1, 7.0)];
        let d = accumulate_lifetimes(&rows, &groups(&["lwr_big", "lwr"]), 1, 1.0).unwrap();
        assert_eq!(d.power["lwr"], vec![7.0]);
        assert_eq!(d.power["lwr_big"], vec![0.0]);
        assert_eq!(d.nameplate["lwr_big"], 7.0);
        assert_eq!(d.nameplate["lwr"], 0.0);
    }

    #[test]
    fn later_class_wins_on_multiple_matches() {
        let g = groups(&["lwr", "lwr_small"]);
        assert_eq!(g.group_of("lwr_small_1"), "lwr_small");
        assert_eq!(g.group_of("lwr_1"), "lwr");
        assert_eq!(g.group_of("htgr"), "legacy");
    }

    #[test]
    fn exact_rule() {
        let g = groups(&["lwr"]).with_rule(MatchRule::Exact);
        assert_eq!(g.group_of("lwr"), "lwr");
        assert_eq!(g.group_of("lwr_1"), "legacy");
    }

    #[test]
    fn total_sums_groups() {
        let rows = [agent(1, "lwr", 1, 2, 1.0), agent(2, "magnox", 2, 2, 2.0)];
        let d = accumulate_lifetimes(&rows, &groups(&["lwr"]), 3, 1.0).unwrap();
        assert_eq!(d.total(), vec![1.0, 3.0, 2.0]);
    }
}
