//! Deployment series: active power per prototype group per step.
//!
//! # Lifetime window
//!
//! An agent with `EnterTime = e` and `Lifetime = l` contributes to the
//! half-open step range
//!
//!   [e - 1, e - 1 + l)
//!
//! clipped to `[0, duration)`.  A negative lifetime (Cyclus writes `-1` for
//! agents that never decommission) runs to the end of the simulation.
//! Agents of the same group whose windows overlap sum: the series is the
//! group's aggregate capacity, not a per-agent value.
//!
//! # Nameplate
//!
//! For each class, the nameplate is the scaled value of the agent whose
//! prototype name equals the class name exactly, whichever group that agent's
//! power lands in.  When several agents share that name the last row
//! processed wins.

use std::collections::BTreeMap;

use tracing::{debug, trace};
use watts_core::{AgentPowerRow, CoreError, CoreResult};

// ── Classification ────────────────────────────────────────────────────────────

/// Maps a prototype name to a group key.
pub trait GroupClassifier {
    /// Requested class names, in caller order.
    fn class_names(&self) -> &[String];

    /// Key for prototypes that match no class.
    fn legacy_key(&self) -> &str;

    /// The class `prototype` belongs to, or `None` for the legacy bucket.
    fn classify(&self, prototype: &str) -> Option<&str>;

    /// The group key `prototype` accumulates into.
    fn group_of(&self, prototype: &str) -> &str {
        self.classify(prototype).unwrap_or_else(|| self.legacy_key())
    }
}

/// How a class name is compared to a prototype name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchRule {
    /// The prototype name contains the class name (`"lwr"` matches `"lwr_2"`).
    #[default]
    Contains,
    /// The prototype name equals the class name.
    Exact,
}

/// Class-name based classifier.
///
/// When several classes match, the one listed last wins.
#[derive(Clone, Debug)]
pub struct PrototypeGroups {
    names:  Vec<String>,
    legacy: String,
    rule:   MatchRule,
}

impl PrototypeGroups {
    pub fn new<I, S>(names: I, legacy_key: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names:  names.into_iter().map(Into::into).collect(),
            legacy: legacy_key.into(),
            rule:   MatchRule::Contains,
        }
    }

    pub fn with_rule(mut self, rule: MatchRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }
}

impl GroupClassifier for PrototypeGroups {
    fn class_names(&self) -> &[String] {
        &self.names
    }

    fn legacy_key(&self) -> &str {
        &self.legacy
    }

    fn classify(&self, prototype: &str) -> Option<&str> {
        self.names
            .iter()
            .rev()
            .find(|name| match self.rule {
                MatchRule::Contains => prototype.contains(name.as_str()),
                MatchRule::Exact    => prototype == name.as_str(),
            })
            .map(String::as_str)
    }
}

// ── Deployment ────────────────────────────────────────────────────────────────

/// Per-group deployed power and nameplate capacity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deployment {
    /// Group key → per-step power, length `duration`.  Every class name and
    /// the legacy key are present, zero-filled when nothing was deployed.
    pub power:     BTreeMap<String, Vec<f64>>,
    /// Class name → nameplate capacity.  Classes with no exact-name agent
    /// stay at `0.0`.  The legacy key has no entry.
    pub nameplate: BTreeMap<String, f64>,
}

impl Deployment {
    /// Sum of all groups at each step.
    pub fn total(&self) -> Vec<f64> {
        let len = self.power.values().next().map_or(0, Vec::len);
        let mut total = vec![0.0; len];
        for series in self.power.values() {
            for (t, v) in total.iter_mut().zip(series) {
                *t += v;
            }
        }
        total
    }
}

/// Build deployment series from reactor power rows.
///
/// `scale` multiplies every raw power value before it is accumulated or
/// recorded as a nameplate.
///
/// # Errors
/// [`CoreError::IndexOutOfRange`] when an agent's window would open at or
/// after `duration`.
pub fn accumulate_lifetimes<C: GroupClassifier>(
    rows:       &[AgentPowerRow],
    classifier: &C,
    duration:   usize,
    scale:      f64,
) -> CoreResult<Deployment> {
    let mut out = Deployment::default();
    for name in classifier.class_names() {
        out.power.insert(name.clone(), vec![0.0; duration]);
        if name != classifier.legacy_key() {
            out.nameplate.insert(name.clone(), 0.0);
        }
    }
    out.power.insert(classifier.legacy_key().to_owned(), vec![0.0; duration]);

    for row in rows {
        let value = row.value * scale;
        let (start, end) = window(row, duration)?;
        let key = classifier.group_of(&row.prototype);
        trace!(agent = %row.agent_id, prototype = %row.prototype, group = key, start, end, "agent deployed");

        // Every key `group_of` can return was inserted above.
        if let Some(series) = out.power.get_mut(key) {
            for v in &mut series[start..end] {
                *v += value;
            }
        }

        // Independent of the power group: overlapping class names may send an
        // exact-name agent's power to another class.
        if let Some(class) = classifier.class_names().iter().find(|c| **c == row.prototype) {
            if class != classifier.legacy_key() {
                out.nameplate.insert(class.clone(), value);
            }
        }
    }

    debug!(agents = rows.len(), groups = out.power.len(), "deployment accumulated");
    Ok(out)
}

/// Clipped `[start, end)` step range of one agent.
fn window(row: &AgentPowerRow, duration: usize) -> CoreResult<(usize, usize)> {
    let start = row.enter_time - 1;
    if start >= duration as i64 {
        return Err(CoreError::IndexOutOfRange {
            what:  format!("{} enter time", row.agent_id),
            index: start,
            duration,
        });
    }
    let end = if row.lifetime < 0 {
        duration as i64
    } else {
        start.saturating_add(row.lifetime).min(duration as i64)
    };
    let start = start.max(0) as usize;
    let end = end.max(start as i64) as usize;
    Ok((start, end))
}
