//! Results-layer configuration.

/// Settings shared by the store, series, and results crates.
///
/// Passed by reference into whichever component opens a store; there is no
/// process-wide default beyond [`ResultsConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResultsConfig {
    /// File extension (without the dot) a store path must carry.  Default: `sqlite`.
    pub store_extension: String,

    /// Group key for prototypes that match no requested class.  Default: `legacy`.
    pub legacy_key: String,

    /// Multiplier applied to `TimeSeriesPower.Value` on ingestion.  Default:
    /// `1e-3` (kW-equivalent → MW-equivalent).
    pub power_scale: f64,

    /// SQL `LIKE` pattern selecting reactor agents by `AgentEntry.Spec`.
    /// Default: `%Reactor`.
    pub reactor_spec_pattern: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            store_extension:      "sqlite".to_owned(),
            legacy_key:           "legacy".to_owned(),
            power_scale:          1e-3,
            reactor_spec_pattern: "%Reactor".to_owned(),
        }
    }
}
