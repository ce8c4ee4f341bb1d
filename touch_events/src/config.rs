// Touch-ESP - Monitor Configuration
//
// Everything here is fixed at flash time.  The firmware builds its
// `MonitorConfig` from constants; tests tweak individual fields.

// ---------------------------------------------------------------------------
// Input polarity
// ---------------------------------------------------------------------------

/// Which raw level means "touched".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// HIGH = touched (TTP223 style modules, pull-down when idle).
    ActiveHigh,
    /// LOW = touched (switch to ground, pull-up when idle).
    ActiveLow,
}

impl Polarity {
    /// Map a raw GPIO level to the logical touched/untouched state.
    pub fn is_active(&self, level: bool) -> bool {
        match self {
            Self::ActiveHigh => level,
            Self::ActiveLow => !level,
        }
    }

    /// Level the line rests at when nothing touches it.
    pub fn idle_level(&self) -> bool {
        !self.is_active(true)
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Self::ActiveHigh
    }
}

// ---------------------------------------------------------------------------
// Report mode
// ---------------------------------------------------------------------------

/// Which confirmed transitions leave the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Only transitions into the active state (presses).
    PressOnly,
    /// Presses and releases.
    AnyChange,
}

impl Default for ReportMode {
    fn default() -> Self {
        Self::PressOnly
    }
}

// ---------------------------------------------------------------------------
// Monitor configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Value of the `device` field in every outbound record.
    pub device_id: &'static str,
    /// Minimum time between two confirmed changes of one channel.
    pub debounce_ms: u64,
    /// Polarity shared by all channels.
    pub polarity: Polarity,
    pub report_mode: ReportMode,
    /// Sleep between two polling passes.
    pub poll_interval_ms: u64,
}

impl MonitorConfig {
    const fn default() -> Self {
        Self {
            device_id: "touch_esp",
            debounce_ms: 50,
            polarity: Polarity::ActiveHigh,
            report_mode: ReportMode::PressOnly,
            poll_interval_ms: 5,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        DEFAULT_MONITOR_CONFIG
    }
}

pub const DEFAULT_MONITOR_CONFIG: MonitorConfig = MonitorConfig::default();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_maps_levels() {
        assert!(Polarity::ActiveHigh.is_active(true));
        assert!(!Polarity::ActiveHigh.is_active(false));
        assert!(Polarity::ActiveLow.is_active(false));
        assert!(!Polarity::ActiveLow.is_active(true));

        assert!(!Polarity::ActiveHigh.idle_level());
        assert!(Polarity::ActiveLow.idle_level());
    }

    #[test]
    fn defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.device_id, "touch_esp");
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.report_mode, ReportMode::PressOnly);
        assert_eq!(config.polarity, Polarity::ActiveHigh);
    }
}
