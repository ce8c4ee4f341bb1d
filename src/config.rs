// Touch-ESP - Hardware & System Configuration
// Target: ESP32 DevKit (Xtensa), five TTP223 touch modules

use touch_events::{MonitorConfig, Polarity, ReportMode};

// ---------------------------------------------------------------------------
// Touch Inputs
// ---------------------------------------------------------------------------
// GPIO 15, 4, 18, 19, 21 (selected in `main.rs`); index 0 is sensor 1.
pub const TOUCH_CHANNELS: usize = 5;

// Touch modules drive the line HIGH while touched.
pub const TOUCH_POLARITY: Polarity = Polarity::ActiveHigh;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------
pub const WIFI_SSID: &str = match option_env!("TOUCH_WIFI_SSID") {
    Some(ssid) => ssid,
    None => "touch-net",
};
pub const WIFI_PASS: &str = match option_env!("TOUCH_WIFI_PASS") {
    Some(pass) => pass,
    None => "",
};
pub const COLLECTOR_ADDR: &str = match option_env!("TOUCH_COLLECTOR_ADDR") {
    Some(addr) => addr,
    None => "192.168.1.100:5005",
};
pub const DEVICE_ID: &str = "touch_esp";

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_MONITOR: usize = 8192;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const DEBOUNCE_MS: u64 = 50;
pub const POLL_INTERVAL_MS: u64 = 5;
pub const WIFI_RETRY_INTERVAL_MS: u64 = 10_000;
pub const STATS_INTERVAL_MS: u64 = 60_000;

pub const REPORT_MODE: ReportMode = ReportMode::PressOnly;

pub const MONITOR_CONFIG: MonitorConfig = MonitorConfig {
    device_id: DEVICE_ID,
    debounce_ms: DEBOUNCE_MS,
    polarity: TOUCH_POLARITY,
    report_mode: REPORT_MODE,
    poll_interval_ms: POLL_INTERVAL_MS,
};
