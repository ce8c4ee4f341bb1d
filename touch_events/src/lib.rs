// Touch-ESP - Touch Event Core
//
// Hardware-free half of the firmware: turns raw GPIO levels into debounced
// transitions, decides which of them are worth reporting and encodes them as
// the JSON datagrams the collector listens for.  Everything here runs on the
// host as well, so the state machine is unit tested without a board.

pub mod config;
pub mod debounce;
pub mod monitor;
pub mod policy;
pub mod record;

pub use config::{MonitorConfig, Polarity, ReportMode, DEFAULT_MONITOR_CONFIG};
pub use debounce::{DebounceEngine, Transition};
pub use monitor::{EventTransport, InputSource, Monitor, MonitorStats};
pub use policy::should_report;
pub use record::{build_record, encode, PressRecord};
