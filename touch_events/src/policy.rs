// Touch-ESP - Report Policy

use crate::config::ReportMode;
use crate::debounce::Transition;

/// Decide whether a confirmed transition leaves the device.
pub fn should_report(transition: &Transition, mode: ReportMode) -> bool {
    match mode {
        ReportMode::PressOnly => transition.is_press(),
        ReportMode::AnyChange => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(new: bool) -> Transition {
        Transition {
            channel: 0,
            previous: !new,
            new,
            timestamp: 100,
        }
    }

    #[test]
    fn press_only_drops_releases() {
        assert!(should_report(&transition(true), ReportMode::PressOnly));
        assert!(!should_report(&transition(false), ReportMode::PressOnly));
    }

    #[test]
    fn any_change_reports_everything() {
        assert!(should_report(&transition(true), ReportMode::AnyChange));
        assert!(should_report(&transition(false), ReportMode::AnyChange));
    }
}
