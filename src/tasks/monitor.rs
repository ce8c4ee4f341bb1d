// Touch-ESP - Monitor Task
//
// Single cooperative loop: poll every touch line, debounce, send presses,
// sleep for the poll interval.  Transport trouble never stalls the loop.

use std::thread;
use std::time::Duration;

use touch_events::Monitor;

use crate::config::*;
use crate::drivers::udp::UdpTransport;
use crate::input::TouchInputs;

pub fn monitor_task(mut inputs: TouchInputs<'static>, mut transport: UdpTransport) {
    log::info!("Monitor task started");

    let mut monitor = Monitor::new(MONITOR_CONFIG, &mut inputs);
    let poll_interval = Duration::from_millis(monitor.config().poll_interval_ms);
    let mut last_stats_ms = crate::now_ms();

    loop {
        let now = crate::now_ms();

        transport.maintain_link(now);
        monitor.poll(now, &mut inputs, &mut transport);

        if now.saturating_sub(last_stats_ms) >= STATS_INTERVAL_MS {
            last_stats_ms = now;
            let stats = monitor.stats();
            log::info!(
                "Stats: confirmed {} reported {} sent {} failed {} offline {}",
                stats.confirmed,
                stats.reported,
                stats.sent,
                stats.send_failures,
                stats.skipped_unready
            );
        }

        thread::sleep(poll_interval);
    }
}
