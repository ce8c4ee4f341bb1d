// Touch-ESP - Monitor Pass
//
// One polling pass over every channel: sample, debounce, apply the report
// policy, encode and hand the datagram to the transport.  The firmware task
// calls `poll` in a loop with a short sleep in between; all hardware sits
// behind the two collaborator traits below.

use crate::config::MonitorConfig;
use crate::debounce::{DebounceEngine, Transition};
use crate::policy::should_report;
use crate::record::{build_record, encode};

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Digital input lines, polled.  `read` must not block.
pub trait InputSource {
    fn channel_count(&self) -> usize;

    /// Instantaneous raw level of `channel` (`true` = HIGH).
    fn read(&mut self, channel: usize) -> bool;
}

/// Best-effort datagram sink.
pub trait EventTransport {
    /// Link up and able to send.  Sends are skipped while this is `false`.
    fn is_ready(&self) -> bool;

    fn send(&mut self, payload: &[u8]) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorStats {
    /// Transitions confirmed by the debouncer.
    pub confirmed: u32,
    /// Confirmed transitions that passed the report policy.
    pub reported: u32,
    /// Records accepted by the transport.
    pub sent: u32,
    /// Encode or transport failures.
    pub send_failures: u32,
    /// Reported records dropped because the link was down.
    pub skipped_unready: u32,
}

// ---------------------------------------------------------------------------
// Monitor
// ---------------------------------------------------------------------------

pub struct Monitor {
    config: MonitorConfig,
    engine: DebounceEngine,
    stats: MonitorStats,
}

impl Monitor {
    /// Seed every channel from a single read of `input`.
    pub fn new<I: InputSource>(config: MonitorConfig, input: &mut I) -> Self {
        let levels: Vec<bool> = (0..input.channel_count()).map(|ch| input.read(ch)).collect();
        let engine = DebounceEngine::seeded(config.polarity, &levels, config.debounce_ms);

        log::info!(
            "Monitoring {} touch channel(s), debounce {} ms, {:?}",
            engine.channel_count(),
            config.debounce_ms,
            config.report_mode
        );

        Self {
            config,
            engine,
            stats: MonitorStats::default(),
        }
    }

    /// Run one pass at time `now`.  Returns the number of records the
    /// transport accepted; skipped and failed sends are not counted.
    pub fn poll<I, T>(&mut self, now: u64, input: &mut I, transport: &mut T) -> usize
    where
        I: InputSource,
        T: EventTransport,
    {
        let mut sent = 0;

        for channel in 0..self.engine.channel_count() {
            let raw = input.read(channel);
            let Some(transition) = self.engine.observe(channel, raw, now) else {
                continue;
            };

            self.stats.confirmed += 1;
            log::debug!(
                "S{} {} at {} ms",
                channel + 1,
                if transition.new { "touched" } else { "released" },
                transition.timestamp
            );

            if !should_report(&transition, self.config.report_mode) {
                continue;
            }
            self.stats.reported += 1;

            if self.report(&transition, transport) {
                sent += 1;
            }
        }

        sent
    }

    fn report<T: EventTransport>(&mut self, transition: &Transition, transport: &mut T) -> bool {
        if !transport.is_ready() {
            self.stats.skipped_unready += 1;
            log::debug!("Link down, dropping event for S{}", transition.channel + 1);
            return false;
        }

        let record = build_record(self.config.device_id, transition);
        let result = encode(&record).and_then(|payload| transport.send(&payload));

        match result {
            Ok(()) => {
                self.stats.sent += 1;
                log::info!(
                    "Sent sensor {} state {} ts {}",
                    record.sensor,
                    record.state,
                    record.ts
                );
                true
            }
            Err(e) => {
                self.stats.send_failures += 1;
                log::warn!("Send failed for sensor {}: {:#}", record.sensor, e);
                false
            }
        }
    }

    pub fn engine(&self) -> &DebounceEngine {
        &self.engine
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn stats(&self) -> MonitorStats {
        self.stats
    }
}
