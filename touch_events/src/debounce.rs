// Touch-ESP - Debounce-Edge Engine
//
// Per-channel confirmed state plus the time of the last confirmed change.
// A sample that disagrees with the confirmed state is accepted only once
// `debounce_ms` has passed since that last *confirmed* change.  Rejected
// samples do not restart the window, so chatter faster than the debounce
// interval is absorbed until the window clears.

use crate::config::Polarity;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// State kept for one monitored input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChannelState {
    polarity: Polarity,
    /// Last confirmed logical state (`true` = touched).
    confirmed_active: bool,
    /// Milliseconds since boot of the last confirmed change (0 at seed).
    last_change_ms: u64,
}

/// A confirmed change of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// 0-based channel index.
    pub channel: usize,
    pub previous: bool,
    pub new: bool,
    /// Time the change was confirmed, in milliseconds since boot.
    pub timestamp: u64,
}

impl Transition {
    /// `true` for a press (transition into the active state).
    pub fn is_press(&self) -> bool {
        self.new
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct DebounceEngine {
    debounce_ms: u64,
    channels: Vec<ChannelState>,
}

impl DebounceEngine {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            channels: Vec::new(),
        }
    }

    /// Build an engine with one channel per raw level, all sharing `polarity`.
    pub fn seeded(polarity: Polarity, raw_levels: &[bool], debounce_ms: u64) -> Self {
        let mut engine = Self::new(debounce_ms);
        for &level in raw_levels {
            engine.register(polarity, level);
        }
        engine
    }

    /// Add a channel whose confirmed state is seeded from one raw read.
    /// Returns the new channel index.
    pub fn register(&mut self, polarity: Polarity, initial_raw: bool) -> usize {
        self.channels.push(ChannelState {
            polarity,
            confirmed_active: polarity.is_active(initial_raw),
            last_change_ms: 0,
        });
        self.channels.len() - 1
    }

    /// Feed one raw sample taken at `now`.
    ///
    /// `now` must not go backwards for a given channel.  Panics if `channel`
    /// was never registered.
    pub fn observe(&mut self, channel: usize, raw: bool, now: u64) -> Option<Transition> {
        let debounce_ms = self.debounce_ms;
        let state = self.channel_mut(channel);

        let active = state.polarity.is_active(raw);
        if active == state.confirmed_active {
            return None;
        }

        if now.saturating_sub(state.last_change_ms) < debounce_ms {
            // Bounce: anchored to the confirmed change, nothing re-armed.
            return None;
        }

        let previous = state.confirmed_active;
        state.confirmed_active = active;
        state.last_change_ms = now;

        Some(Transition {
            channel,
            previous,
            new: active,
            timestamp: now,
        })
    }

    pub fn is_active(&self, channel: usize) -> bool {
        self.channel(channel).confirmed_active
    }

    pub fn last_change_ms(&self, channel: usize) -> u64 {
        self.channel(channel).last_change_ms
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn channel(&self, channel: usize) -> &ChannelState {
        match self.channels.get(channel) {
            Some(state) => state,
            None => panic!(
                "touch channel {} is not registered ({} configured)",
                channel,
                self.channels.len()
            ),
        }
    }

    fn channel_mut(&mut self, channel: usize) -> &mut ChannelState {
        let count = self.channels.len();
        match self.channels.get_mut(channel) {
            Some(state) => state,
            None => panic!(
                "touch channel {} is not registered ({} configured)",
                channel, count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: u64 = 50;

    fn engine(channels: usize) -> DebounceEngine {
        DebounceEngine::seeded(Polarity::ActiveHigh, &vec![false; channels], DEBOUNCE)
    }

    #[test]
    fn seed_uses_polarity_and_zero_timestamp() {
        let e = DebounceEngine::seeded(Polarity::ActiveLow, &[true, false], DEBOUNCE);
        assert_eq!(e.channel_count(), 2);
        assert!(!e.is_active(0));
        assert!(e.is_active(1));
        assert_eq!(e.last_change_ms(0), 0);
        assert_eq!(e.last_change_ms(1), 0);
    }

    #[test]
    fn matching_sample_is_noop() {
        let mut e = engine(1);
        for now in [0, 1, 49, 50, 500, 10_000] {
            assert_eq!(e.observe(0, false, now), None);
        }
        assert_eq!(e.last_change_ms(0), 0);
    }

    #[test]
    fn candidate_inside_window_is_suppressed() {
        let mut e = engine(1);
        assert_eq!(e.observe(0, true, 10), None);
        assert_eq!(e.observe(0, true, 49), None);
        assert!(!e.is_active(0));
        assert_eq!(e.last_change_ms(0), 0);
    }

    #[test]
    fn confirms_at_inclusive_boundary() {
        let mut e = engine(1);
        let t = e.observe(0, true, DEBOUNCE).expect("boundary sample confirms");
        assert_eq!(
            t,
            Transition {
                channel: 0,
                previous: false,
                new: true,
                timestamp: DEBOUNCE,
            }
        );
        assert!(e.is_active(0));
        assert_eq!(e.last_change_ms(0), DEBOUNCE);
    }

    #[test]
    fn window_is_anchored_to_last_confirmed_change() {
        let mut e = engine(1);
        e.observe(0, true, 100).expect("press confirmed");

        // Fast chatter: nothing here re-arms the window.
        for now in (101..150).step_by(3) {
            assert_eq!(e.observe(0, now % 2 == 0, now), None);
        }
        assert!(e.is_active(0));

        // First differing sample at 150 is exactly one window after 100.
        let t = e.observe(0, false, 150).expect("release confirmed");
        assert!(t.previous);
        assert!(!t.new);
        assert_eq!(e.last_change_ms(0), 150);
    }

    #[test]
    fn repeated_identical_sample_never_reemits() {
        let mut e = engine(1);
        assert!(e.observe(0, true, 60).is_some());
        assert_eq!(e.observe(0, true, 60), None);
        assert_eq!(e.observe(0, true, 60), None);
        assert_eq!(e.observe(0, true, 500), None);
    }

    #[test]
    fn channels_are_independent() {
        let mut e = engine(3);
        assert!(e.observe(1, true, 60).is_some());
        assert!(!e.is_active(0));
        assert!(e.is_active(1));
        assert!(!e.is_active(2));

        // Channel 2 still measures from its own seed at 0.
        let t = e.observe(2, true, 61).expect("channel 2 press");
        assert_eq!(t.channel, 2);
        assert_eq!(e.last_change_ms(1), 60);
    }

    #[test]
    fn active_low_press_is_low_level() {
        let mut e = DebounceEngine::seeded(Polarity::ActiveLow, &[true], DEBOUNCE);
        let t = e.observe(0, false, 80).expect("press on low level");
        assert!(t.is_press());
        assert_eq!(e.observe(0, true, 90), None);
    }

    #[test]
    #[should_panic]
    fn unregistered_channel_panics() {
        let mut e = engine(2);
        e.observe(2, true, 100);
    }
}
