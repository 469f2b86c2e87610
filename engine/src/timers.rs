/// Delay and sound counters, decremented by the external 60 Hz cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Timers {
    pub(crate) delay: u8,
    pub(crate) sound: u8,
}

impl Timers {
    /// One 60 Hz period. Neither counter goes below zero.
    pub(crate) fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// Level signal: a tone must play for as long as this holds.
    pub(crate) const fn is_tone_active(&self) -> bool {
        self.sound > 0
    }
}
