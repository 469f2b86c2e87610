//! Per-family execution counters.

use strum::EnumCount;
use tracing::info;

use crate::Opcode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStats {
    executed: [u64; Opcode::COUNT],
    key_wait_spins: u64,
    ignored: u64,
}

impl Default for ExecutionStats {
    fn default() -> Self {
        Self {
            executed: [0; Opcode::COUNT],
            key_wait_spins: 0,
            ignored: 0,
        }
    }
}

impl ExecutionStats {
    pub(crate) fn record(&mut self, opcode: Opcode) {
        self.executed[u8::from(opcode) as usize] += 1;
    }

    pub(crate) fn record_key_wait(&mut self) {
        self.key_wait_spins += 1;
    }

    pub(crate) fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    /// Instructions of the given family completed so far, including key-wait
    /// re-issues and ignored sub-cases. Steps that fail are not counted.
    pub fn count(&self, opcode: Opcode) -> u64 {
        self.executed[u8::from(opcode) as usize]
    }

    pub fn total(&self) -> u64 {
        self.executed.iter().sum()
    }

    /// Steps that re-issued `Fx0A` because no key was held.
    pub const fn key_wait_spins(&self) -> u64 {
        self.key_wait_spins
    }

    /// Unmatched sub-cases that were executed as no-ops.
    pub const fn ignored(&self) -> u64 {
        self.ignored
    }

    /// Logs the non-zero counters at `INFO`.
    pub fn report(&self) {
        for nibble in 0..Opcode::COUNT as u8 {
            let Ok(opcode) = Opcode::try_from(nibble) else {
                continue;
            };
            let count = self.count(opcode);
            if count == 0 {
                continue;
            }
            info!(%opcode, count, "executed");
        }
        info!(
            total = self.total(),
            key_wait_spins = self.key_wait_spins,
            ignored = self.ignored,
            "execution summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_family() {
        let mut stats = ExecutionStats::default();
        stats.record(Opcode::Draw);
        stats.record(Opcode::Draw);
        stats.record(Opcode::Misc);
        stats.record_key_wait();
        stats.record_ignored();

        assert_eq!(stats.count(Opcode::Draw), 2);
        assert_eq!(stats.count(Opcode::Misc), 1);
        assert_eq!(stats.count(Opcode::Jump), 0);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.key_wait_spins(), 1);
        assert_eq!(stats.ignored(), 1);
    }
}
