/// Counter updated in two phases: a local speculative step, then either a
/// commit with the value the store reports or a rollback to the last
/// confirmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Confirmed,
    Speculative { previous: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("An update is already in flight")]
    AlreadyPending,

    #[error("No update in flight")]
    NothingPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimisticCounter {
    value: i64,
    phase: CounterPhase,
}

impl OptimisticCounter {
    pub fn new(confirmed: i64) -> Self {
        Self {
            value: confirmed.max(0),
            phase: CounterPhase::Confirmed,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, CounterPhase::Speculative { .. })
    }

    /// Phase one. Returns the speculative value.
    pub fn speculate_increment(&mut self) -> Result<i64, CounterError> {
        if self.is_pending() {
            return Err(CounterError::AlreadyPending);
        }
        self.phase = CounterPhase::Speculative {
            previous: self.value,
        };
        self.value = self.value.saturating_add(1);
        Ok(self.value)
    }

    /// Phase two, success. The store's value is authoritative.
    pub fn commit(&mut self, confirmed: i64) -> Result<i64, CounterError> {
        if !self.is_pending() {
            return Err(CounterError::NothingPending);
        }
        self.value = confirmed.max(0);
        self.phase = CounterPhase::Confirmed;
        Ok(self.value)
    }

    /// Phase two, failure.
    pub fn rollback(&mut self) -> Result<i64, CounterError> {
        match self.phase {
            CounterPhase::Speculative { previous } => {
                self.value = previous;
                self.phase = CounterPhase::Confirmed;
                Ok(self.value)
            }
            CounterPhase::Confirmed => Err(CounterError::NothingPending),
        }
    }
}
