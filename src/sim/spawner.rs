//! Interval-gated spawn timing

/// Decides whether enough time has passed to create another catchable
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: u64,
    /// `None` until the first spawn, so the first attempt always succeeds
    last_spawn_ms: Option<u64>,
}

impl Spawner {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_spawn_ms(&self) -> Option<u64> {
        self.last_spawn_ms
    }

    /// Returns true and records `now_ms` if a spawn is allowed at this time
    pub fn try_spawn(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_spawn_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                log::trace!("Spawn skipped: {}ms since last", now_ms.saturating_sub(last));
                return false;
            }
        }
        self.last_spawn_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_always_spawns() {
        let mut spawner = Spawner::new(1000);
        assert_eq!(spawner.last_spawn_ms(), None);
        assert!(spawner.try_spawn(0));
        assert_eq!(spawner.last_spawn_ms(), Some(0));
    }

    #[test]
    fn test_interval_gate() {
        let mut spawner = Spawner::new(1000);
        assert!(spawner.try_spawn(0));
        assert!(!spawner.try_spawn(500));
        assert_eq!(spawner.last_spawn_ms(), Some(0));
        assert!(spawner.try_spawn(1000));
        assert_eq!(spawner.last_spawn_ms(), Some(1000));
    }

    #[test]
    fn test_skipped_attempt_does_not_reset_timer() {
        let mut spawner = Spawner::new(100);
        assert!(spawner.try_spawn(10));
        assert!(!spawner.try_spawn(60));
        assert!(!spawner.try_spawn(109));
        assert!(spawner.try_spawn(110));
    }
}
