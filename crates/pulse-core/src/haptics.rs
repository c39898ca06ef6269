use std::time::Duration;

/// Vibration motor or any other short tactile pulse.
pub trait Haptics {
    fn vibrate(&mut self, duration: Duration);
}

/// Stand-in for hosts without a motor: records the request in the log.
#[derive(Debug, Default)]
pub struct LoggedHaptics {
    pulses: u64,
}

impl LoggedHaptics {
    pub fn pulses(&self) -> u64 {
        self.pulses
    }
}

impl Haptics for LoggedHaptics {
    fn vibrate(&mut self, duration: Duration) {
        self.pulses += 1;
        log::info!("vibrate {} ms", duration.as_millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_pulse() {
        let mut haptics = LoggedHaptics::default();
        assert_eq!(haptics.pulses(), 0);
        haptics.vibrate(Duration::from_millis(50));
        haptics.vibrate(Duration::from_millis(10));
        assert_eq!(haptics.pulses(), 2);
    }
}
