//! Blocking delay adapter
//!
//! Wraps any `embedded-hal` [`DelayNs`] so it can pace the link's bit
//! banging and settle times.

use embedded_hal::delay::DelayNs;
use openhearth_link::traits::Delay;

/// [`Delay`] implementation over an `embedded-hal` delay.
pub struct HalDelay<D> {
    delay: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingDelay {
        elapsed_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_delegates_to_hal_delay() {
        let mut delay = HalDelay::new(CountingDelay { elapsed_ns: 0 });
        delay.delay_us(500);
        delay.delay_ms(2);
        assert_eq!(delay.delay.elapsed_ns, 2_500_000);
    }
}
