//! GPIO line adapters
//!
//! OpenTherm interface circuits sit between the MCU and the current
//! loop, and most of them invert: the common master-side transistor
//! driver pulls the loop active when the pin is low, while receiver
//! optocouplers usually read active as high. Both adapters therefore
//! take their polarity at construction.

use embedded_hal::digital::{InputPin, OutputPin};
use openhearth_link::traits::{LineDriver, LineSensor};

/// Output line driver over an `embedded-hal` pin.
pub struct GpioLineDriver<P> {
    pin: P,
    /// If true, line active = pin LOW
    inverted: bool,
}

impl<P: OutputPin> GpioLineDriver<P> {
    /// Wraps an output pin.
    ///
    /// # Arguments
    /// - `pin`: the GPIO pin wired to the interface driver
    /// - `inverted`: if true, the line is active when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Line active when the pin is LOW: the usual transistor driver.
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Line active when the pin is HIGH.
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    fn drive(&mut self, active: bool) {
        // OpenTherm lines hang off plain MCU pins whose writes are
        // infallible; a failure here has nothing useful to return to.
        if active != self.inverted {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
    }
}

impl<P: OutputPin> LineDriver for GpioLineDriver<P> {
    fn set_active(&mut self) {
        self.drive(true);
    }

    fn set_idle(&mut self) {
        self.drive(false);
    }
}

/// Input line sensor over an `embedded-hal` pin.
pub struct GpioLineSensor<P> {
    pin: P,
    /// If true, line active = pin LOW
    inverted: bool,
}

impl<P: InputPin> GpioLineSensor<P> {
    /// Wraps an input pin.
    ///
    /// # Arguments
    /// - `pin`: the GPIO pin wired to the interface receiver
    /// - `inverted`: if true, the line is active when the pin reads LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Line active when the pin reads HIGH: the usual optocoupler.
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Line active when the pin reads LOW.
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> LineSensor for GpioLineSensor<P> {
    fn is_active(&mut self) -> bool {
        // A failed read counts as idle; edges it loses are caught by
        // the link's own timeout handling.
        let high = self.pin.is_high().unwrap_or(false);
        high != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_active_low_driver_pulls_pin_down() {
        let mut driver = GpioLineDriver::new_active_low(MockPin { high: true });

        driver.set_active();
        assert!(!driver.pin.high);

        driver.set_idle();
        assert!(driver.pin.high);
    }

    #[test]
    fn test_active_high_driver_pulls_pin_up() {
        let mut driver = GpioLineDriver::new_active_high(MockPin { high: false });

        driver.set_active();
        assert!(driver.pin.high);

        driver.set_idle();
        assert!(!driver.pin.high);
    }

    #[test]
    fn test_sensor_polarity() {
        let mut sensor = GpioLineSensor::new_active_high(MockPin { high: true });
        assert!(sensor.is_active());
        sensor.pin.high = false;
        assert!(!sensor.is_active());

        let mut inverted = GpioLineSensor::new_active_low(MockPin { high: true });
        assert!(!inverted.is_active());
        inverted.pin.high = false;
        assert!(inverted.is_active());
    }
}
