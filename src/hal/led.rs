//! Indicator LED output.

use esp_idf_svc::hal::gpio::{self, Output, PinDriver};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::sys::EspError;

/// LED pin driver; implements `embedded_hal::digital::OutputPin`.
pub type LedDriver<'d, T> = PinDriver<'d, T, Output>;

/// Configure `pin` as a push-pull output, driven low (unlit).
pub fn init_led<'d, T: gpio::OutputPin>(
    pin: impl Peripheral<P = T> + 'd,
) -> Result<LedDriver<'d, T>, EspError> {
    let mut led = PinDriver::output(pin)?;
    led.set_low()?;
    Ok(led)
}
