//! Serial console: message input and status output.
//!
//! ```text
//! PC terminal ──▶ RX ──▶ LineReader ──▶ Transmitter ──▶ LED
//!      ▲                                     │
//!      └──────────── TX ◀── UartSink ◀───────┘ status text
//! ```

use core::fmt;

use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

/// Install the UART driver with TX and RX, no flow control.
pub fn init_uart<'d, U: uart::Uart>(
    uart: impl Peripheral<P = U> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
    baud_rate: u32,
) -> Result<UartDriver<'d>, EspError> {
    let config = uart::config::Config::default().baudrate(Hertz(baud_rate));

    UartDriver::new(
        uart,
        tx_pin,
        rx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &config,
    )
}

/// `core::fmt::Write` adapter so the transmitter can print status to UART.
///
/// Line feeds are expanded to CRLF for serial terminals.
pub struct UartSink<'a, 'd> {
    uart: &'a UartDriver<'d>,
}

impl<'a, 'd> UartSink<'a, 'd> {
    pub fn new(uart: &'a UartDriver<'d>) -> Self {
        Self { uart }
    }

    fn write_all(&self, mut bytes: &[u8]) -> fmt::Result {
        while !bytes.is_empty() {
            let written = self.uart.write(bytes).map_err(|_| fmt::Error)?;
            bytes = &bytes[written..];
        }
        Ok(())
    }
}

impl fmt::Write for UartSink<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for (i, part) in s.split('\n').enumerate() {
            if i > 0 {
                self.write_all(b"\r\n")?;
            }
            self.write_all(part.as_bytes())?;
        }
        Ok(())
    }
}
