//! RustCwBeacon - Main entry point
//!
//! On the ESP32: read lines from UART0, blink the LED on GPIO2.
//! On the host: read lines from stdin, show the LED in the log and decode
//! the blinks back to text as a loopback check.
//!
//! Both loops poll for a complete line, transmit it to completion, then
//! poll again. Bytes typed during a transmission wait in the input buffer.

use rust_cw_beacon::{BeaconError, TransmitReport, CONFIG, VERSION};

fn log_report(result: Result<TransmitReport, BeaconError>) {
    match result {
        Ok(report) if report.transmitted => log::info!(
            "transmitted {} chars ({} skipped) in {} ms",
            report.letters,
            report.skipped,
            report.elapsed_ms
        ),
        Ok(_) => {}
        Err(e) => log::error!("transmission aborted: {}", e),
    }
}

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_svc::hal::delay::{FreeRtos, BLOCK};
    use esp_idf_svc::hal::peripherals::Peripherals;
    use rust_cw_beacon::console::LineReader;
    use rust_cw_beacon::hal::{init_led, init_uart, UartSink};
    use rust_cw_beacon::Transmitter;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let config = CONFIG.or_default();
    let peripherals = Peripherals::take()?;

    let led = init_led(peripherals.pins.gpio2)?;
    let uart = init_uart(
        peripherals.uart0,
        peripherals.pins.gpio1,
        peripherals.pins.gpio3,
        config.uart_baud,
    )?;

    let mut status = UartSink::new(&uart);
    let mut tx = Transmitter::new(led, FreeRtos, config.timing());
    let mut reader = LineReader::new();

    log::info!(
        "{}: {} ms unit ({} WPM)",
        VERSION,
        tx.timing().dot_ms(),
        tx.timing().wpm()
    );
    tx.ready_banner(&mut status);

    let mut byte = [0u8; 1];
    loop {
        match uart.read(&mut byte, BLOCK) {
            Ok(1) => {
                if let Some(line) = reader.process_byte(byte[0]) {
                    log_report(tx.transmit(line, &mut status));
                }
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("{}: {}", BeaconError::Uart, e);
                FreeRtos::delay_ms(100);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use std::io::Read;

    use rust_cw_beacon::console::LineReader;
    use rust_cw_beacon::Transmitter;

    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = CONFIG.or_default();
    let timing = config.timing();

    let mut status = host::StdoutSink;
    let mut tx = Transmitter::new(host::TerminalLed::new(timing), host::StdDelay, timing);
    let mut reader = LineReader::new();

    log::info!("{}: {} ms unit ({} WPM)", VERSION, timing.dot_ms(), timing.wpm());
    tx.ready_banner(&mut status);

    // End of input ends the simulator
    for byte in std::io::stdin().lock().bytes() {
        let byte = byte.map_err(|e| anyhow::anyhow!("{}: {}", BeaconError::Uart, e))?;
        if let Some(line) = reader.process_byte(byte) {
            host::send(&mut tx, line, &mut status);
        }
    }

    // Last line without a trailing newline, e.g. `printf SOS | beacon`
    if let Some(line) = reader.flush() {
        host::send(&mut tx, line, &mut status);
    }

    Ok(())
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use core::convert::Infallible;
    use std::io::Write as _;
    use std::time::{Duration, Instant};

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use rust_cw_beacon::{Decoder, TimingProfile, Transmitter};

    /// Transmit one line and log what the loopback decoder made of it.
    pub fn send(tx: &mut Transmitter<TerminalLed, StdDelay>, line: &str, status: &mut StdoutSink) {
        tx.pin_mut().start_message();
        super::log_report(tx.transmit(line, status));
        if let Some(decoded) = tx.pin_mut().loopback() {
            log::info!("loopback decoded: {}", decoded);
        }
    }

    /// Status text to stdout, flushed per write so progress shows live.
    pub struct StdoutSink;

    impl core::fmt::Write for StdoutSink {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let mut out = std::io::stdout().lock();
            out.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)?;
            out.flush().map_err(|_| core::fmt::Error)
        }
    }

    /// Blocking sleep.
    pub struct StdDelay;

    impl DelayNs for StdDelay {
        fn delay_ns(&mut self, ns: u32) {
            std::thread::sleep(Duration::from_nanos(u64::from(ns)));
        }

        fn delay_ms(&mut self, ms: u32) {
            std::thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }

    /// Simulated LED: logs each edge and feeds a decoder with wall-clock timing.
    pub struct TerminalLed {
        epoch: Instant,
        decoder: Decoder,
        keyed: bool,
    }

    impl TerminalLed {
        pub fn new(timing: TimingProfile) -> Self {
            Self {
                epoch: Instant::now(),
                decoder: Decoder::new(timing),
                keyed: false,
            }
        }

        /// Reset the loopback decoder for a new message.
        pub fn start_message(&mut self) {
            let now = self.now_ms();
            self.decoder.clear(now);
            self.keyed = false;
        }

        /// Text decoded from this message's blinks, if anything was keyed.
        pub fn loopback(&mut self) -> Option<&str> {
            if !self.keyed {
                return None;
            }
            Some(self.decoder.finish())
        }

        fn now_ms(&self) -> u64 {
            self.epoch.elapsed().as_millis() as u64
        }

        fn write(&mut self, lit: bool) {
            let now = self.now_ms();
            log::debug!("[{:>8} ms] LED {}", now, if lit { "ON" } else { "off" });
            self.keyed |= lit;
            self.decoder.tick(now, lit);
        }
    }

    impl ErrorType for TerminalLed {
        type Error = Infallible;
    }

    impl OutputPin for TerminalLed {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.write(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.write(true);
            Ok(())
        }
    }
}
