//! Log output for the interpreter.
//!
//! Formats [`LogEntry`] records and drains a [`LogStream`] into a byte sink.
//! On ESP-IDF the sink is a TX-only UART, kept apart from the USB endpoint
//! that carries the command line.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO6 (TX) ──────▶ USB-UART RX
//!                              └─▶ PC Serial Monitor
//! ```

use core::fmt::Write;

use crate::logging::{LogEntry, LogStream, SliceWriter};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// Longest formatted line: timestamp, level, message and newline.
pub const FORMATTED_LEN: usize = 160;

/// UART configuration for logging.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 6,
        }
    }
}

/// Format log entry to a buffer.
///
/// Format: `[timestamp_us] LEVEL: message\r\n`
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    let mut writer = SliceWriter { buf, pos: 0 };
    let _ = write!(
        writer,
        "[{:10}] {}: {}\r\n",
        entry.timestamp_us,
        entry.level.as_str(),
        entry.message()
    );
    writer.pos
}

/// Drain every queued entry of `stream` into `sink`, one formatted line per
/// call. A line reporting dropped entries follows, if any were dropped.
///
/// Returns the number of entries drained.
pub fn drain_log_stream<const N: usize>(
    stream: &LogStream<N>,
    sink: &mut dyn FnMut(&[u8]),
) -> usize {
    let mut format_buf = [0u8; FORMATTED_LEN];
    let mut count = 0;

    while let Some(entry) = stream.drain() {
        let len = format_log_entry(&entry, &mut format_buf);
        sink(&format_buf[..len]);
        count += 1;
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        let mut writer = SliceWriter { buf: &mut format_buf, pos: 0 };
        let _ = write!(writer, "[WARN] Dropped: {}\r\n", dropped);
        let len = writer.pos;
        sink(&format_buf[..len]);
        stream.reset_dropped();
    }

    count
}

/// Initialize UART1 TX-only for logging output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// Drain `stream` to the UART.
#[cfg(target_os = "espidf")]
pub fn drain_to_uart<const N: usize>(uart: &mut UartTxDriver<'_>, stream: &LogStream<N>) -> usize {
    drain_log_stream(stream, &mut |line| {
        let _ = uart.write(line);
    })
}
