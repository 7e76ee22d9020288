//! usbd-cli - transport shims
//!
//! - ESP-IDF: USB-Serial-JTAG endpoint carries the command line, UART1 TX on
//!   GPIO6 carries the logs
//! - Host: stdin/stdout loopback, logs on stderr. Set `USBD_CLI_LOG` to a
//!   level name (error, warn, info, debug, trace) to filter them.
//!
//! Both loops follow the transport contract: feed bytes, then poll output
//! until nothing is pending before feeding again.

#[cfg(target_os = "espidf")]
fn main() {
    if let Err(err) = device::run() {
        panic!("usb cli stopped: {:?}", err);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> std::io::Result<()> {
    host::run()
}

#[cfg(target_os = "espidf")]
mod device {
    use esp_idf_svc::hal::delay::{FreeRtos, BLOCK, NON_BLOCK};
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::usb_serial::{UsbSerialConfig, UsbSerialDriver};
    use esp_idf_svc::sys::EspError;

    use usbd_cli::uart_logger::{drain_to_uart, init_uart_logger, UartLoggerConfig};
    use usbd_cli::{Cli, CLI_LOG_STREAM};

    /// USB packet size of the serial endpoint
    const RX_CHUNK: usize = 64;

    /// Poll period when the host is idle
    const IDLE_DELAY_MS: u32 = 10;

    pub fn run() -> Result<(), EspError> {
        esp_idf_svc::sys::link_patches();

        let peripherals = Peripherals::take()?;
        let pins = peripherals.pins;

        let mut usb = UsbSerialDriver::new(
            peripherals.usb_serial,
            pins.gpio19,
            pins.gpio20,
            &UsbSerialConfig::new(),
        )?;
        let mut uart = init_uart_logger(peripherals.uart1, pins.gpio6, &UartLoggerConfig::default())?;

        let mut cli: Cli<'static> = Cli::default();
        let mut rx = [0u8; RX_CHUNK];

        usb.write(cli.prompt(), BLOCK)?;

        loop {
            let received = usb.read(&mut rx, NON_BLOCK).unwrap_or(0);
            // Overflow is reported through output, nothing to do here
            let _ = cli.input(&rx[..received]);

            while let Some(fragment) = cli.output() {
                if !fragment.is_empty() {
                    usb.write(fragment, BLOCK)?;
                }
            }

            drain_to_uart(&mut uart, &CLI_LOG_STREAM);

            if received == 0 {
                FreeRtos::delay_ms(IDLE_DELAY_MS);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use std::io::{self, Read, Write};

    use usbd_cli::uart_logger::drain_log_stream;
    use usbd_cli::{Cli, CliConfig, LogLevel, CLI_LOG_STREAM, COMMANDS};

    /// Terminals hand over lines ending in LF only
    const HOST_CONFIG: CliConfig = CliConfig::new().with_terminator("\n").with_newline("\n");

    pub fn run() -> io::Result<()> {
        let level = std::env::var("USBD_CLI_LOG")
            .ok()
            .and_then(|name| LogLevel::parse(&name))
            .unwrap_or(LogLevel::Info);
        CLI_LOG_STREAM.set_max_level(level);

        let mut cli: Cli<'static> = Cli::new(COMMANDS, HOST_CONFIG, &CLI_LOG_STREAM);
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr();

        writeln!(stdout, "{}", usbd_cli::cli::VERSION)?;
        stdout.write_all(cli.prompt())?;
        stdout.flush()?;

        let mut chunk = [0u8; 64];
        loop {
            let received = stdin.read(&mut chunk)?;
            if received == 0 {
                return Ok(());
            }

            // One byte at a time: bytes after a terminator would otherwise be
            // discarded while the session is busy
            for byte in &chunk[..received] {
                let _ = cli.input(std::slice::from_ref(byte));
                while let Some(fragment) = cli.output() {
                    stdout.write_all(fragment)?;
                }
            }
            stdout.flush()?;

            drain_log_stream(&CLI_LOG_STREAM, &mut |line| {
                let _ = stderr.write_all(line);
            });
        }
    }
}
