use std::io::Write;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::consts::{DMX_DEFAULT_FOOTPRINT, DMX_DEFAULT_START_ADDRESS, PLACEHOLDER};
use crate::monitor::{DmxMonitor, FrameStatus};
use crate::window::ChannelWindow;

/// `DD-MM-YYYY HH:MM:SS.uuuuuu`
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[day]-[month]-[year] [hour]:[minute]:[second].[subsecond digits:6]"
);

#[derive(Debug)]
pub enum ScrollingError {
    /// Writing to the output failed.
    Io(std::io::Error),
    /// The timestamp couldn't be formatted.
    Format(time::error::Format),
}

impl core::fmt::Display for ScrollingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScrollingError::Io(error) => write!(f, "writing monitor output failed: {error}"),
            ScrollingError::Format(error) => write!(f, "formatting timestamp failed: {error}"),
        }
    }
}

impl std::error::Error for ScrollingError {}

impl From<std::io::Error> for ScrollingError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<time::error::Format> for ScrollingError {
    fn from(value: time::error::Format) -> Self {
        Self::Format(value)
    }
}

/// Source of the timestamps printed in front of each line.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local timezone. Falls back to UTC if the local offset can't be determined.
///
/// On most Unix systems `time` refuses to look up the local offset once the process runs more
/// than one thread, so a multi-threaded application gets UTC timestamps from this clock. Use
/// [OffsetClock::local] before spawning threads in that case.
#[derive(Debug, Default, Copy, Clone)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Wall clock with a fixed UTC offset.
#[derive(Debug, Copy, Clone)]
pub struct OffsetClock {
    offset: UtcOffset,
}

impl OffsetClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Captures the current local offset, or UTC if it can't be determined. Call this while
    /// the process is still single threaded.
    pub fn local() -> Self {
        Self::new(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Clock for OffsetClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ScrollingMonitorConfig {
    /// Amount of displayed slots.
    pub footprint: u16,
    /// First displayed slot. Falls back to 1 if the footprint doesn't fit behind it.
    pub start_address: u16,
}

impl Default for ScrollingMonitorConfig {
    fn default() -> Self {
        Self {
            footprint: DMX_DEFAULT_FOOTPRINT,
            start_address: DMX_DEFAULT_START_ADDRESS,
        }
    }
}

/// Monitor for hosts. Every received frame becomes one timestamped line:
///
/// ```text
/// 05-03-2024 14:07:09.123456 DMX 3:4:2 22 33 -- --
/// ```
///
/// After `DMX` come the frame length, the footprint and the start address, followed by one
/// lowercase hex pair per displayed slot. Slots the frame didn't reach are printed as `--`.
pub struct ScrollingMonitor<W: Write, C: Clock = LocalClock> {
    writer: W,
    clock: C,
    window: ChannelWindow,
    started: bool,
}

impl ScrollingMonitor<std::io::Stdout, LocalClock> {
    /// Creates a monitor printing to the standard output.
    pub fn stdout(config: &ScrollingMonitorConfig) -> Self {
        Self::new(std::io::stdout(), LocalClock, config)
    }
}

impl<W: Write, C: Clock> ScrollingMonitor<W, C> {
    pub fn new(writer: W, clock: C, config: &ScrollingMonitorConfig) -> Self {
        let mut window = ChannelWindow::default();
        window.set_footprint(config.footprint);
        if !window.set_start_address(config.start_address) {
            warn!(
                "configured start address {} doesn't fit footprint {}",
                config.start_address,
                window.footprint()
            );
        }

        Self {
            writer,
            clock,
            window,
            started: false,
        }
    }

    /// Sets the amount of displayed slots, clamped to `1..=512`. The start address isn't
    /// checked against the new footprint until it is set again.
    pub fn set_dmx_footprint(&mut self, footprint: u16) {
        self.window.set_footprint(footprint);
    }

    pub fn window(&self) -> &ChannelWindow {
        &self.window
    }

    pub fn get_writer(&self) -> &W {
        &self.writer
    }

    pub fn get_writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn write_timestamp(&mut self) -> Result<(), ScrollingError> {
        let now = self.clock.now();
        now.format_into(&mut self.writer, TIMESTAMP_FORMAT)?;

        Ok(())
    }

    fn write_event(&mut self, event: &str) -> Result<(), ScrollingError> {
        self.write_timestamp()?;
        writeln!(self.writer, " {event}")?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Writes one ` xx` token per slot of `window`, or ` --` for slots beyond the end of `data`.
fn write_channels<W: Write>(
    writer: &mut W,
    window: &ChannelWindow,
    data: &[u8],
) -> std::io::Result<()> {
    let indices = window.indices();
    let end = indices.end.min(data.len());
    let start = indices.start.min(end);

    for value in &data[start..end] {
        write!(writer, " {value:02x}")?;
    }

    for _ in 0..window.missing_slots(data.len()) {
        write!(writer, " {PLACEHOLDER}")?;
    }

    Ok(())
}

impl<W: Write, C: Clock> DmxMonitor for ScrollingMonitor<W, C> {
    type Error = ScrollingError;

    fn dmx_footprint(&self) -> u16 {
        self.window.footprint()
    }

    fn dmx_start_address(&self) -> u16 {
        self.window.start_address()
    }

    fn set_dmx_start_address(&mut self, start_address: u16) -> bool {
        if !self.window.set_start_address(start_address) {
            warn!(
                "rejected start address {} for footprint {}",
                start_address,
                self.window.footprint()
            );
            return false;
        }

        true
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.started {
            trace!("scrolling monitor already started");
            return Ok(());
        }

        self.started = true;
        debug!("starting scrolling monitor");
        self.write_event("Start")
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        if !self.started {
            trace!("scrolling monitor already stopped");
            return Ok(());
        }

        self.started = false;
        debug!("stopping scrolling monitor");
        self.write_event("Stop")
    }

    /// Prints one line for the frame. This happens whether the monitor is started or not.
    fn set_data(&mut self, _port: u8, data: &[u8]) -> Result<FrameStatus, Self::Error> {
        self.write_timestamp()?;
        write!(
            self.writer,
            " DMX {}:{}:{}",
            data.len(),
            self.window.footprint(),
            self.window.start_address()
        )?;
        write_channels(&mut self.writer, &self.window, data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;

        Ok(FrameStatus::Complete)
    }
}

impl<W: Write, C: Clock> Drop for ScrollingMonitor<W, C> {
    fn drop(&mut self) {
        // nobody is left to report a write error to
        let _ = self.stop();
    }
}
