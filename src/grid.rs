use crate::console::{Console, ConsoleColor};
use crate::consts::{
    DMX_UNIVERSE_SIZE, GRID_BRIGHTNESS_THRESHOLD, GRID_COLUMNS, GRID_DEFAULT_TOP_ROW,
    GRID_GUTTER_WIDTH, GRID_MAX_TOP_ROW, GRID_ROWS,
};
use crate::monitor::{DmxMonitor, FrameStatus};
use crate::window::ChannelWindow;

/// The slot values of the most recently received frame, without start code.
pub type DmxFrame = heapless::Vec<u8, DMX_UNIVERSE_SIZE>;

const HEADER: &str = "    01 02 03 04 05 06 07 08 09 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32";
/// Slot number of the first cell of each row, right aligned.
const ROW_LABELS: [&str; GRID_ROWS] = [
    "  1", " 33", " 65", " 97", "129", "161", "193", "225", "257", "289", "321", "353", "385",
    "417", "449", "481",
];
const STOPPED_ROW: &str = "-- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- -- --";
const BLANK_ROW: &str = "                                                                                               ";
const BLANK_CELL: &str = "   ";
const ZERO_CELL: &str = " 0";

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GridError<E> {
    /// An error raised by the console driver.
    ConsoleError(E),
}

impl<E: core::fmt::Display> core::fmt::Display for GridError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::ConsoleError(error) => error.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for GridError<E> {}

impl<E> From<E> for GridError<E> {
    fn from(value: E) -> Self {
        Self::ConsoleError(value)
    }
}

#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridMonitorConfig {
    /// Console row of the header. The 16 data rows are printed below it. Values above
    /// [GRID_MAX_TOP_ROW] are lowered to it.
    pub top_row: u8,
}

impl Default for GridMonitorConfig {
    fn default() -> Self {
        Self {
            top_row: GRID_DEFAULT_TOP_ROW,
        }
    }
}

/// Monitor for targets with a positional console. It keeps a 16×32 grid of the whole universe
/// on screen and rewrites it in place on every frame.
///
/// Layout, starting at `top_row`:
/// ```text
///     01 02 03 .. 32
///   1 ff  0 1a ..
///  33
///  ..
/// 481
/// ```
pub struct GridMonitor<C: Console> {
    console: C,
    top_row: u8,
    started: bool,
    frame: DmxFrame,
}

impl<C: Console> GridMonitor<C> {
    pub fn new(console: C, config: &GridMonitorConfig) -> Self {
        if config.top_row > GRID_MAX_TOP_ROW {
            warn!(
                "top row {} leaves no room for the grid, using {}",
                config.top_row,
                GRID_MAX_TOP_ROW
            );
        }

        Self {
            console,
            top_row: config.top_row.min(GRID_MAX_TOP_ROW),
            started: false,
            frame: DmxFrame::new(),
        }
    }

    /// Console row the header is printed on.
    pub fn top_row(&self) -> u8 {
        self.top_row
    }

    /// The most recently received frame.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn get_console(&self) -> &C {
        &self.console
    }

    pub fn get_console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Redraws all data rows from the stored frame.
    ///
    /// This runs regardless of the started state.
    pub fn update(&mut self) -> Result<(), GridError<C::DriverError>> {
        for row in 0..GRID_ROWS {
            let console_row = self.data_row(row);
            self.console.set_cursor(GRID_GUTTER_WIDTH, console_row)?;

            let row_start = row * GRID_COLUMNS;
            let row_slots = self.frame.len().saturating_sub(row_start).min(GRID_COLUMNS);
            if row_slots == 0 {
                self.console.puts(BLANK_ROW)?;
                continue;
            }

            for &value in &self.frame[row_start..row_start + row_slots] {
                put_cell(&mut self.console, value)?;
                self.console.putc(' ')?;
            }

            for _ in row_slots..GRID_COLUMNS {
                self.console.puts(BLANK_CELL)?;
            }
        }

        Ok(())
    }

    fn data_row(&self, row: usize) -> u8 {
        self.top_row + 1 + row as u8
    }
}

fn put_cell<C: Console>(console: &mut C, value: u8) -> Result<(), C::DriverError> {
    if value == 0 {
        return console.puts(ZERO_CELL);
    }

    let foreground = if value > GRID_BRIGHTNESS_THRESHOLD {
        ConsoleColor::BLACK
    } else {
        ConsoleColor::WHITE
    };

    console.puthex_fg_bg(value, foreground, ConsoleColor::gray(value))
}

impl<C: Console> DmxMonitor for GridMonitor<C> {
    type Error = GridError<C::DriverError>;

    fn dmx_footprint(&self) -> u16 {
        ChannelWindow::FULL_UNIVERSE.footprint()
    }

    fn dmx_start_address(&self) -> u16 {
        ChannelWindow::FULL_UNIVERSE.start_address()
    }

    /// The grid always shows the whole universe, so only a start address of 1 is accepted.
    fn set_dmx_start_address(&mut self, start_address: u16) -> bool {
        if !ChannelWindow::FULL_UNIVERSE.accepts_start_address(start_address) {
            warn!("rejected start address {} for the grid monitor", start_address);
            return false;
        }

        true
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.started {
            trace!("grid monitor already started");
            return Ok(());
        }

        self.started = true;
        debug!("starting grid monitor at row {}", self.top_row);

        self.console.clear_line(self.top_row)?;
        self.console.set_cursor(0, self.top_row)?;
        self.console.puts(HEADER)?;

        for (row, label) in ROW_LABELS.iter().enumerate() {
            let console_row = self.data_row(row);
            self.console.set_cursor(0, console_row)?;
            self.console.puts(label)?;
        }

        self.update()
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        if !self.started {
            trace!("grid monitor already stopped");
            return Ok(());
        }

        self.started = false;
        debug!("stopping grid monitor");

        for row in 0..GRID_ROWS {
            let console_row = self.data_row(row);
            self.console.set_cursor(GRID_GUTTER_WIDTH, console_row)?;
            self.console.puts(STOPPED_ROW)?;
        }

        Ok(())
    }

    /// Replaces the stored frame and redraws the grid. Frames longer than one universe are
    /// cut to 512 slots.
    fn set_data(&mut self, _port: u8, data: &[u8]) -> Result<FrameStatus, Self::Error> {
        let kept = data.len().min(DMX_UNIVERSE_SIZE);

        self.frame.clear();
        self.frame.extend(data[..kept].iter().copied());

        self.update()?;

        if kept < data.len() {
            warn!("frame of {} slots truncated to {}", data.len(), kept);
            return Ok(FrameStatus::Truncated {
                received: data.len(),
                kept,
            });
        }

        Ok(FrameStatus::Complete)
    }

    /// Blanks the header and all data rows. The started state is left as is.
    fn cls(&mut self) -> Result<(), Self::Error> {
        for row in self.top_row..=self.top_row + GRID_ROWS as u8 {
            self.console.clear_line(row)?;
        }

        Ok(())
    }
}

impl<C: Console> Drop for GridMonitor<C> {
    fn drop(&mut self) {
        // nobody is left to report a console error to
        let _ = self.stop();
    }
}
