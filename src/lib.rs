//! Diagnostic monitor for a single DMX512 (ANSI E1.11) universe. It renders the most recently
//! received slot values so an operator can check that data arrives and inspect single channels.
//! The monitor never sends or forwards DMX data, it only formats the frames it is given.
//!
//! There are two monitors sharing the [monitor::DmxMonitor] interface:
//! - [scrolling::ScrollingMonitor] (needs `std`) prints one timestamped hex dump line per frame
//!   for a configurable window of slots.
//! - [grid::GridMonitor] keeps a 16×32 grid of the whole universe on a positional
//!   [console::Console] and rewrites it in place. It needs neither `std` nor an allocator.
//!
//! Pick the one that fits the target. Both render every frame they receive, so call
//! [monitor::DmxMonitor::start] before handing frames to them.
//!
//! # Usage
//!
//! ```rust
//! # #[cfg(feature = "std")]
//! # {
//! use dmx_monitor::monitor::DmxMonitor;
//! use dmx_monitor::scrolling::{ScrollingMonitor, ScrollingMonitorConfig};
//!
//! let mut monitor = ScrollingMonitor::stdout(&ScrollingMonitorConfig {
//!     footprint: 4,
//!     start_address: 2,
//! });
//!
//! monitor.start().unwrap();
//! // prints something like "05-03-2024 14:07:09.123456 DMX 3:4:2 22 33 -- --"
//! monitor.set_data(0, &[0x11, 0x22, 0x33]).unwrap();
//! monitor.stop().unwrap();
//! # }
//! ```
//!
//! ## Grid on a bare metal console
//!
//! ```rust
//! use dmx_monitor::console::{Console, ConsoleColor};
//! use dmx_monitor::grid::{GridMonitor, GridMonitorConfig};
//! use dmx_monitor::monitor::DmxMonitor;
//!
//! struct NullConsole;
//!
//! impl Console for NullConsole {
//!     type DriverError = core::convert::Infallible;
//!
//!     fn clear_line(&mut self, _row: u8) -> Result<(), Self::DriverError> { Ok(()) }
//!     fn set_cursor(&mut self, _column: u8, _row: u8) -> Result<(), Self::DriverError> { Ok(()) }
//!     fn puts(&mut self, _text: &str) -> Result<(), Self::DriverError> { Ok(()) }
//!     fn putc(&mut self, _character: char) -> Result<(), Self::DriverError> { Ok(()) }
//!     fn puthex_fg_bg(
//!         &mut self,
//!         _value: u8,
//!         _foreground: ConsoleColor,
//!         _background: ConsoleColor,
//!     ) -> Result<(), Self::DriverError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut monitor = GridMonitor::new(NullConsole, &GridMonitorConfig::default());
//! monitor.start().unwrap();
//! monitor.set_data(0, &[5, 0, 250]).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

#[macro_use]
mod fmt;

/// Positional console the grid monitor draws on.
pub mod console;
pub mod consts;
/// Monitor for consoles that keeps the whole universe on screen.
pub mod grid;
pub mod monitor;
/// Monitor that prints one timestamped line per frame.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod scrolling;
pub mod window;
