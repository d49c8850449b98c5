/// What happened to the frame handed to [DmxMonitor::set_data].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameStatus {
    /// The frame was rendered as received.
    Complete,
    /// The frame was longer than one universe. Only the first `kept` of `received` slots were
    /// stored and rendered.
    Truncated { received: usize, kept: usize },
}

/// Common interface of the monitors. Exactly one implementation is used per target:
/// [crate::scrolling::ScrollingMonitor] on hosts with a standard output,
/// [crate::grid::GridMonitor] on targets with a positional console.
///
/// Callers are expected to call [DmxMonitor::start] before delivering frames. This isn't
/// enforced: both monitors render every frame they receive, started or not.
pub trait DmxMonitor {
    /// Error raised by the output the monitor renders to.
    type Error;

    /// Amount of displayed slots.
    fn dmx_footprint(&self) -> u16;

    /// First displayed slot (1-based).
    fn dmx_start_address(&self) -> u16;

    /// Moves the displayed window. Returns false and keeps the previous start address if the
    /// window wouldn't fit into the universe.
    fn set_dmx_start_address(&mut self, start_address: u16) -> bool;

    fn is_started(&self) -> bool;

    /// Starts displaying. Does nothing if the monitor is already started.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stops displaying. Does nothing if the monitor is already stopped.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Renders a received frame. `port` names the input the frame arrived on and doesn't
    /// influence the output. The frame holds slot values only, without a start code.
    fn set_data(&mut self, port: u8, data: &[u8]) -> Result<FrameStatus, Self::Error>;

    /// Clears the display region. Only monitors that own a fixed region of a console have
    /// something to clear; the default does nothing.
    fn cls(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
