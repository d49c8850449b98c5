use crate::consts::{DMX_DEFAULT_FOOTPRINT, DMX_DEFAULT_START_ADDRESS, DMX_MAX_ADDRESS};

/// The range of slots a monitor displays, given by a 1-based start address and a footprint.
///
/// `1 <= start_address` and `start_address + footprint - 1 <= 512` hold after every successful
/// [ChannelWindow::set_start_address]. The footprint itself is always kept in `1..=512`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelWindow {
    start_address: u16,
    footprint: u16,
}

impl Default for ChannelWindow {
    fn default() -> Self {
        Self {
            start_address: DMX_DEFAULT_START_ADDRESS,
            footprint: DMX_DEFAULT_FOOTPRINT,
        }
    }
}

impl ChannelWindow {
    /// A window covering the whole universe. Its start address can't be moved.
    pub const FULL_UNIVERSE: Self = Self {
        start_address: 1,
        footprint: DMX_MAX_ADDRESS,
    };

    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    pub fn footprint(&self) -> u16 {
        self.footprint
    }

    /// Sets the amount of displayed slots, clamped to `1..=512`.
    ///
    /// The start address is not re-validated here. The next call to
    /// [ChannelWindow::set_start_address] checks against the new footprint.
    pub fn set_footprint(&mut self, footprint: u16) {
        self.footprint = footprint.clamp(1, DMX_MAX_ADDRESS);
    }

    /// Returns true if `start_address` can be used with the current footprint.
    pub fn accepts_start_address(&self, start_address: u16) -> bool {
        start_address >= 1 && start_address as u32 + self.footprint as u32 - 1 <= DMX_MAX_ADDRESS as u32
    }

    /// Moves the window. Returns false and leaves the window untouched if the window would
    /// leave the universe.
    pub fn set_start_address(&mut self, start_address: u16) -> bool {
        if !self.accepts_start_address(start_address) {
            return false;
        }

        self.start_address = start_address;
        true
    }

    /// Zero-based buffer index of the first displayed slot.
    pub fn first_index(&self) -> usize {
        self.start_address as usize - 1
    }

    /// Zero-based buffer indices covered by the window.
    pub fn indices(&self) -> core::ops::Range<usize> {
        self.first_index()..self.first_index() + self.footprint as usize
    }

    /// Amount of slots in the window that a frame of `length` bytes doesn't reach.
    pub fn missing_slots(&self, length: usize) -> usize {
        self.indices().end.saturating_sub(length.max(self.first_index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_window() {
        let window = ChannelWindow::default();
        assert_eq!(window.start_address(), 1);
        assert_eq!(window.footprint(), 32);
        assert_eq!(window.indices(), 0..32);
    }

    #[test]
    fn test_start_address_bounds() {
        let mut window = ChannelWindow::default();

        assert!(window.set_start_address(481));
        assert!(!window.set_start_address(482));
        assert_eq!(window.start_address(), 481);

        assert!(!window.set_start_address(0));
        assert_eq!(window.start_address(), 481);
    }

    #[test]
    fn test_footprint_is_clamped() {
        let mut window = ChannelWindow::default();

        window.set_footprint(0);
        assert_eq!(window.footprint(), 1);

        window.set_footprint(600);
        assert_eq!(window.footprint(), 512);
    }

    #[test]
    fn test_footprint_change_is_checked_on_next_move() {
        let mut window = ChannelWindow::default();
        assert!(window.set_start_address(400));

        // a larger footprint is accepted as is, even though it now overhangs the universe
        window.set_footprint(200);
        assert_eq!(window.start_address(), 400);

        assert!(!window.set_start_address(400));
        assert!(window.set_start_address(313));
    }

    #[test]
    fn test_full_universe_only_starts_at_one() {
        let mut window = ChannelWindow::FULL_UNIVERSE;
        assert!(window.set_start_address(1));
        assert!(!window.set_start_address(2));
    }

    #[test]
    fn test_missing_slots() {
        let mut window = ChannelWindow::default();
        window.set_footprint(4);
        assert!(window.set_start_address(2));

        assert_eq!(window.missing_slots(3), 2);
        assert_eq!(window.missing_slots(5), 0);
        assert_eq!(window.missing_slots(512), 0);
        // a frame that ends before the window starts misses the whole window
        assert_eq!(window.missing_slots(0), 4);
        assert_eq!(window.missing_slots(1), 4);
    }

    proptest! {
        #[test]
        fn start_address_accepted_iff_window_fits(footprint in 1u16..=512, address in 0u16..=600) {
            let mut window = ChannelWindow::default();
            window.set_footprint(footprint);
            let before = window.start_address();

            let fits = address >= 1 && address as u32 + footprint as u32 - 1 <= 512;
            prop_assert_eq!(window.set_start_address(address), fits);
            prop_assert_eq!(window.start_address(), if fits { address } else { before });
        }
    }
}
