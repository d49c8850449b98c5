use modular_bitfield::bitfield;
use modular_bitfield::prelude::{B5, B6};

/// A console color as RGB565 word, the format of the framebuffer console.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleColor(pub u16);

#[bitfield(bits = 16)]
struct Rgb565 {
    blue: B5,
    green: B6,
    red: B5,
}

impl ConsoleColor {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Packs 8 bit channels into RGB565, dropping the low bits.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let packed = Rgb565::new()
            .with_red(red >> 3)
            .with_green(green >> 2)
            .with_blue(blue >> 3);

        Self(u16::from_le_bytes(packed.into_bytes()))
    }

    /// A gray with the given brightness.
    pub fn gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }
}

/// Positional character console of the target. Columns and rows are zero-based character
/// cells.
pub trait Console {
    /// The driver specific error.
    type DriverError;

    /// Blanks a whole row.
    fn clear_line(&mut self, row: u8) -> Result<(), Self::DriverError>;

    /// Moves the cursor. The next output starts at this cell.
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::DriverError>;

    /// Writes a string at the cursor and advances it.
    fn puts(&mut self, text: &str) -> Result<(), Self::DriverError>;

    /// Writes a single character at the cursor and advances it.
    fn putc(&mut self, character: char) -> Result<(), Self::DriverError>;

    /// Writes `value` as two hex digits using the given colors and advances the cursor by two
    /// cells.
    fn puthex_fg_bg(
        &mut self,
        value: u8,
        foreground: ConsoleColor,
        background: ConsoleColor,
    ) -> Result<(), Self::DriverError>;
}
