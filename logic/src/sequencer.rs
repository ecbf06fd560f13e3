//! Modulo sequencer and the LED patterns it drives.

/// A counter that advances by one and wraps at a fixed modulus.
pub struct Sequencer {
    index: u8,
    modulus: u8,
}

impl Sequencer {
    /// Creates a sequencer at index 0 wrapping at `modulus`.
    pub fn new(modulus: u8) -> Self {
        assert!(modulus > 0, "modulus must be at least 1");
        Self { index: 0, modulus }
    }

    /// Advances the index by one (mod the modulus) and returns it.
    pub fn advance(&mut self) -> u8 {
        self.index = (self.index + 1) % self.modulus;
        self.index
    }

    /// The current index, always in `[0, modulus)`.
    pub fn index(&self) -> u8 {
        self.index
    }
}

/// The on/off state of the three LEDs, bit `i` = LED `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern(u8);

impl LedPattern {
    /// All LEDs off.
    pub const OFF: LedPattern = LedPattern(0);

    /// A pattern showing the low 3 bits of `value`.
    pub fn binary(value: u8) -> Self {
        LedPattern(value & 0b111)
    }

    /// Whether LED `led` (0-based) is lit.
    pub fn is_lit(self, led: u8) -> bool {
        self.0 & (1 << led) != 0
    }

    /// The raw 3-bit pattern.
    pub fn bits(self) -> u8 {
        self.0
    }
}

/// Binary-counter lookup: the output is the index itself, 3 bits wide.
pub fn binary_pattern(index: u8) -> LedPattern {
    LedPattern::binary(index)
}

/// Chase lookup for the 5-step sequencer.
///
/// Steps 1 and 3 both light LED2 and step 4 repeats step 0, so only three
/// distinct visual states appear over the 5 indices. That aliasing is in
/// the shipped lookup table and is kept as-is until product intent says
/// otherwise.
pub fn chase_pattern(index: u8) -> LedPattern {
    const CHASE: [LedPattern; 5] = [
        LedPattern(0b001), // LED1
        LedPattern(0b010), // LED2
        LedPattern(0b100), // LED3
        LedPattern(0b010), // LED2 again
        LedPattern(0b001), // LED1 again
    ];
    CHASE[index as usize % CHASE.len()]
}
