//! Jazzicon-style identicon generation.
//!
//! A terminal adaptation of the jazzicon avatar: a seed taken from the first
//! four bytes of the address selects a background and three diagonal color
//! shards from a fixed palette. The exact geometry differs from the SVG
//! original, but the derivation is deterministic per address and the palette
//! is the canonical one.

use super::blockies::Rgb;

// ============================================================================
// Palette
// ============================================================================

/// The canonical jazzicon palette.
const PALETTE: [Rgb; 14] = [
    Rgb { r: 0x01, g: 0x88, b: 0x8c }, // teal
    Rgb { r: 0xfc, g: 0x75, b: 0x00 }, // bright orange
    Rgb { r: 0x03, g: 0x4f, b: 0x5d }, // dark teal
    Rgb { r: 0xf7, g: 0x3f, b: 0x01 }, // orangered
    Rgb { r: 0xfc, g: 0x19, b: 0x60 }, // magenta
    Rgb { r: 0xc7, g: 0x14, b: 0x4c }, // raspberry
    Rgb { r: 0xf3, g: 0xc1, b: 0x00 }, // goldenrod
    Rgb { r: 0x15, g: 0x98, b: 0xf2 }, // lightning blue
    Rgb { r: 0x24, g: 0x65, b: 0xe1 }, // sail blue
    Rgb { r: 0xf1, g: 0x9e, b: 0x02 }, // gold
    Rgb { r: 0xff, g: 0xd1, b: 0x2b }, // sunflower
    Rgb { r: 0x52, g: 0x2a, b: 0x91 }, // royal purple
    Rgb { r: 0x00, g: 0x53, b: 0x97 }, // deep blue
    Rgb { r: 0xe2, g: 0x51, b: 0x87 }, // pink
];

/// Shards layered over the background.
const SHARD_COUNT: usize = 3;

// ============================================================================
// Seed Derivation
// ============================================================================

/// Derives the jazzicon seed from an address.
///
/// The seed is the first four bytes of the address, read as hex. Inputs that
/// are not hex addresses fall back to a character hash so the renderer still
/// produces something stable.
#[must_use]
pub fn address_seed(address: &str) -> u32 {
    let hex = address.trim_start_matches("0x").to_ascii_lowercase();
    if hex.len() >= 8
        && let Ok(seed) = u32::from_str_radix(&hex[..8], 16)
    {
        return seed;
    }

    let mut hash = 0u32;
    for c in address.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as u32);
    }
    hash
}

// ============================================================================
// PRNG
// ============================================================================

/// 32-bit xorshift generator.
struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    fn new(seed: u32) -> Self {
        // Xorshift has a zero fixed point.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    fn pick(&mut self, bound: usize) -> usize {
        (self.next() as usize) % bound
    }
}

// ============================================================================
// Jazzicon
// ============================================================================

/// A color shard cutting diagonally across the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shard {
    color: Rgb,
    /// Offset of the diagonal band, in grid-normalized units.
    offset: u8,
    /// Band thickness.
    width: u8,
}

/// A generated jazzicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jazzicon {
    background: Rgb,
    shards: [Shard; SHARD_COUNT],
}

impl Jazzicon {
    /// Generates the jazzicon for an address.
    #[must_use]
    pub fn generate(address: &str) -> Self {
        let mut rng = XorShift32::new(address_seed(address));

        // Remove each picked color so the background and shards stay
        // distinct, as the reference implementation does.
        let mut remaining: Vec<Rgb> = PALETTE.to_vec();
        let background = remaining.remove(rng.pick(remaining.len()));

        let shards = std::array::from_fn(|_| {
            let color = remaining.remove(rng.pick(remaining.len()));
            Shard {
                color,
                offset: (rng.next() % 16) as u8,
                width: (rng.next() % 4 + 2) as u8,
            }
        });

        Self { background, shards }
    }

    /// Color of the cell at `(x, y)` in a `width` x `height` render.
    ///
    /// Later shards paint over earlier ones, mirroring the SVG stacking
    /// order.
    #[must_use]
    pub fn cell_color(&self, x: usize, y: usize, width: usize, height: usize) -> Rgb {
        if width == 0 || height == 0 {
            return self.background;
        }
        // Normalize to a 16-unit diagonal axis.
        let diag = (x * 16 / width + y * 16 / height) / 2;

        let mut color = self.background;
        for shard in &self.shards {
            let start = usize::from(shard.offset) % 16;
            let end = start + usize::from(shard.width);
            if diag >= start && diag < end {
                color = shard.color;
            }
        }
        color
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_seed_reads_first_four_bytes() {
        assert_eq!(address_seed(ADDR), 0x5aae_b605);
        // Casing does not matter.
        assert_eq!(address_seed(&ADDR.to_ascii_lowercase()), 0x5aae_b605);
    }

    #[test]
    fn test_seed_fallback_for_non_hex_input() {
        // Stable, and distinct from the zero seed.
        assert_eq!(address_seed("hello"), address_seed("hello"));
        assert_ne!(address_seed("hello"), address_seed("world"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(Jazzicon::generate(ADDR), Jazzicon::generate(ADDR));
    }

    #[test]
    fn test_different_addresses_differ() {
        let a = Jazzicon::generate(ADDR);
        let b = Jazzicon::generate("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert_ne!(a, b);
    }

    #[test]
    fn test_colors_are_distinct() {
        let icon = Jazzicon::generate(ADDR);
        let mut colors = vec![icon.background];
        for shard in &icon.shards {
            assert!(!colors.contains(&shard.color));
            colors.push(shard.color);
        }
    }

    #[test]
    fn test_cell_color_total_over_grid() {
        let icon = Jazzicon::generate(ADDR);
        // Every cell resolves to a palette color.
        for y in 0..8 {
            for x in 0..8 {
                let color = icon.cell_color(x, y, 8, 8);
                assert!(PALETTE.contains(&color));
            }
        }
    }

    #[test]
    fn test_zero_sized_render_is_background() {
        let icon = Jazzicon::generate(ADDR);
        let bg = icon.cell_color(0, 0, 0, 0);
        assert_eq!(bg, icon.background);
    }
}
