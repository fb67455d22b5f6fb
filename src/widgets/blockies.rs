//! Blockie identicon generation.
//!
//! Deterministic 8x8 pixel-art avatars derived from an address, matching the
//! canonical blockies algorithm: a 4-word xorshift PRNG seeded from the
//! lower-cased address drives the palette and the horizontally mirrored grid,
//! so the same address always yields the same image on every client.

// ============================================================================
// Constants
// ============================================================================

/// Grid side length.
pub const BLOCKIE_SIZE: usize = 8;

// ============================================================================
// Color
// ============================================================================

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Converts HSL to RGB.
///
/// Hue wraps; saturation and lightness are percentages clamped to 100. The
/// PRNG below can produce values slightly above 1.0, so the clamp matters.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = (s.min(100.0) / 100.0).max(0.0);
    let l = (l.min(100.0) / 100.0).max(0.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: ((r1 + m) * 255.0).round() as u8,
        g: ((g1 + m) * 255.0).round() as u8,
        b: ((b1 + m) * 255.0).round() as u8,
    }
}

// ============================================================================
// PRNG
// ============================================================================

/// The blockies xorshift PRNG over four 32-bit words.
///
/// Arithmetic is wrapping and shifts are arithmetic to reproduce the
/// reference behavior exactly; `next` can return values up to 2.0 because
/// the final word is reinterpreted as unsigned.
struct XorShift {
    seed: [i32; 4],
}

impl XorShift {
    fn from_str(input: &str) -> Self {
        let mut seed = [0i32; 4];
        for (i, c) in input.chars().enumerate() {
            seed[i % 4] = (seed[i % 4].wrapping_shl(5))
                .wrapping_sub(seed[i % 4])
                .wrapping_add(c as i32);
        }
        Self { seed }
    }

    fn next(&mut self) -> f64 {
        let t = self.seed[0] ^ (self.seed[0] << 11);
        self.seed[0] = self.seed[1];
        self.seed[1] = self.seed[2];
        self.seed[2] = self.seed[3];
        self.seed[3] = self.seed[3] ^ (self.seed[3] >> 19) ^ t ^ (t >> 8);
        f64::from(self.seed[3] as u32) / 2_147_483_648.0
    }

    fn color(&mut self) -> Rgb {
        let h = (self.next() * 360.0).floor();
        let s = self.next() * 60.0 + 40.0;
        let l = (self.next() + self.next() + self.next() + self.next()) * 25.0;
        hsl_to_rgb(h, s, l)
    }
}

// ============================================================================
// Blockie
// ============================================================================

/// A generated blockie: three colors and a mirrored 8x8 grid.
///
/// Grid values index into `colors`: 0 is the background, 1 the main color,
/// 2 the spot color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockie {
    pub colors: [Rgb; 3],
    pub grid: [[u8; BLOCKIE_SIZE]; BLOCKIE_SIZE],
}

impl Blockie {
    /// Generates the blockie for an address.
    ///
    /// Input is lower-cased first, so every casing of an address produces
    /// the same image.
    #[must_use]
    pub fn generate(address: &str) -> Self {
        let seed_input = address.to_ascii_lowercase();
        let mut rng = XorShift::from_str(&seed_input);

        // Color derivation order is fixed: main, background, spot.
        let color = rng.color();
        let bgcolor = rng.color();
        let spotcolor = rng.color();

        let mut grid = [[0u8; BLOCKIE_SIZE]; BLOCKIE_SIZE];
        let data_width = BLOCKIE_SIZE / 2;
        for row in &mut grid {
            for x in 0..data_width {
                // 2.3 biases toward the main color; the PRNG range is [0, 2),
                // so anything past the spot color collapses onto it.
                row[x] = ((rng.next() * 2.3) as u8).min(2);
            }
            for x in data_width..BLOCKIE_SIZE {
                row[x] = row[BLOCKIE_SIZE - 1 - x];
            }
        }

        Self {
            colors: [bgcolor, color, spotcolor],
            grid,
        }
    }

    /// Color of the cell at `(x, y)`.
    #[must_use]
    pub fn cell_color(&self, x: usize, y: usize) -> Rgb {
        self.colors[usize::from(self.grid[y][x])]
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
    fn test_generation_is_deterministic() {
        assert_eq!(Blockie::generate(ADDR), Blockie::generate(ADDR));
    }

    #[test]
    fn test_casing_does_not_change_the_image() {
        let lower = Blockie::generate(&ADDR.to_ascii_lowercase());
        assert_eq!(Blockie::generate(ADDR), lower);
    }

    #[test]
    fn test_different_addresses_differ() {
        let a = Blockie::generate(ADDR);
        let b = Blockie::generate("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_grid_is_mirrored() {
        let blockie = Blockie::generate(ADDR);
        for y in 0..BLOCKIE_SIZE {
            for x in 0..BLOCKIE_SIZE {
                assert_eq!(
                    blockie.grid[y][x],
                    blockie.grid[y][BLOCKIE_SIZE - 1 - x],
                    "row {y} not mirrored at column {x}"
                );
            }
        }
    }

    #[test]
    fn test_grid_values_index_the_palette() {
        let blockie = Blockie::generate(ADDR);
        for row in &blockie.grid {
            for &value in row {
                assert!(value <= 2);
            }
        }
    }

    #[test]
    fn test_hsl_conversion_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(
            hsl_to_rgb(0.0, 0.0, 100.0),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_hsl_clamps_out_of_range_saturation() {
        // The PRNG can emit saturation above 100; conversion must not panic
        // or wrap.
        let color = hsl_to_rgb(400.0, 160.0, 120.0);
        assert_eq!(
            color,
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }
}
