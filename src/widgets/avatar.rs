//! Account and token avatar widget.
//!
//! Picks the right avatar for an address and renders it into the terminal.
//! Images win when a logo glyph is known, generated identicons otherwise:
//! addresses with a registry logo always get a jazzicon so the two stay
//! visually paired, and everything else follows the user's configured style.
//! Pixel art is drawn with half-block characters, two pixels per cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::blockies::{BLOCKIE_SIZE, Blockie, Rgb};
use super::jazzicon::Jazzicon;
use crate::domain::TokenRegistry;

// ============================================================================
// Avatar Selection
// ============================================================================

/// The avatar chosen for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarKind {
    /// A known logo glyph.
    Image(String),
    Jazzicon,
    Blockie,
    /// No address to derive anything from.
    Placeholder,
}

/// Selects the avatar for an address.
///
/// An explicit image always wins. Addresses carrying a registry logo are
/// forced to jazzicons so the generated fallback never disagrees with the
/// logo pairing; remaining addresses follow `use_blockies`.
#[must_use]
pub fn select_avatar(
    image: Option<&str>,
    address: Option<&str>,
    use_blockies: bool,
    registry: &TokenRegistry,
) -> AvatarKind {
    if let Some(image) = image {
        return AvatarKind::Image(image.to_string());
    }
    let Some(address) = address else {
        return AvatarKind::Placeholder;
    };

    if registry.has_logo(address) {
        AvatarKind::Jazzicon
    } else if use_blockies {
        AvatarKind::Blockie
    } else {
        AvatarKind::Jazzicon
    }
}

// ============================================================================
// Avatar Widget
// ============================================================================

/// Renders an avatar into a rectangular area.
///
/// # Usage
///
/// ```ignore
/// let avatar = Avatar::new()
///     .with_address(Some("0x6B17...1d0F"))
///     .use_blockies(true);
/// frame.render_widget(avatar, area);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    image: Option<String>,
    address: Option<String>,
    use_blockies: bool,
}

impl Avatar {
    /// Create an empty avatar; renders the placeholder until an address or
    /// image is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logo glyph, overriding identicon generation.
    #[must_use]
    pub fn with_image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }

    /// Set the address the identicon is derived from.
    #[must_use]
    pub fn with_address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    /// Prefer blockies over jazzicons for plain addresses.
    #[must_use]
    pub const fn use_blockies(mut self, use_blockies: bool) -> Self {
        self.use_blockies = use_blockies;
        self
    }

    /// The avatar kind this widget will render.
    #[must_use]
    pub fn kind(&self) -> AvatarKind {
        select_avatar(
            self.image.as_deref(),
            self.address.as_deref(),
            self.use_blockies,
            TokenRegistry::embedded(),
        )
    }
}

impl Widget for Avatar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.kind() {
            AvatarKind::Image(glyph) => render_glyph(&glyph, area, buf),
            AvatarKind::Placeholder => render_glyph("◇", area, buf),
            AvatarKind::Blockie => {
                let address = self.address.as_deref().unwrap_or_default();
                render_blockie(&Blockie::generate(address), area, buf);
            }
            AvatarKind::Jazzicon => {
                let address = self.address.as_deref().unwrap_or_default();
                render_jazzicon(&Jazzicon::generate(address), area, buf);
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Centers a single glyph in the area.
fn render_glyph(glyph: &str, area: Rect, buf: &mut Buffer) {
    let x = area.x + area.width / 2;
    let y = area.y + area.height / 2;
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(glyph);
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Paints a pixel pair: upper pixel as foreground of '▀', lower as
/// background.
fn set_pixel_pair(buf: &mut Buffer, x: u16, y: u16, upper: Rgb, lower: Rgb) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol("▀")
            .set_style(Style::default().fg(to_color(upper)).bg(to_color(lower)));
    }
}

/// Renders the 8x8 blockie as 8 columns by 4 half-block rows.
fn render_blockie(blockie: &Blockie, area: Rect, buf: &mut Buffer) {
    let cols = (area.width as usize).min(BLOCKIE_SIZE);
    let rows = (area.height as usize).min(BLOCKIE_SIZE / 2);

    for row in 0..rows {
        for col in 0..cols {
            let upper = blockie.cell_color(col, row * 2);
            let lower = blockie.cell_color(col, row * 2 + 1);
            set_pixel_pair(
                buf,
                area.x + col as u16,
                area.y + row as u16,
                upper,
                lower,
            );
        }
    }
}

/// Renders the jazzicon at the area's size, doubled vertically for the
/// half-block resolution.
fn render_jazzicon(icon: &Jazzicon, area: Rect, buf: &mut Buffer) {
    let width = area.width as usize;
    let height = area.height as usize * 2;

    for row in 0..area.height as usize {
        for col in 0..width {
            let upper = icon.cell_color(col, row * 2, width, height);
            let lower = icon.cell_color(col, row * 2 + 1, width, height);
            set_pixel_pair(
                buf,
                area.x + col as u16,
                area.y + row as u16,
                upper,
                lower,
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
