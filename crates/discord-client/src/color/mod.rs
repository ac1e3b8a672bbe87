//! Display colors: hex helpers, default palette and avatar-derived color.

mod dominant;
mod palette;
#[cfg(test)]
mod tests;

pub use dominant::{FETCH_FAILED_COLOR, dominant_color, pad_to_alignment};
pub use palette::{MedianCut, PaletteEntry, PaletteQuantizer};

use crate::api::models::UserProfile;

/// Colors of the six stock avatars, used when a user has no custom avatar.
pub const DEFAULT_AVATAR_COLORS: [&str; 6] = [
    "#5865f2", "#757e8a", "#3ba55c", "#faa61a", "#ed4245", "#eb459f",
];

/// `0xRRGGBB` -> `#rrggbb`. Bits above 24 are dropped.
pub fn num_to_hex(num: u32) -> String {
    format!("#{:06x}", num & 0x00ff_ffff)
}

/// `#rrggbb` or `rrggbb` -> `0xRRGGBB`.
pub fn hex_to_num(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Color for a user without a custom avatar: `discriminator % 6`.
///
/// Unrelated to the default avatar index, which uses a different rule.
pub fn default_display_color(profile: &UserProfile) -> &'static str {
    let idx = profile.discriminator_number() % DEFAULT_AVATAR_COLORS.len() as u64;
    DEFAULT_AVATAR_COLORS[idx as usize]
}
