//! Public flag badges.

use crate::api::models::UserProfile;
use crate::assets::is_animated;

/// Label appended by the Nitro guess.
pub const NITRO_BADGE: &str = "Nitro";

/// Bit position -> badge name, ascending by bit. New flags are appended.
pub const FLAG_DEFINITIONS: &[(u32, &str)] = &[
    (0, "Discord Staff"),
    (1, "Partnered Server Owner"),
    (2, "HypeSquad Events"),
    (3, "Bug Hunter Level 1"),
    (6, "HypeSquad Bravery"),
    (7, "HypeSquad Brilliance"),
    (8, "HypeSquad Balance"),
    (9, "Early Supporter"),
    (10, "Team User"),
    (14, "Bug Hunter Level 2"),
    (16, "Verified Bot"),
    (17, "Early Verified Bot Developer"),
    (18, "Moderator Programs Alumni"),
    (19, "HTTP Interactions Bot"),
    (22, "Active Developer"),
];

/// Badge names for every known bit set in `bits`, in bit order.
pub fn flag_names(bits: u64) -> Vec<&'static str> {
    FLAG_DEFINITIONS
        .iter()
        .filter(|(bit, _)| bits & (1u64 << bit) != 0)
        .map(|&(_, name)| name)
        .collect()
}

/// Badges for a profile.
///
/// Discord does not expose subscription status, so with `guess_nitro`
/// a "Nitro" badge is added when the avatar is animated or a decoration
/// is equipped. This is a best-effort guess and will miss subscribers
/// who use neither.
pub fn decode_flags(profile: &UserProfile, guess_nitro: bool) -> Vec<&'static str> {
    let mut badges = flag_names(profile.public_flags);

    if guess_nitro && looks_like_nitro(profile) {
        badges.push(NITRO_BADGE);
    }

    badges
}

fn looks_like_nitro(profile: &UserProfile) -> bool {
    profile.avatar_hash().is_some_and(is_animated) || profile.decoration_hash().is_some()
}
