//! Member color assignment.

/// Colors handed out to team members, in assignment order.
pub const MEMBER_COLORS: [&str; 8] = [
    "#3B82F6", // blue
    "#10B981", // emerald
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
    "#06B6D4", // cyan
    "#84CC16", // lime
];

/// Pick the color for a new member given the colors already in use.
///
/// The first palette color not in use wins. Once every color is taken,
/// colors repeat cyclically by the number of existing members.
pub fn next_color<S: AsRef<str>>(existing: &[S]) -> &'static str {
    MEMBER_COLORS
        .iter()
        .find(|color| !existing.iter().any(|e| e.as_ref() == **color))
        .copied()
        .unwrap_or(MEMBER_COLORS[existing.len() % MEMBER_COLORS.len()])
}

/// Split a `#RRGGBB` token into its channels.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
