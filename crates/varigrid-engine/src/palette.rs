#![deny(unsafe_code)]

/// Fixed display palette, indexed by group creation order.
///
/// Colors repeat cyclically past the palette length; group ids stay unique,
/// colors do not have to.
pub const PALETTE: [&str; 12] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac", "#86bcb6", "#d37295",
];

pub fn color_for(order: usize) -> &'static str {
    PALETTE[order % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_past_palette_length() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(PALETTE.len()), PALETTE[0]);
        assert_eq!(color_for(PALETTE.len() + 3), PALETTE[3]);
    }
}
