//! Cart badge label.

/// Largest count the badge prints before switching to "N+".
pub const BADGE_CAP: u32 = 99;

/// Label for the cart badge, or `None` when the badge should not render.
///
/// Counts above `cap` collapse to `"{cap}+"`; the underlying count is untouched.
pub fn badge_label(count: u32, cap: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > cap => Some(format!("{}+", cap)),
        n => Some(n.to_string()),
    }
}
