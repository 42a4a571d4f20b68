//! Styling-only primitives.
//!
//! Each primitive appends the caller's `class` to its own base Tailwind
//! classes and renders its children unchanged.

mod button;
mod card;
mod input;

pub use button::*;
pub use card::*;
pub use input::*;

/// Base classes followed by the caller's extra classes.
pub fn merge_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}
