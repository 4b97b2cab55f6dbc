use log::Level;

pub const HERO_INTERVAL_MS: u32 = 5_000;

// Pixels below the viewport top at which a section counts as entered.
pub const NAV_LOOKAHEAD_PX: f64 = 150.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const ORDER_REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_STAGGER_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", index as u32 * REVEAL_STAGGER_MS)
}
