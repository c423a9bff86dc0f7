use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll geometry
pub const SCROLL_LOOKAHEAD: f64 = 150.0;
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLLED_THRESHOLD: f64 = 20.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Decorative follower
pub const FOLLOWER_TRANSITION_MS: f64 = 800.0;
pub const IDLE_GRACE_MS: u32 = 500;
pub const IDLE_BOB_AMPLITUDE: f64 = 10.0;
pub const IDLE_BOB_HALF_PERIOD_MS: f64 = 2000.0;

// Spotlight
pub const SPOTLIGHT_TRANSITION_MS: f64 = 800.0;
pub const SPOTLIGHT_FADE_MS: u32 = 300;
pub const SPOTLIGHT_SIZE: f64 = 280.0;
pub const SPOTLIGHT_SIZE_MOBILE: f64 = 160.0;

// Splash overlay
pub const SPLASH_MS: u32 = 1500;
pub const SPLASH_FADE_MS: u32 = 600;

pub const BRAND_NAME: &str = "Spark Soul";
