use log::Level;

/// WhatsApp business number bookings are sent to, digits only.
pub const WHATSAPP_NUMBER: &str = "919820012345";
pub const CONTACT_EMAIL: &str = "info@athlonsports.in";

/// Header height the anchor scroll leaves clear.
pub const NAV_OFFSET_PX: f64 = 80.0;

pub const LOADING_HOLD_MS: u32 = 1000;
pub const LOADING_FADE_MS: u32 = 500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
