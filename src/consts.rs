// SI units throughout
pub const G: f64 = 6.67428e-11;
pub const AU: f64 = 1.496e11;
pub const DAY: f64 = 3600.0 * 24.0;

pub const DEFAULT_TRAIL_LEN: usize = 100;
pub const DEFAULT_FPS: u32 = 60;

// Pixels per astronomical unit at the default zoom
pub const DEFAULT_SCALE: f64 = 100.0;
