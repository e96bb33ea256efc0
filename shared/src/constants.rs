// Wheel geometry. 0° points right and angles grow clockwise in screen space,
// so the pointer drawn at the top of the wheel sits at 270°.
pub const FULL_TURN_DEGREES: f64 = 360.0;
pub const POINTER_ANGLE_DEGREES: f64 = 270.0;
pub const BASE_ROTATIONS: u32 = 5; // Full turns added to every spin for effect

// Animation timing handed to the presentation layer
pub const SPIN_START_DELAY_MS: u64 = 50;
pub const SPIN_DURATION_MS: u64 = 3000;

pub const DEFAULT_ENTRIES: [&str; 6] = ["Alessandra", "Andrea", "Ilio", "Dani", "Ludo", "Michela"];

pub const BLANK_LABEL_ERROR: &str = "blank_label";
