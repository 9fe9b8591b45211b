// Engine tuning constants shared by the layout/animation core and the web
// frontend. All values are fixed and part of the behavioral contract.

/// Ring radius: distance from the viewer origin to every card.
pub const DISTANCE: f32 = 0.6;

/// Angular size of the preview band reserved for linked cards (45°).
pub const PREVIEW_RAD: f32 = std::f32::consts::FRAC_PI_4;

/// Frames a link-split flight takes from trigger to rest.
pub const FLIGHT_FRAMES: u32 = 45;

/// Frames a shake-triggered rotation flourish lasts.
pub const ROTATION_FRAMES: u32 = 100;

/// Per-frame rotation while more than `ROTATION_FULL_KNEE` of the countdown remains.
pub const ROTATION_RATE_FULL: f32 = 0.05;
/// Per-frame rotation while more than `ROTATION_MID_KNEE` remains.
pub const ROTATION_RATE_MID: f32 = 0.03;
pub const ROTATION_FULL_KNEE: f32 = 0.8;
pub const ROTATION_MID_KNEE: f32 = 0.5;

/// Mean per-sample motion energy that counts as a shake.
pub const MINIMUM_SHAKEN_ENERGY: f32 = 0.005;
/// Rolling window length for shake detection, in frames (render cadence, not
/// wall clock).
pub const MINIMUM_SHAKEN_FRAMES: usize = 15;

/// Instantaneous ring rotation applied per pan-left/right gesture.
pub const PAN_ROTATE_RAD: f32 = 0.04;
/// Instantaneous height shift applied per pan-up/down gesture.
pub const PAN_TRANSLATE_Y: f32 = 0.008;
