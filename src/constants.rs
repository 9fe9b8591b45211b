// Web-side tuning constants: card raster geometry, picking, and the fixed
// perspective used when no AR projection is available.

// Card face raster (logical pixels): a title band above an image band.
pub const CARD_WIDTH_PX: u32 = 200;
pub const TITLE_BAND_PX: u32 = 50;
pub const IMAGE_BAND_PX: u32 = 150;
pub const CARD_BACKGROUND: &str = "#EEEEFF";
pub const TITLE_FONT_MAX_PX: u32 = 30;

// World-space size of the square card quad.
pub const CARD_SIZE_WORLD: f32 = 0.08;

// Ray-sphere radius for picking cards.
pub const PICK_SPHERE_RADIUS: f32 = 0.05;

// Camera projection (60° vertical FOV).
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_3;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 100.0;

// Wiki project shown when the `project` query parameter is absent.
pub const DEFAULT_PROJECT: &str = "help-jp";
// Base URL for opening a page in the browser on a press gesture.
pub const SCRAPBOX_BASE: &str = "https://scrapbox.io";
