pub const DEFAULT_WIDTH: i32 = 960;            // Default window width
pub const DEFAULT_HEIGHT: i32 = 540;           // Default window height
pub const DEFAULT_FPS: u32 = 60;               // Frames per second

pub const AUTO_ADVANCE_MS: u64 = 5000;         // Time between automatic advances (milliseconds)
pub const FADE_DURATION: f32 = 0.7;            // Slide opacity transition (seconds)

pub const INACTIVE_SLIDE_OPACITY: f32 = 0.0;
pub const INACTIVE_INDICATOR_OPACITY: f32 = 0.5;

pub const ARROW_SIZE: f32 = 48.0;              // Side of the square next/previous buttons
pub const ARROW_MARGIN: f32 = 16.0;
pub const DOT_RADIUS: f32 = 7.0;               // Indicator dot radius
pub const DOT_SPACING: f32 = 28.0;             // Distance between dot centres
pub const DOT_BOTTOM_MARGIN: f32 = 28.0;
pub const MENU_BUTTON_SIZE: f32 = 40.0;
pub const MENU_WIDTH: f32 = 280.0;
pub const MENU_ENTRY_HEIGHT: f32 = 32.0;
pub const MENU_FONT_SIZE: i32 = 20;
