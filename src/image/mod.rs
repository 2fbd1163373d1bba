//! Image loading, resizing, and saving utilities.

mod load;
mod resize;
mod save;

pub use load::load_color_image;
pub use resize::resize_for_display;
pub use save::save_binary_image;

/// Default maximum preview width in pixels.
pub const MAX_DISPLAY_WIDTH: u32 = 800;

/// Default maximum preview height in pixels.
pub const MAX_DISPLAY_HEIGHT: u32 = 600;
