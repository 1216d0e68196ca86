pub mod io;
pub mod rgb;

pub use self::io::{load_rgb_image, RgbImageBuf};
pub use self::rgb::{ImageRgb8, Rgb};
