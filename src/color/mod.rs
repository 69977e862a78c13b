mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use utils::{BLACK, blend_colors, fill_rainbow, fill_solid, hsv, hsv2rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;
