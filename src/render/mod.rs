pub mod braille;
pub mod frame;
pub mod raster;

pub use braille::{BraillePlot, preprocess_to_braille};
pub use frame::Renderer;
pub use raster::{Columns, rasterize};
