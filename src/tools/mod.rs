mod image_io;
mod path_validator;

pub use image_io::{open_image, save_png};
pub use path_validator::{ensure_output_parent, validate_input_file};
