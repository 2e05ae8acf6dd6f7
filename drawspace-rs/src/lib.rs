#![doc = include_str!("../README.md")]

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod draw_space;
pub mod error;
pub mod export;
pub mod image_loading;
pub mod markup;
pub mod paint;
pub mod script;
pub mod text;

pub use config::DrawSpaceConfig;
pub use draw_space::DrawSpace;
pub use error::{DrawSpaceError, DrawSpaceResult};
pub use export::ExportFormat;
pub use image_loading::{load_image, ImageSource, LoadedImage};
pub use markup::Instruction;
pub use text::{TextAlign, TextLayout, TextOptions};

pub use drawspace_canvas2d;
