pub mod file_loader;
pub mod icons;
pub mod number_format;
