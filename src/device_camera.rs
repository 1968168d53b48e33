pub mod impl_fake;
pub mod impl_image_file;
pub mod interface;
pub mod resize;
