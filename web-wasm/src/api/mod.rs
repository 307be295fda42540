//! OCRサーバーとの通信

pub mod process;

pub use process::upload_image;
