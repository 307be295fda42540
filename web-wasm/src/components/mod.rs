//! UIコンポーネント

pub mod engine_card;
pub mod field_accuracy;
pub mod header;
pub mod image_preview;
pub mod loading;
pub mod merge_decisions;
pub mod merge_quality;
pub mod metrics_panel;
pub mod preprocessed_images;
pub mod raw_text;
pub mod results;
pub mod toast;
pub mod upload_area;
