//! Vaccine OCR Common Library
//!
//! ブラウザ版(WASM)とCLI版で共有される型とユーティリティ

pub mod chart;
pub mod error;
pub mod format;
pub mod lookup;
pub mod messages;
pub mod response;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

pub use chart::ChartKind;
pub use error::{Error, Result};
pub use lookup::{lookup, lookup_or, lookup_text};
pub use response::{classify_response, endpoint_url, HealthStatus};
pub use session::{Completion, Panels, Phase, Session};
pub use types::{Engine, ProcessResponse, VaccineField};
pub use validation::{validate_upload, UploadRejection, MAX_UPLOAD_BYTES};
pub use view::ResultView;
