//! Veritas IDV — Data collected during a multi-step identity verification.
//!
//! Each step of a verification flow produces a partial [`CollectedData`]
//! record. Records are merged field by field into a running accumulator,
//! individual fields can be cleared, and the accumulator exposes the set of
//! collected fields and the front document score used for analytics.

pub mod collected_data;
pub mod data_update;
pub mod error;
pub mod scan;
pub mod types;

pub use collected_data::CollectedData;
pub use data_update::{ClearData, DataUpdate};
pub use error::IdvError;
pub use scan::{DocumentFileData, FaceData, UploadMethod};
pub use types::{DocumentType, FieldType, TwoDecimalFloat};
