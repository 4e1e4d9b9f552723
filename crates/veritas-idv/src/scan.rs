//! Results of the capture steps that feed [`CollectedData`](crate::CollectedData).
//!
//! These records are produced by the document and selfie scanners and are
//! carried through the collected data unchanged.

use serde::{Deserialize, Serialize};

use crate::types::TwoDecimalFloat;

/// How a document image reached the verification flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadMethod {
    /// Captured automatically once the scanner was confident.
    AutoCapture,
    /// Chosen from the device's files or photo library.
    FileUpload,
    /// Captured by the user pressing the shutter.
    ManualCapture,
}

/// Uploaded images and classifier scores for one side of an ID document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFileData {
    /// Score that the image shows the back of an ID card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_score: Option<TwoDecimalFloat>,
    /// Score that the image shows the front of an ID card or license.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_card_score: Option<TwoDecimalFloat>,
    /// File id of the high resolution upload.
    pub high_res_image: String,
    /// Score that the image is not a usable document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_score: Option<TwoDecimalFloat>,
    /// File id of the low resolution upload, when one was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_res_image: Option<String>,
    /// Score that no document is present in the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_document_score: Option<TwoDecimalFloat>,
    /// Score that the image shows a passport data page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_score: Option<TwoDecimalFloat>,
    pub upload_method: UploadMethod,
}

impl DocumentFileData {
    /// Document data for an upload that carries no classifier scores.
    pub fn new(high_res_image: impl Into<String>, upload_method: UploadMethod) -> Self {
        Self {
            back_score: None,
            front_card_score: None,
            high_res_image: high_res_image.into(),
            invalid_score: None,
            low_res_image: None,
            no_document_score: None,
            passport_score: None,
            upload_method,
        }
    }

    pub fn front_card_score(&self) -> Option<TwoDecimalFloat> {
        self.front_card_score
    }

    pub fn passport_score(&self) -> Option<TwoDecimalFloat> {
        self.passport_score
    }
}

/// Uploaded selfie frames and face detector statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceData {
    pub best_high_res_image: String,
    pub best_low_res_image: String,
    pub first_high_res_image: String,
    pub first_low_res_image: String,
    pub last_high_res_image: String,
    pub last_low_res_image: String,
    /// Face score of the best frame.
    pub best_face_score: TwoDecimalFloat,
    /// Variance of the face score across all sampled frames.
    pub face_score_variance: TwoDecimalFloat,
    /// Number of frames the detector sampled.
    pub num_frames: u32,
    /// Whether the user agreed to their selfie being used for model training.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_consent: Option<bool>,
}
