//! The accumulated record of data gathered across verification steps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::scan::{DocumentFileData, FaceData};
use crate::types::{DocumentType, FieldType, TwoDecimalFloat};

/// Identity verification data gathered so far.
///
/// Every field is optional: `None` means the field has not been collected
/// yet. Each verification step produces a record holding only what that step
/// gathered, and the steps are combined with [`merging`](Self::merging).
///
/// Fields are read through accessors. Apart from construction, the only way
/// to change a record is to merge into it or clear one of its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    biometric_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    face: Option<FaceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_document_back: Option<DocumentFileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_document_front: Option<DocumentFileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_document_type: Option<DocumentType>,
}

impl CollectedData {
    pub fn with_biometric_consent(mut self, consent: bool) -> Self {
        self.biometric_consent = Some(consent);
        self
    }

    pub fn with_face(mut self, face: FaceData) -> Self {
        self.face = Some(face);
        self
    }

    pub fn with_id_document_back(mut self, back: DocumentFileData) -> Self {
        self.id_document_back = Some(back);
        self
    }

    pub fn with_id_document_front(mut self, front: DocumentFileData) -> Self {
        self.id_document_front = Some(front);
        self
    }

    pub fn with_id_document_type(mut self, doc_type: DocumentType) -> Self {
        self.id_document_type = Some(doc_type);
        self
    }

    pub fn biometric_consent(&self) -> Option<bool> {
        self.biometric_consent
    }

    pub fn face(&self) -> Option<&FaceData> {
        self.face.as_ref()
    }

    pub fn id_document_back(&self) -> Option<&DocumentFileData> {
        self.id_document_back.as_ref()
    }

    pub fn id_document_front(&self) -> Option<&DocumentFileData> {
        self.id_document_front.as_ref()
    }

    pub fn id_document_type(&self) -> Option<DocumentType> {
        self.id_document_type
    }

    /// Returns a new record combining this one with `incoming`.
    ///
    /// Every field present in `incoming` wins; fields it lacks are taken
    /// from `self`.
    pub fn merging(&self, incoming: &CollectedData) -> CollectedData {
        CollectedData {
            biometric_consent: incoming.biometric_consent.or(self.biometric_consent),
            face: incoming.face.clone().or_else(|| self.face.clone()),
            id_document_back: incoming
                .id_document_back
                .clone()
                .or_else(|| self.id_document_back.clone()),
            id_document_front: incoming
                .id_document_front
                .clone()
                .or_else(|| self.id_document_front.clone()),
            id_document_type: incoming.id_document_type.or(self.id_document_type),
        }
    }

    /// Merges `incoming` into this record, see [`merging`](Self::merging).
    pub fn merge(&mut self, incoming: &CollectedData) {
        tracing::debug!(
            incoming = ?incoming.collected_types(),
            "merging collected data"
        );
        *self = self.merging(incoming);
    }

    /// Returns a copy of this record with `field` cleared.
    pub fn cleared(&self, field: FieldType) -> CollectedData {
        let mut data = self.clone();
        data.clear(field);
        data
    }

    /// Clears `field`, leaving every other field untouched.
    pub fn clear(&mut self, field: FieldType) {
        match field {
            FieldType::BiometricConsent => self.biometric_consent = None,
            FieldType::Face => self.face = None,
            FieldType::IdDocumentBack => self.id_document_back = None,
            FieldType::IdDocumentFront => self.id_document_front = None,
            FieldType::IdDocumentType => self.id_document_type = None,
        }
        tracing::debug!(field = %field, "cleared collected field");
    }

    /// Whether `field` holds a value.
    pub fn is_collected(&self, field: FieldType) -> bool {
        match field {
            FieldType::BiometricConsent => self.biometric_consent.is_some(),
            FieldType::Face => self.face.is_some(),
            FieldType::IdDocumentBack => self.id_document_back.is_some(),
            FieldType::IdDocumentFront => self.id_document_front.is_some(),
            FieldType::IdDocumentType => self.id_document_type.is_some(),
        }
    }

    /// The fields that hold a value.
    pub fn collected_types(&self) -> BTreeSet<FieldType> {
        FieldType::ALL
            .into_iter()
            .filter(|field| self.is_collected(*field))
            .collect()
    }

    /// Whether no field has been collected.
    pub fn is_empty(&self) -> bool {
        FieldType::ALL
            .into_iter()
            .all(|field| !self.is_collected(field))
    }

    /// Classifier score of the front document image for analytics.
    ///
    /// Licenses and ID cards report the front card score, passports the
    /// passport score. Without a document type there is no score. The back
    /// of the document is never consulted.
    pub fn front_document_score(&self) -> Option<TwoDecimalFloat> {
        let front = self.id_document_front.as_ref();
        match self.id_document_type? {
            DocumentType::DrivingLicense | DocumentType::IdCard => {
                front.and_then(DocumentFileData::front_card_score)
            }
            DocumentType::Passport => front.and_then(DocumentFileData::passport_score),
        }
    }
}
