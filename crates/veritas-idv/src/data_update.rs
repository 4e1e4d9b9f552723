//! Request body sent when a verification step saves its data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::collected_data::CollectedData;
use crate::error::IdvError;
use crate::types::FieldType;

/// Which collected fields the server should discard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearData {
    pub biometric_consent: bool,
    pub face: bool,
    pub id_document_back: bool,
    pub id_document_front: bool,
    pub id_document_type: bool,
}

impl ClearData {
    /// Mark every field in `fields` for clearing.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldType>) -> Self {
        let mut clear = Self::default();
        for field in fields {
            *clear.flag_mut(field) = true;
        }
        clear
    }

    /// Whether `field` is marked for clearing.
    pub fn contains(&self, field: FieldType) -> bool {
        match field {
            FieldType::BiometricConsent => self.biometric_consent,
            FieldType::Face => self.face,
            FieldType::IdDocumentBack => self.id_document_back,
            FieldType::IdDocumentFront => self.id_document_front,
            FieldType::IdDocumentType => self.id_document_type,
        }
    }

    /// The fields marked for clearing.
    pub fn fields(&self) -> BTreeSet<FieldType> {
        FieldType::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    fn flag_mut(&mut self, field: FieldType) -> &mut bool {
        match field {
            FieldType::BiometricConsent => &mut self.biometric_consent,
            FieldType::Face => &mut self.face,
            FieldType::IdDocumentBack => &mut self.id_document_back,
            FieldType::IdDocumentFront => &mut self.id_document_front,
            FieldType::IdDocumentType => &mut self.id_document_type,
        }
    }
}

/// Data collected by a step together with the fields to discard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_data: Option<ClearData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_data: Option<CollectedData>,
}

impl DataUpdate {
    /// Build the update for sending `collected`.
    ///
    /// Fields still `missing` on the server that `collected` does not provide
    /// are cleared, so stale values from an earlier attempt are dropped.
    pub fn new(collected: CollectedData, missing: &BTreeSet<FieldType>) -> Self {
        let provided = collected.collected_types();
        let clear = ClearData::from_fields(missing.difference(&provided).copied());

        Self {
            clear_data: (!clear.is_empty()).then_some(clear),
            collected_data: (!collected.is_empty()).then_some(collected),
        }
    }

    /// The record that results from applying this update to `base`.
    ///
    /// Cleared fields are removed first, then the collected data is merged in.
    pub fn apply(&self, base: &CollectedData) -> CollectedData {
        let mut data = base.clone();
        if let Some(clear) = &self.clear_data {
            for field in clear.fields() {
                data.clear(field);
            }
        }
        if let Some(collected) = &self.collected_data {
            data.merge(collected);
        }
        tracing::debug!(
            collected = ?data.collected_types(),
            "applied data update"
        );
        data
    }

    pub fn to_json(&self) -> Result<String, IdvError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IdvError> {
        Ok(serde_json::from_str(json)?)
    }
}
