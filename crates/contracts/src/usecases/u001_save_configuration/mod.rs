//! Saving edited configuration values.
//!
//! Saving is a mock: collected values are handed to a [`SaveSink`] (console,
//! server log) and the user gets a transient confirmation. Nothing is stored.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::a002_configuration_parameter::EditResult;
use crate::domain::common::DocumentCode;
use crate::shared::toast::TOAST_DISMISS_AFTER;

/// Confirmation text shown after a save
pub const SAVED_MESSAGE: &str = "Ayarlar kaydedildi.";

/// Body of `POST /api/configuration/save`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveConfigurationRequest {
    pub document: DocumentCode,
    pub values: Vec<EditResult>,
}

/// Reply of `POST /api/configuration/save`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveConfigurationResponse {
    pub success: bool,
    pub message: String,
    pub saved_count: usize,
}

/// Destination of collected values. Implementations must return without
/// waiting on any I/O.
pub trait SaveSink {
    fn forward(&self, request: &SaveConfigurationRequest);
}

/// What the interface should show once values were forwarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub dismiss_after: Duration,
}

/// Forward `values` to `sink` exactly once and return the confirmation to show
pub fn notify(document: &DocumentCode, values: Vec<EditResult>, sink: &dyn SaveSink) -> Notice {
    let request = SaveConfigurationRequest {
        document: document.clone(),
        values,
    };
    sink.forward(&request);
    Notice {
        message: SAVED_MESSAGE.to_string(),
        dismiss_after: TOAST_DISMISS_AFTER,
    }
}
