//! Upload validation

use std::path::Path;
use tracing::info;
use crate::{
    config::ALLOWED_EXTENSIONS,
    errors::{CheckoutError, CheckoutResult},
    types::LogoFile,
};

impl LogoFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            path: None,
        }
    }

    /// Describes a file on disk without reading its contents.
    pub fn from_path(path: &Path) -> CheckoutResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| CheckoutError::Io {
            context: format!("reading metadata of {}", path.display()),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Rejects files the payment endpoint would refuse anyway.
    pub fn validate(&self, max_upload_bytes: u64) -> CheckoutResult<()> {
        let invalid = |reason: String| CheckoutError::InvalidFile {
            file_name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("nessun file selezionato".to_string()));
        }

        match self.extension() {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(invalid(format!(
                    "formato non supportato (ammessi: {})",
                    ALLOWED_EXTENSIONS.join(", ")
                )));
            }
        }

        if self.size_bytes > max_upload_bytes {
            return Err(invalid(format!(
                "{} byte oltre il limite di {} byte",
                self.size_bytes, max_upload_bytes
            )));
        }

        info!(file = %self.name, size = self.size_bytes, "Accepted logo upload");
        Ok(())
    }
}
