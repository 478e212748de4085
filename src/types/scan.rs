//! Upload and scan types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A logo picked by the user, as seen by the upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: Option<PathBuf>,
}

/// Cosmetic complexity label shown once the scan completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Low => "BASSA (FAST)",
            Complexity::Medium => "MEDIA (STANDARD)",
            Complexity::High => "ALTA (PRECISION)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion record of a scan. Holding one means the upload is ready for
/// checkout.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan_id: String,
    pub file_name: String,
    pub complexity: Complexity,
    pub completed_at: DateTime<Utc>,
}
