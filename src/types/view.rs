//! Serializable view state for the order page
//!
//! The page is rendered from a single `ViewState`. Event handlers move it
//! through the transitions below instead of toggling elements directly.

use serde::Serialize;
use crate::{
    errors::CheckoutError,
    pricing::format_total,
    types::{Complexity, PricingResult, ScanReport},
};

pub const DEFAULT_SUBMIT_LABEL: &str = "ORDINA ORA";
pub const SUBMITTING_LABEL: &str = "INIZIALIZZAZIONE PAGAMENTO...";
pub const REDIRECTING_STATUS: &str = "REINDIRIZZAMENTO A CHECKOUT SICURO...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusTone {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingView {
    pub quantity: u64,
    pub total_display: String,
    pub active_tier_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadView {
    pub file_name: Option<String>,
    pub scanning: bool,
    pub scan_percent: u8,
    pub complexity: Option<Complexity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub pricing: Option<PricingView>,
    pub upload: UploadView,
    pub pricing_section_visible: bool,
    pub submit: SubmitButton,
    pub status: Option<StatusLine>,
    pub redirect_url: Option<String>,
    #[serde(skip)]
    idle_submit_label: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

impl ViewState {
    pub fn new(submit_label: &str) -> Self {
        Self {
            pricing: None,
            upload: UploadView::default(),
            pricing_section_visible: false,
            submit: SubmitButton {
                enabled: true,
                label: submit_label.to_string(),
            },
            status: None,
            redirect_url: None,
            idle_submit_label: submit_label.to_string(),
        }
    }

    pub fn update_pricing(&mut self, result: &PricingResult) {
        self.pricing = Some(PricingView {
            quantity: result.quantity,
            total_display: format_total(result.total),
            active_tier_id: result.active_tier.id.clone(),
        });
    }

    /// Hides any previous scan outcome and shows the overlay at 0%.
    pub fn begin_scan(&mut self, file_name: &str) {
        self.pricing_section_visible = false;
        self.status = None;
        self.upload = UploadView {
            file_name: Some(file_name.to_string()),
            scanning: true,
            scan_percent: 0,
            complexity: None,
        };
    }

    /// A rejected file clears whatever was uploaded before and hides the
    /// pricing section until a new scan completes.
    pub fn upload_failed(&mut self, error: &CheckoutError) {
        self.upload = UploadView::default();
        self.pricing_section_visible = false;
        self.status = Some(StatusLine {
            text: error.status_text(),
            tone: StatusTone::Error,
        });
    }

    pub fn scan_progress(&mut self, percent: u8) {
        self.upload.scan_percent = percent.min(100);
    }

    pub fn finish_scan(&mut self, report: &ScanReport) {
        self.upload.scanning = false;
        self.upload.scan_percent = 100;
        self.upload.file_name = Some(report.file_name.clone());
        self.upload.complexity = Some(report.complexity);
        self.pricing_section_visible = true;
    }

    pub fn begin_submit(&mut self) {
        self.submit.enabled = false;
        self.submit.label = SUBMITTING_LABEL.to_string();
        self.status = None;
    }

    /// Gating failures leave the button untouched; failures after the
    /// button was disabled restore it.
    pub fn submit_failed(&mut self, error: &CheckoutError) {
        self.status = Some(StatusLine {
            text: error.status_text(),
            tone: StatusTone::Error,
        });
        self.submit.enabled = true;
        self.submit.label = self.idle_submit_label.clone();
    }

    pub fn redirect(&mut self, checkout_url: &str) {
        self.status = Some(StatusLine {
            text: REDIRECTING_STATUS.to_string(),
            tone: StatusTone::Info,
        });
        self.redirect_url = Some(checkout_url.to_string());
    }

    /// The "ready" signal that gates form submission.
    pub fn scan_ready(&self) -> bool {
        self.pricing_section_visible && !self.upload.scanning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::TierTable;

    fn report(name: &str) -> ScanReport {
        ScanReport {
            scan_id: "scan-1".to_string(),
            file_name: name.to_string(),
            complexity: Complexity::Medium,
            completed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_pricing_view_tracks_active_tier() {
        let table = TierTable::default();
        let mut view = ViewState::default();

        view.update_pricing(&table.compute_price("41"));

        let pricing = view.pricing.expect("pricing view");
        assert_eq!(pricing.quantity, 41);
        assert_eq!(pricing.total_display, "€151,7");
        assert_eq!(pricing.active_tier_id, "tier-medium");
    }

    #[test]
    fn test_scan_lifecycle_reveals_pricing_section() {
        let mut view = ViewState::default();
        assert!(!view.scan_ready());

        view.begin_scan("logo.png");
        view.scan_progress(37);
        assert!(view.upload.scanning);
        assert_eq!(view.upload.scan_percent, 37);
        assert!(!view.scan_ready());

        view.finish_scan(&report("logo.png"));
        assert!(view.scan_ready());
        assert_eq!(view.upload.complexity, Some(Complexity::Medium));
    }

    #[test]
    fn test_rescan_hides_previous_result() {
        let mut view = ViewState::default();
        view.begin_scan("old.png");
        view.finish_scan(&report("old.png"));

        view.begin_scan("new.png");

        assert_eq!(view.upload.complexity, None);
        assert_eq!(view.upload.file_name.as_deref(), Some("new.png"));
        assert!(!view.scan_ready());
    }

    #[test]
    fn test_upload_failure_hides_previous_scan() {
        let mut view = ViewState::default();
        view.begin_scan("old.png");
        view.finish_scan(&report("old.png"));

        view.upload_failed(&CheckoutError::InvalidFile {
            file_name: "new.gif".to_string(),
            reason: "formato non supportato".to_string(),
        });

        assert!(!view.scan_ready());
        assert_eq!(view.upload, UploadView::default());
        let status = view.status.expect("status line");
        assert_eq!(status.tone, StatusTone::Error);
        assert_eq!(status.text, "ERRORE. File non valido: new.gif - formato non supportato");
    }

    #[test]
    fn test_failed_submit_restores_button() {
        let mut view = ViewState::new("PAGA");
        view.begin_submit();
        assert!(!view.submit.enabled);
        assert_eq!(view.submit.label, SUBMITTING_LABEL);

        view.submit_failed(&CheckoutError::MissingCheckoutUrl);

        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, "PAGA");
        let status = view.status.expect("status line");
        assert_eq!(status.tone, StatusTone::Error);
        assert_eq!(status.text, "ERRORE. Nessun URL di pagamento ricevuto");
    }

    #[test]
    fn test_view_state_serializes_without_internal_label() {
        let mut view = ViewState::default();
        view.redirect("https://checkout.example/s/1");

        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["redirect_url"], "https://checkout.example/s/1");
        assert_eq!(json["status"]["tone"], "Info");
        assert!(json.get("idle_submit_label").is_none());
    }
}
