//! Order page session: pricing, upload and checkout driving one view state

use tracing::{error, info, warn};
use crate::{
    checkout::{ensure_ready, CheckoutRequest, PaymentClient},
    errors::CheckoutResult,
    pricing::{clamp_input_quantity, TierTable},
    scan::ScanSimulator,
    types::{CheckoutRedirect, LogoFile, OrderForm, PricingResult, ScanReport, ViewState},
};

pub struct OrderSession {
    tiers: TierTable,
    pricing: PricingResult,
    upload: Option<(LogoFile, Vec<u8>)>,
    scan: Option<ScanReport>,
    view: ViewState,
}

impl OrderSession {
    /// Starts with the minimum order priced, as the page does on load.
    pub fn new(tiers: TierTable) -> Self {
        let pricing = tiers.compute_price("");
        let mut view = ViewState::default();
        view.update_pricing(&pricing);

        Self {
            tiers,
            pricing,
            upload: None,
            scan: None,
            view,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pricing(&self) -> &PricingResult {
        &self.pricing
    }

    pub fn scan_report(&self) -> Option<&ScanReport> {
        self.scan.as_ref()
    }

    /// Slider input: the slider range already bounds the value.
    pub fn slider_input(&mut self, raw: &str) -> &PricingResult {
        self.reprice(raw);
        &self.pricing
    }

    /// Quantity text field change: clamped into the orderable range first.
    pub fn quantity_field_change(&mut self, raw: &str) -> &PricingResult {
        let clamped = clamp_input_quantity(raw);
        self.reprice(&clamped.to_string());
        &self.pricing
    }

    fn reprice(&mut self, raw: &str) {
        self.pricing = self.tiers.compute_price(raw);
        self.view.update_pricing(&self.pricing);
    }

    /// Validates the picked file and plays the scan. A new upload discards
    /// the previous file and scan result, even when the new file is rejected.
    pub async fn upload(
        &mut self,
        file: LogoFile,
        contents: Vec<u8>,
        simulator: &ScanSimulator,
        max_upload_bytes: u64,
    ) -> CheckoutResult<&ScanReport> {
        self.upload = None;
        self.scan = None;

        if let Err(e) = file.validate(max_upload_bytes) {
            warn!("Upload rejected: {}", e);
            self.view.upload_failed(&e);
            return Err(e);
        }

        self.view.begin_scan(&file.name);

        let view = &mut self.view;
        let report = simulator.run(&file, |percent| view.scan_progress(percent)).await;

        self.view.finish_scan(&report);
        self.upload = Some((file, contents));
        Ok(self.scan.insert(report))
    }

    /// Submits the order. The outcome is also reflected in the view state:
    /// a redirect on success, an error status line otherwise.
    pub async fn submit(&mut self, form: &OrderForm, client: &PaymentClient) -> CheckoutResult<CheckoutRedirect> {
        let file = match ensure_ready(self.upload.as_ref().map(|(f, _)| f), self.scan.as_ref()) {
            Ok(file) => file,
            Err(e) => {
                warn!("Order submission blocked: {}", e);
                self.view.submit_failed(&e);
                return Err(e);
            }
        };
        let contents = self.upload.as_ref().map(|(_, c)| c.clone()).unwrap_or_default();
        let request = CheckoutRequest::new(form, &self.pricing, file, contents);

        self.view.begin_submit();
        info!(
            endpoint = client.endpoint(),
            quantity = request.quantity,
            total = %request.total,
            "Submitting order for {}",
            request.file_name
        );

        match client.create_payment(&request).await {
            Ok(redirect) => {
                self.view.redirect(&redirect.checkout_url);
                Ok(redirect)
            }
            Err(e) => {
                error!("Checkout failed: {}", e);
                self.view.submit_failed(&e);
                Err(e)
            }
        }
    }
}
