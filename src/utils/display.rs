//! Console rendering of quotes and page state

use tracing::{error, info};
use crate::{
    pricing::{format_amount, format_total, TierTable},
    types::{PricingResult, StatusTone, ViewState},
};

pub fn print_quote(result: &PricingResult, tiers: &TierTable) {
    info!("\n🧾 QUOTE");
    for tier in tiers.tiers() {
        let marker = if tier.id == result.active_tier.id { "▶" } else { " " };
        info!(
            " {} {:<16} {:>5} - {:<5} €{}/pz",
            marker,
            tier.id,
            tier.min_quantity,
            tier.max_quantity,
            format_amount(tier.unit_price)
        );
    }
    info!("   Quantity: {} pz", result.quantity);
    info!("   Total:    {}", format_total(result.total));
}

/// Renders the page state the way the order page would show it.
pub fn render_view(view: &ViewState) {
    if let Some(pricing) = &view.pricing {
        info!(
            "💶 {} pz → {} ({})",
            pricing.quantity, pricing.total_display, pricing.active_tier_id
        );
    }

    let upload = &view.upload;
    if upload.scanning {
        info!("🔍 Scanning {}: {}%",
            upload.file_name.as_deref().unwrap_or("-"),
            upload.scan_percent
        );
    } else if let (Some(name), Some(complexity)) = (&upload.file_name, upload.complexity) {
        info!("📄 {} | Complessità: {}", name, complexity);
    }

    info!(
        "🔘 [{}]{}",
        view.submit.label,
        if view.submit.enabled { "" } else { " (disabled)" }
    );

    if let Some(status) = &view.status {
        match status.tone {
            StatusTone::Info => info!("{}", status.text),
            StatusTone::Error => error!("{}", status.text),
        }
    }

    if let Some(url) = &view.redirect_url {
        info!("➡️  Redirect: {}", url);
    }
}
