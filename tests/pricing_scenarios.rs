use rust_decimal_macros::dec;
use timbro_checkout::{
    pricing::{clamp_input_quantity, format_total},
    TierTable,
};

#[test]
fn test_reference_quotes() {
    let tiers = TierTable::default();

    let cases = [
        ("12", 12, "tier-small", dec!(48.00), "€48"),
        ("41", 41, "tier-medium", dec!(151.70), "€151,7"),
        ("100", 100, "tier-corporate", dec!(340.00), "€340"),
        ("abc", 12, "tier-small", dec!(48.00), "€48"),
        ("-5", 12, "tier-small", dec!(48.00), "€48"),
        ("10001", 10001, "tier-corporate", dec!(34003.40), "€34.003,4"),
    ];

    for (raw, quantity, tier, total, display) in cases {
        let result = tiers.compute_price(raw);
        assert_eq!(result.quantity, quantity, "input {:?}", raw);
        assert_eq!(result.active_tier.id, tier, "input {:?}", raw);
        assert_eq!(result.total, total, "input {:?}", raw);
        assert_eq!(format_total(result.total), display, "input {:?}", raw);
    }
}

#[test]
fn test_field_clamp_then_price() {
    let tiers = TierTable::default();
    let quantity = clamp_input_quantity("2500");
    let result = tiers.compute_for_quantity(i64::from(quantity));

    assert_eq!(result.quantity, 1000);
    assert_eq!(result.total, dec!(3400.00));
}
