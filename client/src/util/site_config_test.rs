use super::*;

#[test]
fn defaults_match_production_contact_details() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.company_name, "UAE Delivery Express");
    assert_eq!(cfg.contact_email, "info@uaedeliveryexpress.com");
    assert_eq!(cfg.phone, "+971 50 123 4567");
    assert_eq!(cfg.whatsapp_number, "971501234567");
    assert_eq!(cfg.form_endpoint, "https://formsubmit.co/info@uaedeliveryexpress.com");
}

#[test]
fn form_endpoint_follows_contact_email_override() {
    let cfg = SiteConfig::from_values(None, Some("ops@example.test"), None, None, None, None);
    assert_eq!(cfg.form_endpoint, "https://formsubmit.co/ops@example.test");
}

#[test]
fn explicit_form_endpoint_wins_and_drops_trailing_slash() {
    let cfg = SiteConfig::from_values(
        None,
        Some("ops@example.test"),
        None,
        None,
        None,
        Some("https://forms.example.test/inbox/"),
    );
    assert_eq!(cfg.form_endpoint, "https://forms.example.test/inbox");
}

#[test]
fn whatsapp_number_is_reduced_to_digits() {
    let cfg = SiteConfig::from_values(None, None, None, Some("+971 50-765 4321"), None, None);
    assert_eq!(cfg.whatsapp_number, "971507654321");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_values(Some("  "), Some(""), Some(" "), None, Some(""), Some("   "));
    assert_eq!(cfg, SiteConfig::default());
}
