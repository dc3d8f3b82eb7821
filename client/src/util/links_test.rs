use super::*;

#[test]
fn whatsapp_href_encodes_message_text() {
    let href = whatsapp_href("971501234567", GENERAL_ENQUIRY);
    assert!(href.starts_with("https://wa.me/971501234567?text="), "{href}");
    assert!(href.contains("Hello%21+I+would+like+to+inquire"), "{href}");
    assert!(!href.contains(' '));
}

#[test]
fn whatsapp_href_strips_formatting_from_number() {
    let href = whatsapp_href("+971 50 123 4567", "hi");
    assert_eq!(href, "https://wa.me/971501234567?text=hi");
}

#[test]
fn whatsapp_href_escapes_reserved_characters() {
    let href = whatsapp_href("1", "a&b=c?");
    assert_eq!(href, "https://wa.me/1?text=a%26b%3Dc%3F");
}

#[test]
fn tel_href_keeps_plus_and_digits() {
    assert_eq!(tel_href("+971 50 123 4567"), "tel:+971501234567");
    assert_eq!(tel_href("(04) 555-0100"), "tel:045550100");
}
