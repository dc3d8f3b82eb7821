//! One-tap contact links (`tel:` and messaging-app deep links).

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Prefilled messages for the different contact entry points.
pub const GENERAL_ENQUIRY: &str = "Hello! I would like to inquire about your delivery services.";
pub const QUOTE_REQUEST: &str = "Hello! I would like to get a quote for delivery services.";
pub const FAQ_QUESTION: &str = "I have a question about your delivery services";
pub const TRACKING_HELP: &str = "I need help tracking my package";

/// Build `https://wa.me/<digits>?text=<encoded>` for a messaging-app chat.
pub fn whatsapp_href(number: &str, text: &str) -> String {
    let base = format!("{WHATSAPP_BASE}/{}", digits(number));
    match Url::parse(&base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", text);
            url.into()
        }
        Err(_) => base,
    }
}

/// Build a dialable `tel:` URI, dropping spaces and punctuation.
pub fn tel_href(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{dialable}")
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}
