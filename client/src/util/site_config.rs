//! Company contact details and outbound endpoints.
//!
//! Values are baked in at compile time from `SITE_*` environment variables so
//! the WASM bundle and the statically rendered HTML always agree. Every field
//! falls back to the production default when its variable is unset.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

pub const DEFAULT_COMPANY_NAME: &str = "UAE Delivery Express";
pub const DEFAULT_CONTACT_EMAIL: &str = "info@uaedeliveryexpress.com";
pub const DEFAULT_PHONE: &str = "+971 50 123 4567";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "971501234567";
pub const DEFAULT_ADDRESS: &str = "Business Bay, Dubai, UAE";
pub const FORM_SERVICE_BASE: &str = "https://formsubmit.co";

/// Site-wide contact configuration, provided to components via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub company_name: String,
    pub contact_email: String,
    /// Human-readable phone number, e.g. `+971 50 123 4567`.
    pub phone: String,
    /// Messaging-app number in international form without `+` or spaces.
    pub whatsapp_number: String,
    pub address: String,
    /// Destination of contact-form submissions.
    pub form_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None, None)
    }
}

impl SiteConfig {
    /// Build config from `SITE_*` variables captured at compile time.
    ///
    /// Recognized:
    /// - `SITE_COMPANY_NAME`
    /// - `SITE_CONTACT_EMAIL`
    /// - `SITE_PHONE`
    /// - `SITE_WHATSAPP_NUMBER`
    /// - `SITE_ADDRESS`
    /// - `SITE_FORM_ENDPOINT` (defaults to the form service URL for the contact email)
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SITE_COMPANY_NAME"),
            option_env!("SITE_CONTACT_EMAIL"),
            option_env!("SITE_PHONE"),
            option_env!("SITE_WHATSAPP_NUMBER"),
            option_env!("SITE_ADDRESS"),
            option_env!("SITE_FORM_ENDPOINT"),
        )
    }

    fn from_values(
        company_name: Option<&str>,
        contact_email: Option<&str>,
        phone: Option<&str>,
        whatsapp_number: Option<&str>,
        address: Option<&str>,
        form_endpoint: Option<&str>,
    ) -> Self {
        let contact_email = non_empty(contact_email).unwrap_or(DEFAULT_CONTACT_EMAIL).to_owned();
        let form_endpoint = non_empty(form_endpoint)
            .map_or_else(|| default_form_endpoint(&contact_email), |url| url.trim_end_matches('/').to_owned());
        let whatsapp_number = non_empty(whatsapp_number)
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        Self {
            company_name: non_empty(company_name).unwrap_or(DEFAULT_COMPANY_NAME).to_owned(),
            contact_email,
            phone: non_empty(phone).unwrap_or(DEFAULT_PHONE).to_owned(),
            whatsapp_number,
            address: non_empty(address).unwrap_or(DEFAULT_ADDRESS).to_owned(),
            form_endpoint,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn default_form_endpoint(contact_email: &str) -> String {
    format!("{FORM_SERVICE_BASE}/{contact_email}")
}
