//! Site route table shared by the router, navigation, and the static exporter.
//!
//! DESIGN
//! ======
//! Every page is a fixed route with no path or query parameters. Hrefs carry a
//! trailing slash so links resolve directly to `<route>/index.html` in the
//! exported bundle.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Services,
    Track,
    Faq,
    Contact,
}

impl SiteRoute {
    /// All routes in navigation order.
    pub const ALL: [SiteRoute; 6] = [
        SiteRoute::Home,
        SiteRoute::About,
        SiteRoute::Services,
        SiteRoute::Track,
        SiteRoute::Faq,
        SiteRoute::Contact,
    ];

    /// Path segment used by the router (`""` for the home page).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            SiteRoute::Home => "",
            SiteRoute::About => "about",
            SiteRoute::Services => "services",
            SiteRoute::Track => "track",
            SiteRoute::Faq => "faq",
            SiteRoute::Contact => "contact",
        }
    }

    /// Link target with trailing slash normalization.
    #[must_use]
    pub fn href(self) -> String {
        match self.segment() {
            "" => "/".to_owned(),
            segment => format!("/{segment}/"),
        }
    }

    /// Label shown in the header navigation.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::About => "About",
            SiteRoute::Services => "Services",
            SiteRoute::Track => "Track Order",
            SiteRoute::Faq => "FAQ",
            SiteRoute::Contact => "Contact",
        }
    }

    /// Document title for the page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SiteRoute::Home => "UAE Delivery Express - Fast & Reliable Delivery Services",
            SiteRoute::About => "About Us | UAE Delivery Express",
            SiteRoute::Services => "Our Services | UAE Delivery Express",
            SiteRoute::Track => "Track Your Order | UAE Delivery Express",
            SiteRoute::Faq => "FAQ | UAE Delivery Express",
            SiteRoute::Contact => "Contact Us | UAE Delivery Express",
        }
    }

    /// File the static exporter writes this route to, relative to the output root.
    #[must_use]
    pub fn export_file(self) -> String {
        match self.segment() {
            "" => "index.html".to_owned(),
            segment => format!("{segment}/index.html"),
        }
    }
}
