//! HTML views.
//!
//! Every page is a pure function of the catalog, the site configuration and
//! the page's own state, returning a complete HTML document. The server and
//! the static exporter share these functions, so a page looks the same
//! whether it is served or written to disk.
//!
//! All fixture text goes through [`escape`] before it reaches the markup.

mod join;
mod layout;
mod pages;
mod projects;

use chrono::Datelike;

use crate::config::SiteConfig;
use crate::content::Catalog;
use crate::model::GroupId;

pub use layout::NAV_LINKS;
pub use projects::{projects_href, static_projects_href};

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Site-relative URL of a group page, with the id percent-encoded.
#[must_use]
pub fn group_href(id: &GroupId) -> String {
    format!("/groups/{}", urlencoding::encode(id.as_str()))
}

/// Title, description and path of a page, for `<head>`.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Page title without the site suffix; `None` on the home page.
    pub title: Option<String>,
    pub description: String,
    /// Site-relative path, used for the Open Graph URL.
    pub path: String,
}

impl PageMeta {
    fn new(title: impl Into<String>, description: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            path: path.into(),
        }
    }
}

/// Renders pages for one site.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    site: &'a SiteConfig,
    catalog: &'a Catalog,
    year: i32,
    /// Links only to paths a static file host can answer, with no query strings.
    static_links: bool,
}

impl<'a> Renderer<'a> {
    /// A renderer stamping the current year into the footer.
    #[must_use]
    pub fn new(site: &'a SiteConfig, catalog: &'a Catalog) -> Self {
        Self {
            site,
            catalog,
            year: chrono::Local::now().year(),
            static_links: false,
        }
    }

    /// Use a fixed copyright year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Render for a static export: the project filter links to one page per
    /// group and the query-driven search forms are left out.
    #[must_use]
    pub fn with_static_links(mut self) -> Self {
        self.static_links = true;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn group_name(&self, id: &GroupId) -> &'a str {
        self.catalog.group_name(id).unwrap_or_default()
    }
}
