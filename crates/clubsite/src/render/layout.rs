//! Shared page chrome: head, navbar and footer.

use super::{escape, PageMeta, Renderer};

/// Primary navigation, shown in the navbar and the footer.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Groups", "/groups"),
    ("Projects", "/projects"),
    ("Members", "/members"),
    ("Resources", "/resources"),
    ("Join Us", "/join"),
];

const STYLESHEET: &str = r"
:root { --accent: #2563eb; --muted: #6b7280; --card: #f9fafb; --border: #e5e7eb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; line-height: 1.5; }
a { color: var(--accent); text-decoration: none; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.navbar { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: space-between;
  padding: 0.75rem 1.5rem; border-bottom: 1px solid var(--border); }
.navbar .brand { font-weight: 700; color: inherit; }
.navbar ul, .site-footer ul { display: flex; flex-wrap: wrap; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.navbar a.active { font-weight: 600; text-decoration: underline; }
.hero { text-align: center; padding: 3rem 1rem; }
.button { display: inline-block; padding: 0.5rem 1.25rem; border-radius: 0.5rem; background: var(--accent); color: #fff; }
.button.secondary { background: transparent; color: var(--accent); border: 1px solid var(--accent); }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); padding: 0; list-style: none; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 0.75rem; padding: 1.25rem; }
.card img { max-width: 100%; border-radius: 0.5rem; }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
.chip { font-size: 0.8rem; padding: 0.1rem 0.6rem; border-radius: 999px; background: #dbeafe; }
.status { font-size: 0.75rem; font-weight: 600; padding: 0.1rem 0.6rem; border-radius: 999px; }
.status-ongoing { background: #dcfce7; } .status-completed { background: #dbeafe; } .status-planning { background: #fef9c3; }
.filters { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.filters a.active { background: var(--accent); color: #fff; }
.muted { color: var(--muted); }
.notice { padding: 1rem; border-radius: 0.5rem; }
.notice.success { background: #dcfce7; } .notice.error { background: #fee2e2; }
form.join label { display: block; margin-top: 1rem; font-weight: 600; }
form.join input, form.join select, form.join textarea { width: 100%; padding: 0.5rem; }
.roadmap { counter-reset: step; }
.site-footer { border-top: 1px solid var(--border); padding: 2rem 1.5rem; text-align: center; }
";

impl Renderer<'_> {
    /// Wrap a page body in the full document.
    pub(super) fn document(&self, meta: &PageMeta, body: &str) -> String {
        let title = match &meta.title {
            Some(title) => format!("{title} - {}", self.site.name),
            None => self.site.name.clone(),
        };
        let title = escape(&title);
        let description = escape(&meta.description);
        let url = escape(&self.site.page_url(&meta.path));

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <meta name=\"description\" content=\"{description}\">\n\
             <meta property=\"og:type\" content=\"website\">\n\
             <meta property=\"og:title\" content=\"{title}\">\n\
             <meta property=\"og:description\" content=\"{description}\">\n\
             <meta property=\"og:url\" content=\"{url}\">\n\
             <style>{STYLESHEET}</style>\n\
             </head>\n\
             <body>\n\
             {navbar}\n\
             <main>\n{body}\n</main>\n\
             {footer}\n\
             </body>\n\
             </html>\n",
            navbar = self.navbar(&meta.path),
            footer = self.footer(),
        )
    }

    fn navbar(&self, current: &str) -> String {
        let links: String = NAV_LINKS
            .iter()
            .map(|(label, href)| {
                let active = is_active(current, href);
                format!(
                    "<li><a href=\"{href}\"{}>{label}</a></li>",
                    if active { " class=\"active\" aria-current=\"page\"" } else { "" }
                )
            })
            .collect();

        // Browsers refuse to submit a blank query because of `pattern`
        let search = if self.static_links {
            ""
        } else {
            "<form class=\"quick-search\" action=\"/projects\" method=\"get\" role=\"search\">\
             <input type=\"search\" name=\"search\" placeholder=\"Search projects...\" \
             aria-label=\"Search projects\" required pattern=\".*\\S.*\">\
             </form>"
        };
        format!(
            "<nav class=\"navbar\">\
             <a class=\"brand\" href=\"/\">{name}</a>\
             <ul>{links}</ul>{search}</nav>",
            name = escape(&self.site.name),
        )
    }

    fn footer(&self) -> String {
        let links: String = NAV_LINKS
            .iter()
            .map(|(label, href)| format!("<li><a href=\"{href}\">{label}</a></li>"))
            .collect();

        format!(
            "<footer class=\"site-footer\">\
             <p><strong>{name}</strong></p>\
             <p class=\"muted\">{tagline}</p>\
             <ul>{links}</ul>\
             <p class=\"muted\">Copyright &copy; {holder} {year}</p>\
             </footer>",
            name = escape(&self.site.name),
            tagline = escape(&self.site.tagline),
            holder = escape(&self.site.copyright_holder),
            year = self.year,
        )
    }
}

/// Whether a nav link points at the current page or one of its children.
fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{catalog, site};
    use super::*;

    #[test]
    fn test_document_title_and_meta() {
        let site = site();
        let catalog = catalog();
        let renderer = Renderer::new(&site, &catalog).with_year(2025);
        let meta = PageMeta::new("Groups", "All <groups>", "/groups");

        let html = renderer.document(&meta, "<p>body</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Groups - TechBit Coding Club</title>"));
        assert!(html.contains("content=\"All &lt;groups&gt;\""));
        assert!(html.contains("content=\"https://coding-club.example.com/groups\""));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_home_title_is_site_name() {
        let site = site();
        let catalog = catalog();
        let renderer = Renderer::new(&site, &catalog);
        let meta = PageMeta {
            title: None,
            description: String::new(),
            path: "/".to_string(),
        };

        let html = renderer.document(&meta, "");
        assert!(html.contains("<title>TechBit Coding Club</title>"));
    }

    #[test]
    fn test_navbar_marks_active_link() {
        let site = site();
        let catalog = catalog();
        let renderer = Renderer::new(&site, &catalog);

        let nav = renderer.navbar("/groups/ai-ml");
        assert!(nav.contains("<a href=\"/groups\" class=\"active\""));
        assert!(!nav.contains("<a href=\"/\" class=\"active\""));
        for (label, href) in NAV_LINKS {
            assert!(nav.contains(&format!("href=\"{href}\"")), "missing {label}");
        }
    }

    #[test]
    fn test_quick_search_targets_projects() {
        let site = site();
        let catalog = catalog();
        let nav = Renderer::new(&site, &catalog).navbar("/");

        assert!(nav.contains("action=\"/projects\""));
        assert!(nav.contains("name=\"search\""));
        assert!(nav.contains("required pattern="));
    }

    #[test]
    fn test_static_navbar_has_no_quick_search() {
        let site = site();
        let catalog = catalog();
        let nav = Renderer::new(&site, &catalog).with_static_links().navbar("/");

        assert!(!nav.contains("quick-search"));
        assert!(nav.contains("href=\"/projects\""));
    }

    #[test]
    fn test_footer_copyright_year() {
        let site = site();
        let catalog = catalog();
        let footer = Renderer::new(&site, &catalog).with_year(2031).footer();

        assert!(footer.contains("Copyright &copy; Godavari College Of Engineering 2031"));
        assert!(footer.contains("Join Us"));
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/projects", "/"));
        assert!(is_active("/projects", "/projects"));
        assert!(!is_active("/projectsx", "/projects"));
    }
}
