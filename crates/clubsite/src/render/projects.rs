//! The projects page with its search box and group filter.

use super::{escape, PageMeta, Renderer};
use crate::filter::{GroupFilter, ProjectQuery};
use crate::model::Project;

/// Tags shown on a card before collapsing the rest into `+N`.
const VISIBLE_TAGS: usize = 4;

/// Members whose initials are shown on a card.
const VISIBLE_INITIALS: usize = 3;

/// Site-relative URL of the projects page for a query.
#[must_use]
pub fn projects_href(query: &ProjectQuery) -> String {
    let mut params = Vec::new();
    if let GroupFilter::Group(id) = &query.group {
        params.push(format!("group={}", urlencoding::encode(id.as_str())));
    }
    if !query.search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(&query.search)));
    }

    if params.is_empty() {
        "/projects".to_string()
    } else {
        format!("/projects?{}", params.join("&"))
    }
}

/// Directory URL of the exported projects page for a group filter.
#[must_use]
pub fn static_projects_href(group: &GroupFilter) -> String {
    match group {
        GroupFilter::All => "/projects/".to_string(),
        GroupFilter::Group(id) => format!("/projects/{}/", urlencoding::encode(id.as_str())),
    }
}

impl Renderer<'_> {
    /// `/projects`, filtered by `query`.
    #[must_use]
    pub fn projects(&self, query: &ProjectQuery) -> String {
        let all = self.catalog.projects();
        let shown = query.apply(all);

        let search_form = if self.static_links {
            String::new()
        } else {
            format!(
                "<form class=\"search\" action=\"/projects\" method=\"get\" role=\"search\">\
                 <input type=\"search\" name=\"search\" value=\"{}\" \
                 placeholder=\"Search projects, technologies, or descriptions...\" \
                 aria-label=\"Search projects\">{}\
                 <button type=\"submit\">Search</button></form>",
                escape(&query.search),
                match &query.group {
                    GroupFilter::All => String::new(),
                    GroupFilter::Group(id) => format!(
                        "<input type=\"hidden\" name=\"group\" value=\"{}\">",
                        escape(id.as_str())
                    ),
                },
            )
        };

        let filters = self.filter_links(query);

        let results = if shown.is_empty() {
            "<div class=\"empty\"><h3>No projects found</h3>\
             <p class=\"muted\">Try adjusting your search terms or filter selection.</p></div>"
                .to_string()
        } else {
            let cards: String = shown.iter().map(|p| self.project_card(p)).collect();
            format!(
                "<ul class=\"grid\">{cards}</ul>\
                 <p class=\"muted\">Showing {} of {} projects</p>",
                shown.len(),
                all.len(),
            )
        };

        let body = format!(
            "<section><h1>Our Projects</h1>\
             <p class=\"muted\">Discover the innovative projects built by our club members \
             across all specialized groups.</p>\
             {search_form}{filters}</section>\
             <section>{results}</section>"
        );

        let path = if self.static_links {
            static_projects_href(&query.group)
        } else {
            "/projects".to_string()
        };
        let meta = PageMeta::new(
            "Projects",
            "Projects built by club members across all groups.",
            path.trim_end_matches('/'),
        );
        self.document(&meta, &body)
    }

    fn filter_links(&self, query: &ProjectQuery) -> String {
        let options = std::iter::once((GroupFilter::All, "All Projects")).chain(
            self.catalog
                .groups()
                .iter()
                .map(|g| (GroupFilter::Group(g.id.clone()), g.short_name())),
        );

        let links: String = options
            .map(|(filter, label)| {
                let active = filter == query.group;
                let href = if self.static_links {
                    static_projects_href(&filter)
                } else {
                    projects_href(&ProjectQuery::new(filter, query.search.as_str()))
                };
                format!(
                    "<a class=\"button secondary{}\" href=\"{}\">{}</a>",
                    if active { " active" } else { "" },
                    escape(&href),
                    escape(label),
                )
            })
            .collect();

        format!("<nav class=\"filters\" aria-label=\"Filter by group\">{links}</nav>")
    }

    fn project_card(&self, project: &Project) -> String {
        let group = self.group_name(&project.group_id);
        let group = if group.is_empty() {
            String::new()
        } else {
            format!("<p class=\"muted\">{}</p>", escape(group))
        };

        let mut tags: String = project
            .tags
            .iter()
            .take(VISIBLE_TAGS)
            .map(|tag| format!("<li class=\"chip\">{}</li>", escape(tag)))
            .collect();
        let hidden = project.tags.len().saturating_sub(VISIBLE_TAGS);
        if hidden > 0 {
            tags.push_str(&format!("<li class=\"chip\">+{hidden}</li>"));
        }

        let initials: String = project
            .member_initials(VISIBLE_INITIALS)
            .iter()
            .map(|i| format!("<span class=\"avatar\">{}</span>", escape(i)))
            .collect();

        format!(
            "<li class=\"card\">\
             <span class=\"status status-{status_class}\">{status}</span>\
             <h3>{title}</h3>{group}<p>{description}</p>\
             <ul class=\"chips\">{tags}</ul>\
             <p class=\"muted\">{members} {initials}</p>\
             <a href=\"{github}\" target=\"_blank\" rel=\"noopener noreferrer\">View Source Code</a>\
             </li>",
            status_class = project.status.label().to_lowercase(),
            status = project.status.label(),
            title = escape(&project.title),
            description = escape(&project.description),
            members = project.member_count_label(),
            github = escape(&project.github),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{catalog, site};
    use super::*;

    #[test]
    fn test_projects_href() {
        assert_eq!(projects_href(&ProjectQuery::default()), "/projects");
        assert_eq!(
            projects_href(&ProjectQuery::new(GroupFilter::parse("ai-ml"), "deep learning")),
            "/projects?group=ai-ml&search=deep%20learning"
        );
        assert_eq!(
            projects_href(&ProjectQuery::new(GroupFilter::All, "c++")),
            "/projects?search=c%2B%2B"
        );
    }

    #[test]
    fn test_static_projects_href() {
        assert_eq!(static_projects_href(&GroupFilter::All), "/projects/");
        assert_eq!(
            static_projects_href(&GroupFilter::parse("ai-ml")),
            "/projects/ai-ml/"
        );
        assert_eq!(
            static_projects_href(&GroupFilter::parse("c# & .net")),
            "/projects/c%23%20%26%20.net/"
        );
    }

    #[test]
    fn test_static_links_point_at_group_pages() {
        let site = site();
        let catalog = catalog();
        let renderer = Renderer::new(&site, &catalog).with_static_links();
        let html = renderer.projects(&ProjectQuery::new(GroupFilter::parse("ai-ml"), ""));

        assert!(html.contains("href=\"/projects/\">All Projects</a>"));
        assert!(html.contains(
            "<a class=\"button secondary active\" href=\"/projects/ai-ml/\">AI/ML</a>"
        ));
        assert!(html.contains("href=\"/projects/mern-stack/\">MERN Stack</a>"));
        assert!(html.contains("content=\"https://coding-club.example.com/projects/ai-ml\""));
        assert!(!html.contains("/projects?"));
        assert!(!html.contains("name=\"search\""));
        assert!(html.contains("Showing 1 of 3 projects"));
    }

    #[test]
    fn test_unfiltered_lists_everything() {
        let site = site();
        let catalog = catalog();
        let html = Renderer::new(&site, &catalog).projects(&ProjectQuery::default());

        assert!(html.contains("Chat Bot"));
        assert!(html.contains("Shop &lt;Cart&gt;"));
        assert!(html.contains("Orphan"));
        assert!(html.contains("Showing 3 of 3 projects"));
    }

    #[test]
    fn test_search_prefills_and_filters() {
        let site = site();
        let catalog = catalog();
        let query = ProjectQuery::new(GroupFilter::All, "REACT");
        let html = Renderer::new(&site, &catalog).projects(&query);

        assert!(html.contains("value=\"REACT\""));
        assert!(html.contains("Shop &lt;Cart&gt;"));
        assert!(!html.contains("Chat Bot"));
        assert!(html.contains("Showing 1 of 3 projects"));
    }

    #[test]
    fn test_empty_state() {
        let site = site();
        let catalog = catalog();
        let query = ProjectQuery::new(GroupFilter::All, "quantum");
        let html = Renderer::new(&site, &catalog).projects(&query);

        assert!(html.contains("No projects found"));
        assert!(html.contains("Try adjusting your search terms or filter selection."));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_filter_links_preserve_search_and_mark_active() {
        let site = site();
        let catalog = catalog();
        let query = ProjectQuery::new(GroupFilter::parse("ai-ml"), "bot");
        let html = Renderer::new(&site, &catalog).projects(&query);

        assert!(html.contains("href=\"/projects?search=bot\">All Projects</a>"));
        assert!(html.contains(
            "<a class=\"button secondary active\" href=\"/projects?group=ai-ml&amp;search=bot\">AI/ML</a>"
        ));
        assert!(html.contains("href=\"/projects?group=mern-stack&amp;search=bot\">MERN Stack</a>"));
        assert!(html.contains("<input type=\"hidden\" name=\"group\" value=\"ai-ml\">"));
    }

    #[test]
    fn test_card_tags_members_and_initials() {
        let site = site();
        let catalog = catalog();
        let query = ProjectQuery::new(GroupFilter::parse("mern-stack"), "");
        let html = Renderer::new(&site, &catalog).projects(&query);

        assert!(html.contains("<li class=\"chip\">Express</li>"));
        assert!(!html.contains("<li class=\"chip\">Docker</li>"));
        assert!(html.contains("<li class=\"chip\">+2</li>"));
        assert!(html.contains("4 members"));
        assert!(html.contains("<span class=\"avatar\">I</span><span class=\"avatar\">R</span><span class=\"avatar\">T</span>"));
        assert!(!html.contains("<span class=\"avatar\">Y</span>"));
        assert!(html.contains("View Source Code"));
        assert!(html.contains("<p class=\"muted\">MERN Stack Group</p>"));
    }

    #[test]
    fn test_single_member_label() {
        let site = site();
        let catalog = catalog();
        let query = ProjectQuery::new(GroupFilter::parse("ai-ml"), "");
        let html = Renderer::new(&site, &catalog).projects(&query);

        assert!(html.contains("1 member "));
        assert!(html.contains("<span class=\"status status-ongoing\">Ongoing</span>"));
    }
}
