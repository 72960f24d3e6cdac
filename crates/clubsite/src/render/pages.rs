//! Content pages: home, groups, members, resources and the 404 page.

use super::{escape, group_href, PageMeta, Renderer};
use crate::content::GroupPage;
use crate::error::Result;
use crate::model::{Group, Project};

/// Number of updates shown on the home page.
const HOME_UPDATES: usize = 3;

const BENEFITS: [(&str, &str); 3] = [
    (
        "Learn with Roadmaps",
        "Structured learning paths to master your chosen domain with guided resources.",
    ),
    (
        "Work on Real Projects",
        "Collaborate on real-world projects to build your portfolio and skills.",
    ),
    (
        "Get Mentorship",
        "Learn from experienced mentors and grow in a supportive community.",
    ),
];

impl Renderer<'_> {
    /// `/`
    #[must_use]
    pub fn home(&self) -> String {
        let name = escape(&self.site.name);
        let hero = format!(
            "<section class=\"hero\">\
             <h1>Welcome to {name}</h1>\
             <p>{tagline}</p>\
             <p><a class=\"button\" href=\"/join\">Join Us</a> \
             <a class=\"button secondary\" href=\"/projects\">View Projects</a></p>\
             </section>",
            tagline = escape(&self.site.tagline),
        );

        let groups: String = self
            .catalog
            .groups()
            .iter()
            .map(|group| {
                format!(
                    "<li class=\"card\"><h3>{}</h3><p>{}</p>\
                     <a href=\"{}\">Learn More</a></li>",
                    escape(&group.name),
                    escape(&group.description),
                    escape(&group_href(&group.id)),
                )
            })
            .collect();

        let benefits: String = BENEFITS
            .iter()
            .map(|(title, description)| {
                format!("<li class=\"card\"><h3>{title}</h3><p>{description}</p></li>")
            })
            .collect();

        let updates: String = self
            .catalog
            .latest_updates(HOME_UPDATES)
            .iter()
            .map(|update| {
                format!(
                    "<li class=\"card\"><h3>{}</h3><p class=\"muted\">{}</p><p>{}</p></li>",
                    escape(&update.title),
                    escape(&update.display_date()),
                    escape(&update.description),
                )
            })
            .collect();

        let body = format!(
            "{hero}\
             <section id=\"groups\"><h2>Our Groups</h2>\
             <p class=\"muted\">Discover our specialized groups and dive into cutting-edge technologies.</p>\
             <ul class=\"grid\">{groups}</ul></section>\
             <section id=\"why-join\"><h2>Why Join Us?</h2><ul class=\"grid\">{benefits}</ul></section>\
             <section id=\"updates\"><h2>Latest Updates</h2>\
             <p class=\"muted\">Stay updated with the latest news and announcements from our club.</p>\
             <ul class=\"grid\">{updates}</ul></section>\
             <section class=\"hero\"><h2>Become a Member Today!</h2>\
             <p>Join our community of innovators and start your coding journey with us.</p>\
             <a class=\"button\" href=\"/join\">Join Now</a></section>"
        );

        let meta = PageMeta {
            title: None,
            description: self.site.tagline.clone(),
            path: "/".to_string(),
        };
        self.document(&meta, &body)
    }

    /// `/groups`
    #[must_use]
    pub fn groups(&self) -> String {
        let cards: String = self.catalog.groups().iter().map(group_card).collect();

        let body = format!(
            "<section><h1>Our Specialized Groups</h1>\
             <p class=\"muted\">Join one of our specialized groups to dive deep into cutting-edge technologies.</p>\
             <ul class=\"grid\">{cards}</ul></section>\
             <section class=\"hero\"><h2>Ready to Start Your Journey?</h2>\
             <p>Join our coding club and get access to all groups, exclusive resources, \
             and collaborative projects with fellow developers.</p>\
             <a class=\"button\" href=\"/join\">Join All Groups</a></section>"
        );

        let meta = PageMeta::new(
            "Groups",
            "Explore the specialized groups of the club.",
            "/groups",
        );
        self.document(&meta, &body)
    }

    /// `/groups/{slug}`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown slug.
    pub fn group(&self, slug: &str) -> Result<String> {
        let page = self.catalog.group_page(slug)?;
        let body = group_body(&page);
        let meta = PageMeta::new(
            page.group.name.as_str(),
            page.group.description.as_str(),
            group_href(&page.group.id),
        );
        Ok(self.document(&meta, &body))
    }

    /// `/members`
    #[must_use]
    pub fn members(&self) -> String {
        let members = self.catalog.members();

        let core: String = members
            .core_team
            .iter()
            .map(|m| {
                format!(
                    "<li class=\"card\">{}<h3>{}</h3><p class=\"muted\">{}</p>\
                     <a href=\"{}\" rel=\"noopener\">LinkedIn</a></li>",
                    photo(&m.photo, &m.name),
                    escape(&m.name),
                    escape(&m.role),
                    escape(&m.linkedin),
                )
            })
            .collect();

        let mentors: String = self
            .catalog
            .mentors()
            .iter()
            .map(|m| {
                let group = self.group_name(&m.group_id);
                let group = if group.is_empty() {
                    String::new()
                } else {
                    format!("<p class=\"chip\">{}</p>", escape(group))
                };
                format!(
                    "<li class=\"card\">{}<h3>{}</h3><p class=\"muted\">{}</p>{group}\
                     <a href=\"{}\" rel=\"noopener\">LinkedIn</a></li>",
                    photo(&m.photo, &m.name),
                    escape(&m.name),
                    escape(&m.role),
                    escape(&m.linkedin),
                )
            })
            .collect();

        let active = if members.active_members.is_empty() {
            "<p class=\"muted\">No active members yet. Join us to be featured here!</p>".to_string()
        } else {
            let cards: String = members
                .active_members
                .iter()
                .map(|m| {
                    format!(
                        "<li class=\"card\">{}<h3>{}</h3>\
                         <a href=\"{}\" rel=\"noopener\">GitHub</a></li>",
                        photo(&m.photo, &m.name),
                        escape(&m.name),
                        escape(&m.github),
                    )
                })
                .collect();
            format!("<ul class=\"grid\">{cards}</ul>")
        };

        let body = format!(
            "<section><h1>Our Members</h1>\
             <p class=\"muted\">Meet the passionate individuals driving innovation at {name}.</p></section>\
             <section><h2>Core Team</h2><ul class=\"grid\">{core}</ul></section>\
             <section><h2>Mentors &amp; Co-Leads</h2><ul class=\"grid\">{mentors}</ul></section>\
             <section><h2>Active Members</h2>{active}</section>",
            name = escape(&self.site.name),
        );

        let meta = PageMeta::new("Members", "Meet the people behind the club.", "/members");
        self.document(&meta, &body)
    }

    /// `/resources`
    #[must_use]
    pub fn resources(&self) -> String {
        let cards: String = self
            .catalog
            .resources()
            .iter()
            .map(|r| {
                let group = self.group_name(&r.group_id);
                let group = if group.is_empty() {
                    String::new()
                } else {
                    format!("<p class=\"chip\">{}</p>", escape(group))
                };
                format!(
                    "<li class=\"card\"><h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>\
                     {group}<p class=\"muted\">Click to explore this resource.</p></li>",
                    escape(&r.url),
                    escape(&r.title),
                )
            })
            .collect();

        let body = format!(
            "<section><h1>Learning Resources</h1>\
             <p class=\"muted\">Discover curated resources to master the technologies our groups work with.</p>\
             <ul class=\"grid\">{cards}</ul></section>"
        );

        let meta = PageMeta::new(
            "Resources",
            "Curated tutorials and learning paths.",
            "/resources",
        );
        self.document(&meta, &body)
    }

    /// The 404 page.
    #[must_use]
    pub fn not_found(&self) -> String {
        let body = "<section class=\"hero\"><h1>Page not found</h1>\
                    <p class=\"muted\">The page you are looking for does not exist.</p>\
                    <a class=\"button\" href=\"/\">Back to Home</a></section>";
        let meta = PageMeta::new("Not Found", "Page not found.", "/404");
        self.document(&meta, body)
    }
}

fn group_card(group: &Group) -> String {
    let chips: String = group
        .tech_stack
        .iter()
        .map(|tech| format!("<li class=\"chip\">{}</li>", escape(tech)))
        .collect();
    let count = group
        .member_count
        .map(|n| format!("<p class=\"muted\">{n} members</p>"))
        .unwrap_or_default();

    format!(
        "<li class=\"card\"><img src=\"{}\" alt=\"{}\">\
         <h3>{}</h3><p>{}</p><ul class=\"chips\">{chips}</ul>{count}\
         <a class=\"button\" href=\"{}\">Explore Group</a></li>",
        escape(&group.banner),
        escape(&group.name),
        escape(&group.name),
        escape(&group.description),
        escape(&group_href(&group.id)),
    )
}

fn group_body(page: &GroupPage<'_>) -> String {
    let group = page.group;

    let mentors: String = page
        .mentors
        .iter()
        .map(|m| {
            format!(
                "<li class=\"card\">{}<h3>{}</h3><p class=\"muted\">{}</p>\
                 <a href=\"{}\" rel=\"noopener\">LinkedIn</a></li>",
                photo(&m.photo, &m.name),
                escape(&m.name),
                escape(&m.role),
                escape(&m.linkedin),
            )
        })
        .collect();

    let steps: String = page
        .roadmap
        .iter()
        .map(|step| {
            format!(
                "<li><h3>{}</h3><p>{}</p></li>",
                escape(&step.title),
                escape(&step.description),
            )
        })
        .collect();

    let resources: String = page
        .resources
        .iter()
        .map(|r| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                escape(&r.url),
                escape(&r.title),
            )
        })
        .collect();

    let projects: String = page.projects.iter().copied().map(group_project).collect();

    let mut body = format!(
        "<section class=\"hero\"><img src=\"{banner}\" alt=\"{name}\">\
         <h1>{name}</h1><p>{description}</p></section>",
        banner = escape(&group.banner),
        name = escape(&group.name),
        description = escape(&group.description),
    );
    if !mentors.is_empty() {
        body.push_str(&format!(
            "<section><h2>Mentors &amp; Co-Leads</h2><ul class=\"grid\">{mentors}</ul></section>"
        ));
    }
    if !steps.is_empty() {
        body.push_str(&format!(
            "<section><h2>Learning Roadmap</h2><ol class=\"roadmap\">{steps}</ol></section>"
        ));
    }
    if !resources.is_empty() {
        body.push_str(&format!(
            "<section><h2>Resources</h2><ul>{resources}</ul></section>"
        ));
    }
    if !projects.is_empty() {
        body.push_str(&format!(
            "<section><h2>Group Projects</h2><ul class=\"grid\">{projects}</ul></section>"
        ));
    }
    body
}

fn group_project(project: &Project) -> String {
    format!(
        "<li class=\"card\"><h3>{}</h3><span class=\"status status-{}\">{}</span>\
         <p>{}</p><p><strong>Team:</strong> {}</p>\
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Source Code</a></li>",
        escape(&project.title),
        project.status.label().to_lowercase(),
        project.status.label(),
        escape(&project.description),
        escape(&project.members.join(", ")),
        escape(&project.github),
    )
}

fn photo(src: &str, name: &str) -> String {
    if src.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\" width=\"96\" height=\"96\">",
            escape(src),
            escape(name)
        )
    }
}
