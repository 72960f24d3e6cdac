//! Project search and group filtering.
//!
//! A project is shown when it belongs to the selected group (or the filter is
//! [`GroupFilter::All`]) and the search text is a case-insensitive substring
//! of its title, its description or one of its tags. Matching is a stable,
//! linear pass: results keep fixture order.
//!
//! The search text is used as given. A whitespace-only query is a normal
//! substring search for that whitespace, not a match-all.

use std::fmt;

use crate::model::{GroupId, Project};

/// Raw filter value meaning "every group".
pub const ALL_GROUPS: &str = "all";

/// Which group's projects to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    /// No group restriction.
    #[default]
    All,
    /// Only projects of this group.
    Group(GroupId),
}

impl GroupFilter {
    /// Interpret a raw filter value: `"all"` or empty selects everything,
    /// anything else is taken as a group id.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_GROUPS {
            Self::All
        } else {
            Self::Group(GroupId::from(raw))
        }
    }

    /// The raw value, as used in `?group=`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_GROUPS,
            Self::Group(id) => id.as_str(),
        }
    }

    /// Whether the project passes this filter.
    #[must_use]
    pub fn admits(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Group(id) => &project.group_id == id,
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `needle` (already lowercased) occurs in the project's title,
/// description or any tag.
fn matches_text(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Select the projects to display, preserving their order.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [Project],
    group: &GroupFilter,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| group.admits(project) && matches_text(project, &needle))
        .collect()
}

/// The two inputs of the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub group: GroupFilter,
    pub search: String,
}

impl ProjectQuery {
    #[must_use]
    pub fn new(group: GroupFilter, search: impl Into<String>) -> Self {
        Self {
            group,
            search: search.into(),
        }
    }

    /// Build from optional `?group=` and `?search=` values.
    #[must_use]
    pub fn from_params(group: Option<&str>, search: Option<&str>) -> Self {
        Self {
            group: group.map(GroupFilter::parse).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
        }
    }

    /// True when neither input restricts the result.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.group == GroupFilter::All && self.search.is_empty()
    }

    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.group, &self.search)
    }
}
