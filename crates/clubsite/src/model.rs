//! Content records for clubsite.
//!
//! These are the flat, denormalized records stored in the JSON fixtures. They
//! are loaded once and never mutated. Cross references between records go
//! through [`GroupId`], a soft foreign key that is resolved by the catalog.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of a [`Group`], also used as its URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap a raw id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GroupId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A subject track such as AI/ML or Data Science.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Slug and primary key.
    pub id: GroupId,
    /// Display name, usually ending in "Group".
    pub name: String,
    /// Short pitch for the group.
    pub description: String,
    /// Banner image URL.
    pub banner: String,
    /// Technologies the group works with.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Number of active members, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

impl Group {
    /// The name without its trailing " Group", as used on filter buttons.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.strip_suffix(" Group").unwrap_or(&self.name)
    }
}

/// An advisor attached to one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub linkedin: String,
    pub photo: String,
    pub group_id: GroupId,
}

/// Lifecycle of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Being worked on.
    #[serde(alias = "ongoing")]
    Ongoing,
    /// Shipped.
    #[serde(alias = "completed")]
    Completed,
    /// Not started yet.
    #[serde(alias = "planning")]
    Planning,
}

impl ProjectStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Ongoing, Self::Completed, Self::Planning];

    /// Canonical label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Planning => "Planning",
        }
    }

    /// Match a fixture value against the canonical labels, ignoring case.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| format!("unknown project status: {s}"))
    }
}

/// Project as stored in the fixture, before status normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    id: String,
    title: String,
    description: String,
    group_id: GroupId,
    #[serde(default)]
    members: Vec<String>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    github: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// A club-built work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProjectRecord")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub group_id: GroupId,
    /// Team member names.
    pub members: Vec<String>,
    pub status: ProjectStatus,
    /// Source repository URL.
    pub github: String,
    pub tags: Vec<String>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        let status = ProjectStatus::parse_lenient(&record.status).unwrap_or_else(|| {
            warn!(
                project = %record.id,
                status = %record.status,
                "Unrecognized project status, treating as Planning"
            );
            ProjectStatus::Planning
        });

        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            group_id: record.group_id,
            members: record.members,
            status,
            github: record.github,
            tags: record.tags,
        }
    }
}

impl Project {
    /// "1 member" or "N members".
    #[must_use]
    pub fn member_count_label(&self) -> String {
        let count = self.members.len();
        if count == 1 {
            "1 member".to_string()
        } else {
            format!("{count} members")
        }
    }

    /// Uppercased first letters of the first `limit` members.
    #[must_use]
    pub fn member_initials(&self, limit: usize) -> Vec<String> {
        self.members
            .iter()
            .take(limit)
            .filter_map(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .collect()
    }
}

/// A learning link attached to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub group_id: GroupId,
}

/// One step of a learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The roadmap of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub group_id: GroupId,
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}

/// A member of the club leadership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub linkedin: String,
    pub photo: String,
}

/// A regular club member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMember {
    pub id: String,
    pub name: String,
    pub github: String,
    pub photo: String,
}

/// Layouts accepted for `members.json`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MembersRecord {
    #[serde(rename_all = "camelCase")]
    Split {
        #[serde(default)]
        core_team: Vec<CoreMember>,
        #[serde(default)]
        active_members: Vec<ActiveMember>,
    },
    /// Older fixtures list active members only.
    Flat(Vec<ActiveMember>),
}

/// Everyone listed on the members page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MembersRecord")]
pub struct Members {
    pub core_team: Vec<CoreMember>,
    pub active_members: Vec<ActiveMember>,
}

impl From<MembersRecord> for Members {
    fn from(record: MembersRecord) -> Self {
        match record {
            MembersRecord::Split {
                core_team,
                active_members,
            } => Self {
                core_team,
                active_members,
            },
            MembersRecord::Flat(active_members) => Self {
                core_team: Vec::new(),
                active_members,
            },
        }
    }
}

/// A news item shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub title: String,
    /// ISO date (`YYYY-MM-DD`) or free text.
    pub date: String,
    pub description: String,
}

impl Update {
    /// The date as "February 10, 2025" when it is an ISO date, verbatim otherwise.
    #[must_use]
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_or_else(|_| self.date.clone(), |d| d.format("%B %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_json(status: &str) -> String {
        format!(
            r#"{{"id":"p1","title":"Chat Bot","description":"d","groupId":"ai-ml",
                "members":["ana"],"status":"{status}","github":"g","tags":["AI"]}}"#
        )
    }

    #[test]
    fn test_group_id_display_and_borrow() {
        let id = GroupId::from("ai-ml");
        assert_eq!(id.to_string(), "ai-ml");
        let borrowed: &str = id.borrow();
        assert_eq!(borrowed, "ai-ml");
    }

    #[test]
    fn test_group_id_is_transparent_in_json() {
        let id: GroupId = serde_json::from_str(r#""mern-stack""#).unwrap();
        assert_eq!(id.as_str(), "mern-stack");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""mern-stack""#);
    }

    #[test]
    fn test_group_short_name() {
        let group: Group = serde_json::from_str(
            r#"{"id":"ai-ml","name":"AI/ML Group","description":"d","banner":"b"}"#,
        )
        .unwrap();
        assert_eq!(group.short_name(), "AI/ML");
        assert!(group.tech_stack.is_empty());
        assert!(group.member_count.is_none());
    }

    #[test]
    fn test_status_parse_lenient() {
        assert_eq!(ProjectStatus::parse_lenient("Ongoing"), Some(ProjectStatus::Ongoing));
        assert_eq!(ProjectStatus::parse_lenient("ongoing"), Some(ProjectStatus::Ongoing));
        assert_eq!(ProjectStatus::parse_lenient("COMPLETED"), Some(ProjectStatus::Completed));
        assert_eq!(ProjectStatus::parse_lenient("Planning"), Some(ProjectStatus::Planning));
        assert_eq!(ProjectStatus::parse_lenient("archived"), None);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("completed".parse::<ProjectStatus>(), Ok(ProjectStatus::Completed));
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_project_normalizes_legacy_status() {
        let project: Project = serde_json::from_str(&project_json("ongoing")).unwrap();
        assert_eq!(project.status, ProjectStatus::Ongoing);
    }

    #[test]
    fn test_project_unknown_status_falls_back_to_planning() {
        crate::logging::init_test_logging();
        let project: Project = serde_json::from_str(&project_json("In Review")).unwrap();
        assert_eq!(project.status, ProjectStatus::Planning);
    }

    #[test]
    fn test_project_serializes_canonical_status() {
        let project: Project = serde_json::from_str(&project_json("completed")).unwrap();
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains(r#""status":"Completed""#));
        assert!(json.contains(r#""groupId":"ai-ml""#));
    }

    #[test]
    fn test_member_count_label() {
        let mut project: Project = serde_json::from_str(&project_json("Ongoing")).unwrap();
        assert_eq!(project.member_count_label(), "1 member");
        project.members.push("bo".to_string());
        assert_eq!(project.member_count_label(), "2 members");
    }

    #[test]
    fn test_member_initials() {
        let mut project: Project = serde_json::from_str(&project_json("Ongoing")).unwrap();
        project.members = vec![
            "isha".to_string(),
            "Rahul".to_string(),
            String::new(),
            "yash".to_string(),
        ];
        assert_eq!(project.member_initials(3), vec!["I", "R"]);
    }

    #[test]
    fn test_members_split_layout() {
        let members: Members = serde_json::from_str(
            r#"{"coreTeam":[{"id":"c1","name":"Alex","role":"President","linkedin":"l","photo":"p"}],
                "activeMembers":[]}"#,
        )
        .unwrap();
        assert_eq!(members.core_team.len(), 1);
        assert!(members.active_members.is_empty());
    }

    #[test]
    fn test_members_flat_layout() {
        let members: Members = serde_json::from_str(
            r#"[{"id":"m1","name":"Kunal","github":"https://github.com/k","photo":"p"}]"#,
        )
        .unwrap();
        assert!(members.core_team.is_empty());
        assert_eq!(members.active_members[0].name, "Kunal");
    }

    #[test]
    fn test_update_display_date() {
        let mut update = Update {
            id: "u1".to_string(),
            title: "t".to_string(),
            date: "2025-02-10".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(update.display_date(), "February 10, 2025");

        update.date = "Spring 2025".to_string();
        assert_eq!(update.display_date(), "Spring 2025");
    }
}
