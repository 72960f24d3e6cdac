//! Read-only access to site content.
//!
//! Views never read fixtures directly. A [`ContentSource`] is injected at
//! startup, drained once into a [`Catalog`], and the catalog is shared
//! read-only from then on. The catalog owns the group lookup table used to
//! resolve every [`GroupId`] soft reference.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Group, GroupId, Members, Mentor, Project, Resource, Roadmap, RoadmapStep, Update};

/// A read-only supplier of site content.
///
/// Implementations are queried once, when the [`Catalog`] is built.
pub trait ContentSource: Send + Sync {
    /// All groups, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the groups cannot be read.
    fn groups(&self) -> Result<Vec<Group>>;

    /// All mentors.
    ///
    /// # Errors
    ///
    /// Returns an error if the mentors cannot be read.
    fn mentors(&self) -> Result<Vec<Mentor>>;

    /// All projects, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the projects cannot be read.
    fn projects(&self) -> Result<Vec<Project>>;

    /// All resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the resources cannot be read.
    fn resources(&self) -> Result<Vec<Resource>>;

    /// One roadmap per group.
    ///
    /// # Errors
    ///
    /// Returns an error if the roadmaps cannot be read.
    fn roadmaps(&self) -> Result<Vec<Roadmap>>;

    /// Core team and active members.
    ///
    /// # Errors
    ///
    /// Returns an error if the members cannot be read.
    fn members(&self) -> Result<Members>;

    /// News items, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the updates cannot be read.
    fn updates(&self) -> Result<Vec<Update>>;
}

/// Content read from `<kind>.json` files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFixtures {
    dir: PathBuf,
}

impl JsonFixtures {
    /// Read fixtures from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The fixture directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, kind: &str) -> PathBuf {
        self.dir.join(format!("{kind}.json"))
    }

    /// Load a fixture that must exist.
    fn required<T: DeserializeOwned>(&self, kind: &str) -> Result<T> {
        let path = self.path(kind);
        let text = fs::read_to_string(&path).map_err(|source| Error::FixtureRead {
            path: path.clone(),
            source,
        })?;
        debug!("Read fixture {}", path.display());
        serde_json::from_str(&text).map_err(|source| Error::FixtureParse { path, source })
    }

    /// Load a fixture, treating a missing file as empty.
    fn optional<T: DeserializeOwned + Default>(&self, kind: &str) -> Result<T> {
        match self.required(kind) {
            Err(Error::FixtureRead { path, source }) if source.kind() == ErrorKind::NotFound => {
                debug!("Fixture {} not present, using empty set", path.display());
                Ok(T::default())
            }
            other => other,
        }
    }
}

impl ContentSource for JsonFixtures {
    fn groups(&self) -> Result<Vec<Group>> {
        self.required("groups")
    }

    fn mentors(&self) -> Result<Vec<Mentor>> {
        self.optional("mentors")
    }

    fn projects(&self) -> Result<Vec<Project>> {
        self.required("projects")
    }

    fn resources(&self) -> Result<Vec<Resource>> {
        self.optional("resources")
    }

    fn roadmaps(&self) -> Result<Vec<Roadmap>> {
        self.optional("roadmaps")
    }

    fn members(&self) -> Result<Members> {
        self.optional("members")
    }

    fn updates(&self) -> Result<Vec<Update>> {
        self.optional("updates")
    }
}

/// Content held in memory, for tests and programmatic sites.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    pub groups: Vec<Group>,
    pub mentors: Vec<Mentor>,
    pub projects: Vec<Project>,
    pub resources: Vec<Resource>,
    pub roadmaps: Vec<Roadmap>,
    pub members: Members,
    pub updates: Vec<Update>,
}

impl ContentSource for StaticContent {
    fn groups(&self) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }

    fn mentors(&self) -> Result<Vec<Mentor>> {
        Ok(self.mentors.clone())
    }

    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.clone())
    }

    fn roadmaps(&self) -> Result<Vec<Roadmap>> {
        Ok(self.roadmaps.clone())
    }

    fn members(&self) -> Result<Members> {
        Ok(self.members.clone())
    }

    fn updates(&self) -> Result<Vec<Update>> {
        Ok(self.updates.clone())
    }
}

/// Everything a group's page shows.
#[derive(Debug, Clone)]
pub struct GroupPage<'a> {
    pub group: &'a Group,
    pub mentors: Vec<&'a Mentor>,
    pub roadmap: &'a [RoadmapStep],
    pub resources: Vec<&'a Resource>,
    pub projects: Vec<&'a Project>,
}

/// A record whose group reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    /// Record kind ("mentor", "project", "resource" or "roadmap").
    pub kind: &'static str,
    /// Id of the record holding the reference.
    pub id: String,
    /// The unresolved group id.
    pub group_id: GroupId,
}

/// An id used by more than one record of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateId {
    pub kind: &'static str,
    pub id: String,
}

/// Findings of [`Catalog::audit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub dangling: Vec<DanglingRef>,
    pub duplicates: Vec<DuplicateId>,
}

impl AuditReport {
    /// True when nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicates.is_empty()
    }
}

/// Immutable, indexed view of all site content.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<Group>,
    group_index: HashMap<GroupId, usize>,
    mentors: Vec<Mentor>,
    projects: Vec<Project>,
    resources: Vec<Resource>,
    roadmaps: Vec<Roadmap>,
    members: Members,
    updates: Vec<Update>,
}

impl Catalog {
    /// Drain a content source and build the group lookup table.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the source.
    pub fn load(source: &dyn ContentSource) -> Result<Self> {
        let groups = source.groups()?;
        // First occurrence wins for duplicate ids
        let mut group_index = HashMap::with_capacity(groups.len());
        for (i, group) in groups.iter().enumerate() {
            group_index.entry(group.id.clone()).or_insert(i);
        }

        let catalog = Self {
            groups,
            group_index,
            mentors: source.mentors()?,
            projects: source.projects()?,
            resources: source.resources()?,
            roadmaps: source.roadmaps()?,
            members: source.members()?,
            updates: source.updates()?,
        };

        info!(
            groups = catalog.groups.len(),
            projects = catalog.projects.len(),
            mentors = catalog.mentors.len(),
            resources = catalog.resources.len(),
            members = catalog.members.core_team.len() + catalog.members.active_members.len(),
            updates = catalog.updates.len(),
            "Content loaded"
        );
        Ok(catalog)
    }

    /// Load the JSON fixtures in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required fixture is missing or any fixture is malformed.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&JsonFixtures::new(dir))
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn members(&self) -> &Members {
        &self.members
    }

    /// Resolve a group reference.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.group_index.get(id).map(|&i| &self.groups[i])
    }

    /// Name of the referenced group, if it exists.
    #[must_use]
    pub fn group_name(&self, id: &GroupId) -> Option<&str> {
        self.group(id.as_str()).map(|g| g.name.as_str())
    }

    #[must_use]
    pub fn mentors_for(&self, id: &GroupId) -> Vec<&Mentor> {
        self.mentors.iter().filter(|m| &m.group_id == id).collect()
    }

    #[must_use]
    pub fn resources_for(&self, id: &GroupId) -> Vec<&Resource> {
        self.resources.iter().filter(|r| &r.group_id == id).collect()
    }

    #[must_use]
    pub fn projects_for(&self, id: &GroupId) -> Vec<&Project> {
        self.projects.iter().filter(|p| &p.group_id == id).collect()
    }

    /// Roadmap steps of a group; empty when it has none.
    #[must_use]
    pub fn roadmap_for(&self, id: &GroupId) -> &[RoadmapStep] {
        self.roadmaps
            .iter()
            .find(|r| &r.group_id == id)
            .map(|r| r.steps.as_slice())
            .unwrap_or_default()
    }

    /// The first `n` updates in fixture order.
    #[must_use]
    pub fn latest_updates(&self, n: usize) -> &[Update] {
        &self.updates[..n.min(self.updates.len())]
    }

    /// Everything shown on `/groups/{slug}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no group has this slug.
    pub fn group_page(&self, slug: &str) -> Result<GroupPage<'_>> {
        let group = self
            .group(slug)
            .ok_or_else(|| Error::not_found("group", slug))?;
        let id = &group.id;

        Ok(GroupPage {
            group,
            mentors: self.mentors_for(id),
            roadmap: self.roadmap_for(id),
            resources: self.resources_for(id),
            projects: self.projects_for(id),
        })
    }

    /// Find group references that do not resolve and ids used twice.
    #[must_use]
    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport::default();

        let refs = self
            .mentors
            .iter()
            .map(|m| ("mentor", m.id.as_str(), &m.group_id))
            .chain(self.projects.iter().map(|p| ("project", p.id.as_str(), &p.group_id)))
            .chain(self.resources.iter().map(|r| ("resource", r.id.as_str(), &r.group_id)))
            .chain(self.roadmaps.iter().map(|r| ("roadmap", r.group_id.as_str(), &r.group_id)));

        for (kind, id, group_id) in refs {
            if self.group(group_id.as_str()).is_none() {
                report.dangling.push(DanglingRef {
                    kind,
                    id: id.to_string(),
                    group_id: group_id.clone(),
                });
            }
        }

        collect_duplicates(&mut report, "group", self.groups.iter().map(|g| g.id.as_str()));
        collect_duplicates(&mut report, "mentor", self.mentors.iter().map(|m| m.id.as_str()));
        collect_duplicates(&mut report, "project", self.projects.iter().map(|p| p.id.as_str()));
        collect_duplicates(&mut report, "resource", self.resources.iter().map(|r| r.id.as_str()));
        collect_duplicates(&mut report, "update", self.updates.iter().map(|u| u.id.as_str()));

        report
    }
}

fn collect_duplicates<'a>(
    report: &mut AuditReport,
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            report.duplicates.push(DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}
