//! Static export.
//!
//! Writes every page the server would answer into a directory tree that any
//! static file host can serve: `/groups` becomes `groups/index.html` and so on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::content::Catalog;
use crate::error::{Error, Result};
use crate::filter::{GroupFilter, ProjectQuery};
use crate::join::JoinForm;
use crate::model::GroupId;
use crate::render::Renderer;

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    /// Written files, relative to `output_dir`, in write order.
    pub files: Vec<PathBuf>,
}

/// A group id as a single directory name.
///
/// # Errors
///
/// Returns [`Error::UnsafePathSegment`] for ids that are empty, `.` or `..`,
/// or contain a path separator.
pub fn path_segment(id: &GroupId) -> Result<&str> {
    let id = id.as_str();
    let unsafe_segment = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if unsafe_segment {
        return Err(Error::UnsafePathSegment {
            kind: "group",
            id: id.to_string(),
        });
    }
    Ok(id)
}

/// Render every route into `(relative path, html)` pairs.
///
/// The projects page is rendered once unfiltered and once per group under
/// `projects/<group>/`, which is where a renderer built
/// [`with_static_links`](Renderer::with_static_links) points its filter.
///
/// # Errors
///
/// Returns an error if a group id is not a safe directory name or a group
/// page fails to render.
pub fn pages(renderer: &Renderer<'_>) -> Result<Vec<(PathBuf, String)>> {
    let groups = renderer.catalog().groups();
    let mut pages = vec![
        (PathBuf::from("index.html"), renderer.home()),
        (PathBuf::from("groups/index.html"), renderer.groups()),
    ];

    for group in groups {
        pages.push((
            Path::new("groups").join(path_segment(&group.id)?).join("index.html"),
            renderer.group(group.id.as_str())?,
        ));
    }

    pages.push((
        PathBuf::from("projects/index.html"),
        renderer.projects(&ProjectQuery::default()),
    ));
    for group in groups {
        let query = ProjectQuery::new(GroupFilter::Group(group.id.clone()), "");
        pages.push((
            Path::new("projects").join(path_segment(&group.id)?).join("index.html"),
            renderer.projects(&query),
        ));
    }

    pages.extend([
        (PathBuf::from("members/index.html"), renderer.members()),
        (PathBuf::from("resources/index.html"), renderer.resources()),
        (
            PathBuf::from("join/index.html"),
            renderer.join(&JoinForm::default(), None),
        ),
        (PathBuf::from("404.html"), renderer.not_found()),
    ]);

    Ok(pages)
}

/// Export the whole site into `output_dir`.
///
/// With `clean`, an existing `output_dir` is removed first; otherwise files
/// are overwritten in place and unrelated files are left alone.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or a file cannot be written.
pub fn export_site(
    site: &SiteConfig,
    catalog: &Catalog,
    output_dir: &Path,
    clean: bool,
) -> Result<ExportSummary> {
    if clean && output_dir.exists() {
        debug!(path = %output_dir.display(), "Removing previous export");
        fs::remove_dir_all(output_dir)?;
    }

    let renderer = Renderer::new(site, catalog).with_static_links();
    let mut files = Vec::new();
    for (relative, html) in pages(&renderer)? {
        let path = output_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, html)?;
        debug!(path = %path.display(), "Wrote page");
        files.push(relative);
    }

    info!(
        output_dir = %output_dir.display(),
        pages = files.len(),
        "Export complete"
    );
    Ok(ExportSummary {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}
