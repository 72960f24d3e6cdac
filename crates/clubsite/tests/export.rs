use std::fs;
use std::path::PathBuf;

use clubsite::config::SiteConfig;
use clubsite::export::export_site;
use clubsite::Catalog;

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn test_export_sample_site() {
    let catalog = Catalog::from_dir(sample_data()).expect("load sample data");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("public");

    let summary = export_site(&SiteConfig::default(), &catalog, &out, true).expect("export");

    // Seven fixed pages plus a group page and a filtered projects page per group
    assert_eq!(summary.files.len(), 7 + 2 * catalog.groups().len());
    for relative in [
        "index.html",
        "groups/index.html",
        "groups/ai-ml/index.html",
        "groups/data-science/index.html",
        "groups/java-microservices/index.html",
        "groups/mern-stack/index.html",
        "projects/index.html",
        "projects/ai-ml/index.html",
        "projects/mern-stack/index.html",
        "members/index.html",
        "resources/index.html",
        "join/index.html",
        "404.html",
    ] {
        assert!(out.join(relative).is_file(), "missing {relative}");
    }

    let projects = fs::read_to_string(out.join("projects/index.html")).expect("read projects");
    assert!(projects.contains("Showing 5 of 5 projects"));
    assert!(!projects.contains("/projects?"));

    let mern = fs::read_to_string(out.join("projects/mern-stack/index.html")).expect("read mern");
    assert!(mern.contains("Club Shop Cart"));
    assert!(!mern.contains("Campus Chat Bot"));
    assert!(mern.contains("Showing 1 of 5 projects"));

    let home = fs::read_to_string(out.join("index.html")).expect("read home");
    assert!(home.contains("Latest Updates"));
}

#[test]
fn test_sample_fixtures_are_consistent() {
    let catalog = Catalog::from_dir(sample_data()).expect("load sample data");
    let report = catalog.audit();
    assert!(report.is_clean(), "{report:?}");
}
