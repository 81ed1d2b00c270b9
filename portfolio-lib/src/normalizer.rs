use crate::image::resolve_image;
use crate::object_model::{Project, RawRepository};

const PRIORITY_ORDER: [(&str, u32); 3] = [
    ("ZK-Anti-Cheat", 1),
    ("vendor-data-analysis", 2),
    ("Kindle-web-browser", 3),
];

const NO_DESCRIPTION: &str = "No description provided";

pub fn priority_of(name: &str) -> Option<u32> {
    PRIORITY_ORDER
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, priority)| *priority)
}

/// Turns fetched repositories into project cards.
///
/// Repositories without a description are dropped. Pinned repositories come
/// first in pin order, everything else follows in input order.
pub fn normalize(repos: &[RawRepository]) -> Vec<Project> {
    let mut pinned = Vec::new();
    let mut rest = Vec::new();

    for repo in repos
        .iter()
        .filter(|r| r.description.as_deref().is_some_and(|d| !d.is_empty()))
    {
        let project = to_project(repo);
        match priority_of(&repo.name) {
            Some(priority) => pinned.push((priority, project)),
            None => rest.push(project),
        }
    }

    pinned.sort_by_key(|(priority, _)| *priority);
    pinned
        .into_iter()
        .map(|(_, project)| project)
        .chain(rest)
        .collect()
}

fn to_project(repo: &RawRepository) -> Project {
    // Unreachable while `normalize` filters on description; kept so that
    // dropping the filter still yields a non-empty description.
    let description = match repo.description.as_deref() {
        Some(d) if !d.is_empty() => String::from(d),
        _ => String::from(NO_DESCRIPTION),
    };

    let technologies = repo
        .language
        .iter()
        .filter(|l| !l.is_empty())
        .chain(repo.topics.iter())
        .cloned()
        .collect();

    Project {
        id: repo.id,
        title: repo.name.clone(),
        description,
        image: resolve_image(&repo.name),
        technologies,
        github: repo.html_url.clone(),
        demo: None,
    }
}
