use crate::object_model::Project;
use std::time::Duration;

/// Delay between slides when the featured projects are shown as a carousel.
pub const SLIDER_AUTOPLAY: Duration = Duration::from_millis(5000);

const FEATURED_COUNT: usize = 3;

struct CuratedEntry {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    technologies: &'static [&'static str],
    github: &'static str,
}

const CURATED: [CuratedEntry; 4] = [
    CuratedEntry {
        title: "ZK-Anti-Cheat",
        description: "The world's first FPS with non-invasive ZK anti-cheat on Starknet. Replaces kernel-level spyware with on-chain physics verification to validate 'Proof of Shot' logic.",
        image: "/projects/blockchain.jpg",
        technologies: &["Starknet", "Cairo", "Blockchain"],
        github: "https://github.com/invictus596/ZK-Anti-Cheat",
    },
    CuratedEntry {
        title: "Vendor-Data-Analysis",
        description: "A comprehensive data analysis project utilizing Jupyter Notebooks to evaluate vendor performance and visualize supply chain trends.",
        image: "/projects/dataanalysis.jpg",
        technologies: &["Jupyter Notebook", "Python", "Data Science"],
        github: "https://github.com/invictus596/vendor-data-analysis",
    },
    CuratedEntry {
        title: "Kindle-Browser-Monitor",
        description: "A Python utility to render real-time system monitoring or dashboards optimized for Kindle e-ink displays.",
        image: "/projects/kindle.jpg",
        technologies: &["Python", "Automation", "IoT"],
        github: "https://github.com/Invictus596/Kindle-Browser-Monitor",
    },
    CuratedEntry {
        title: "Minimal-QR-Code-Generator-Scanner",
        description: "A lightweight, dual-purpose web tool built with TypeScript for generating and scanning QR codes instantly.",
        image: "/projects/qrcode.jpg",
        technologies: &["TypeScript", "Web Tools"],
        github: "https://github.com/invictus596/Minimal-QR-Code-Generator-Scanner",
    },
];

/// Hand-curated projects shared by every view that shows them.
#[derive(Clone, Debug)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn curated() -> Self {
        let projects = CURATED
            .iter()
            .zip(1..)
            .map(|(entry, id)| Project {
                id,
                title: String::from(entry.title),
                description: String::from(entry.description),
                image: String::from(entry.image),
                technologies: entry.technologies.iter().map(|t| t.to_string()).collect(),
                github: String::from(entry.github),
                demo: None,
            })
            .collect();
        Self { projects }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Subset shown in the home page slider.
    pub fn featured(&self) -> &[Project] {
        &self.projects[..FEATURED_COUNT.min(self.projects.len())]
    }
}
