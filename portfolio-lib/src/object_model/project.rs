use serde::{Deserialize, Serialize};

/// Display-ready project card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,

    /// Local asset path or external image-service URL, never empty.
    pub image: String,

    pub technologies: Vec<String>,
    pub github: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub demo: Option<String>,
}

impl Project {
    pub fn demo_link(&self) -> &str {
        self.demo.as_deref().unwrap_or(&self.github)
    }

    pub fn has_demo(&self) -> bool {
        self.demo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Project;

    fn project(demo: Option<&str>) -> Project {
        Project {
            id: 7,
            title: String::from("tool"),
            description: String::from("A tool"),
            image: String::from("/projects/tool.jpg"),
            technologies: vec![String::from("Rust")],
            github: String::from("https://github.com/someone/tool"),
            demo: demo.map(String::from),
        }
    }

    #[test]
    fn demo_link_falls_back_to_source() {
        let p = project(None);
        assert!(!p.has_demo());
        assert_eq!(p.demo_link(), "https://github.com/someone/tool");
    }

    #[test]
    fn demo_link_prefers_explicit_demo() {
        let p = project(Some("https://tool.example.com"));
        assert!(p.has_demo());
        assert_eq!(p.demo_link(), "https://tool.example.com");
    }
}
