const IMAGE_SERVICE: &str = "https://source.unsplash.com";

const LOCAL_IMAGES: [(&str, &str); 3] = [
    ("ZK-Anti-Cheat", "/projects/blockchain.jpg"),
    ("vendor-data-analysis", "/projects/dataanalysis.jpg"),
    ("Kindle-web-browser", "/projects/kindle.jpg"),
];

const IMAGE_KEYWORDS: [&str; 21] = [
    "technology",
    "code",
    "programming",
    "computer",
    "laptop",
    "digital",
    "innovation",
    "development",
    "software",
    "data",
    "ai",
    "machine-learning",
    "web-design",
    "creative",
    "modern",
    "blockchain",
    "cryptocurrency",
    "analytics",
    "database",
    "e-reader",
    "tablet",
];

/// Multiplier-31 string hash over the name's code points, wrapping at every
/// step as 32-bit signed arithmetic.
pub fn keyword_hash(name: &str) -> i32 {
    name.chars().fold(0i32, |acc, c| {
        (c as u32 as i32).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    })
}

/// Resolves the card image for a repository name.
///
/// Curated names map to bundled assets. Everything else gets an image-service
/// URL whose keyword and signature are derived from [`keyword_hash`], so a
/// given name always yields the same URI.
pub fn resolve_image(name: &str) -> String {
    if let Some((_, path)) = LOCAL_IMAGES.iter().find(|(n, _)| *n == name) {
        return String::from(*path);
    }

    let signature = keyword_hash(name).unsigned_abs();
    let keyword = IMAGE_KEYWORDS[signature as usize % IMAGE_KEYWORDS.len()];
    format!("{IMAGE_SERVICE}/800x600/?{keyword}&sig={signature}")
}

#[cfg(test)]
mod tests {
    use super::{keyword_hash, resolve_image};

    #[test]
    fn hash_of_empty_name_is_zero() {
        assert_eq!(keyword_hash(""), 0);
    }

    #[test]
    fn hash_matches_multiplier_31() {
        // 'a' = 97, then 98 + 97 * 31, then 99 + 3105 * 31
        assert_eq!(keyword_hash("a"), 97);
        assert_eq!(keyword_hash("ab"), 3105);
        assert_eq!(keyword_hash("abc"), 96354);
    }

    #[test]
    fn hash_wraps_on_long_names() {
        let name = "a-rather-long-repository-name-that-overflows-32-bits";
        let expected = name
            .chars()
            .fold(0i64, |acc, c| (c as i64 + acc * 31) as i32 as i64);
        assert_eq!(keyword_hash(name) as i64, expected);
    }

    #[test]
    fn curated_names_use_local_assets() {
        assert_eq!(resolve_image("ZK-Anti-Cheat"), "/projects/blockchain.jpg");
        assert_eq!(
            resolve_image("vendor-data-analysis"),
            "/projects/dataanalysis.jpg"
        );
        assert_eq!(resolve_image("Kindle-web-browser"), "/projects/kindle.jpg");
    }

    #[test]
    fn curated_match_is_case_sensitive() {
        assert!(resolve_image("zk-anti-cheat").starts_with("https://"));
    }

    #[test]
    fn other_names_use_image_service() {
        // 96354 % 21 == 6 -> "innovation"
        assert_eq!(
            resolve_image("abc"),
            "https://source.unsplash.com/800x600/?innovation&sig=96354"
        );
        assert_eq!(
            resolve_image(""),
            "https://source.unsplash.com/800x600/?technology&sig=0"
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        for name in ["dotfiles", "portfolio", "a-rather-long-repository-name"] {
            let first = resolve_image(name);
            assert!(!first.is_empty());
            assert_eq!(first, resolve_image(name));
        }
    }
}
