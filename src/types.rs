use serde::Deserialize;

/// A single entry returned by the repository contents endpoint.
///
/// `download_url` is only present for plain files; it is `null` for
/// directories listed as entries and absent for some entry kinds
/// (submodules, symlinks).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub name: String,
    pub download_url: Option<String>,
}

/// Repository metadata, reduced to the field the docs site consumes.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RepoInfo {
    pub stargazers_count: u64,
}

/// A published release, reduced to its tag name.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Release {
    pub tag_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_entry_with_download_url() {
        let entry: ContentEntry = serde_json::from_str(
            r#"{
                "name": "intro.md",
                "path": "docs/intro.md",
                "download_url": "https://raw.githubusercontent.com/deepset-ai/haystack/main/docs/intro.md"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.name, "intro.md");
        assert_eq!(
            entry.download_url.as_deref(),
            Some("https://raw.githubusercontent.com/deepset-ai/haystack/main/docs/intro.md")
        );
    }

    #[test]
    fn test_content_entry_null_download_url() {
        let entry: ContentEntry =
            serde_json::from_str(r#"{"name": "docs", "download_url": null}"#).unwrap();
        assert_eq!(entry.download_url, None);
    }

    #[test]
    fn test_content_entry_missing_download_url() {
        let entry: ContentEntry = serde_json::from_str(r#"{"name": "vendored"}"#).unwrap();
        assert_eq!(entry.download_url, None);
    }

    #[test]
    fn test_repo_info() {
        let info: RepoInfo =
            serde_json::from_str(r#"{"full_name": "deepset-ai/haystack", "stargazers_count": 13219}"#)
                .unwrap();
        assert_eq!(info.stargazers_count, 13219);
    }

    #[test]
    fn test_release_tag_name() {
        let release: Release =
            serde_json::from_str(r#"{"tag_name": "v2.0.0", "prerelease": false}"#).unwrap();
        assert_eq!(release.tag_name, "v2.0.0");
    }
}
