use std::fmt;

/// Which revision of the docs tree a lookup targets.
///
/// The site historically passed the string `"latest"` (or nothing at all) to
/// mean the unversioned tree; that sentinel is handled only by the
/// conversions below. `Specific` holds a versioned subdirectory name such as
/// `"1.0"` and is inserted into the path verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocsVersion {
    #[default]
    Latest,
    Specific(String),
}

impl From<&str> for DocsVersion {
    fn from(s: &str) -> Self {
        match s {
            "" | "latest" => DocsVersion::Latest,
            v => DocsVersion::Specific(v.to_string()),
        }
    }
}

impl From<Option<&str>> for DocsVersion {
    fn from(v: Option<&str>) -> Self {
        v.map_or(DocsVersion::Latest, DocsVersion::from)
    }
}

impl fmt::Display for DocsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocsVersion::Latest => write!(f, "latest"),
            DocsVersion::Specific(v) => write!(f, "{}", v),
        }
    }
}

/// Builds the in-repository path of a documentation file.
///
/// The layout is `docs[/<version>]<repo_path><filename>`. No separators are
/// inserted beyond the version's own: `repo_path` must carry its leading and
/// trailing slashes itself (or be empty), exactly as the site passes it.
pub fn docs_path(filename: &str, repo_path: &str, version: &DocsVersion) -> String {
    match version {
        DocsVersion::Latest => format!("docs{}{}", repo_path, filename),
        DocsVersion::Specific(v) => format!("docs/{}{}{}", v, repo_path, filename),
    }
}
