//! Changelog lookup for a version.
//!
//! A changelog is a markdown file whose level-2 headings name versions:
//!
//! ```text
//! ## 1.0.1
//!
//! * Fixed the contact search.
//!
//! ## v1.0.0 - 2024-03-01
//!
//! * Initial release.
//! ```
//!
//! Keep a Changelog style bracketed headings (`## [1.0.0] - 2024-03-01`) work too.
//!
//! ```text
//! ## [0.9.0]
//!
//! * Initial release.
//! ```

use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Changelog file names, in lookup order
pub const CHANGELOG_FILES: [&str; 3] = ["CHANGELOG.md", "CHANGELOG", "CHANGELOG.txt"];

static VERSION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##[ \t]+\[?v?(?P<version>[^\s\]]+)\]?.*$").expect("version heading regex is valid")
});

/// First changelog file present in the project directory
pub fn find_changelog(project_dir: &Path) -> Option<PathBuf> {
    CHANGELOG_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.is_file())
}

/// Changelog text for `version`, or `None` when there is no usable entry
pub fn version_changelog(project_dir: &Path, version: &str) -> Result<Option<String>> {
    let Some(path) = find_changelog(project_dir) else {
        log::debug!("No changelog file in {}", project_dir.display());
        return Ok(None);
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8, replacing invalid bytes",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let entry = extract_entry(&content, version);
    log::debug!(
        "Changelog entry for {} in {}: {}",
        version,
        path.display(),
        if entry.is_some() { "found" } else { "missing" }
    );
    Ok(entry)
}

/// Body of the section whose heading names `version`
pub fn extract_entry(content: &str, version: &str) -> Option<String> {
    let wanted = version.trim().trim_start_matches('v');
    let headings: Vec<_> = VERSION_HEADING_RE.captures_iter(content).collect();

    for (index, caps) in headings.iter().enumerate() {
        let (Some(heading), Some(found)) = (caps.get(0), caps.name("version")) else {
            continue;
        };
        if !same_version(found.as_str(), wanted) {
            continue;
        }

        let end = headings
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |next| next.start());
        let body = content[heading.end()..end].trim();

        return (!body.is_empty()).then(|| body.to_string());
    }

    None
}

fn same_version(found: &str, wanted: &str) -> bool {
    if found == wanted {
        return true;
    }
    match (semver::Version::parse(found), semver::Version::parse(wanted)) {
        (Ok(found), Ok(wanted)) => found == wanted,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CHANGELOG: &str = "# Changelog\n\n## 1.0.1\n\n* Fixed the contact search.\n* Faster polling.\n\n## v1.0.0 - 2024-03-01\n\n* Initial release.\n\n## 0.9.0\n\n";

    #[test]
    fn test_extract_middle_entry() {
        assert_eq!(
            extract_entry(CHANGELOG, "1.0.1").as_deref(),
            Some("* Fixed the contact search.\n* Faster polling.")
        );
    }

    #[test]
    fn test_extract_prefixed_heading_with_date() {
        assert_eq!(
            extract_entry(CHANGELOG, "1.0.0").as_deref(),
            Some("* Initial release.")
        );
    }

    #[test]
    fn test_empty_and_missing_entries() {
        assert_eq!(extract_entry(CHANGELOG, "0.9.0"), None);
        assert_eq!(extract_entry(CHANGELOG, "2.0.0"), None);
        assert_eq!(extract_entry(CHANGELOG, "1.0"), None);
    }

    #[test]
    fn test_extract_bracketed_heading() {
        let content = "## [Unreleased]\n\n* wip\n\n## [2.1.0] - 2024-05-02\n\n### Added\n\n* Webhooks\n";
        assert_eq!(
            extract_entry(content, "2.1.0").as_deref(),
            Some("### Added\n\n* Webhooks")
        );
    }

    #[test]
    fn test_version_changelog_without_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert_eq!(version_changelog(temp_dir.path(), "1.0.0").unwrap(), None);
    }

    #[test]
    fn test_version_changelog_prefers_markdown() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("CHANGELOG"), "## 1.0.0\n\nplain\n").unwrap();
        std::fs::write(temp_dir.path().join("CHANGELOG.md"), "## 1.0.0\n\nmarkdown\n").unwrap();
        assert_eq!(
            version_changelog(temp_dir.path(), "1.0.0").unwrap().as_deref(),
            Some("markdown")
        );
    }

    #[test]
    fn test_version_changelog_tolerates_invalid_utf8() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            temp_dir.path().join("CHANGELOG.md"),
            b"## 1.0.0\n\n* caf\xe9 fix\n",
        )
        .unwrap();
        assert_eq!(
            version_changelog(temp_dir.path(), "1.0.0").unwrap().as_deref(),
            Some("* caf\u{fffd} fix")
        );
    }
}
