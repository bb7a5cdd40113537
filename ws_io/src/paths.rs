//! Resolution of the init control binaries.

use std::path::{Path, PathBuf};

use tracing::debug;
use ws_core::ToolPaths;

/// Candidate locations for each control binary, most preferred first.
#[derive(Debug, Clone)]
pub struct ToolCandidates {
    pub systemctl: Vec<PathBuf>,
    pub service: Vec<PathBuf>,
}

impl Default for ToolCandidates {
    fn default() -> Self {
        Self {
            systemctl: vec![
                PathBuf::from("/bin/systemctl"),
                PathBuf::from("/sbin/systemctl"),
            ],
            service: vec![
                PathBuf::from("/sbin/service"),
                PathBuf::from("/usr/sbin/service"),
            ],
        }
    }
}

impl ToolCandidates {
    /// Candidates rooted under `root` instead of `/`.
    pub fn under(root: &Path) -> Self {
        let rebase = |paths: Vec<PathBuf>| -> Vec<PathBuf> {
            paths
                .into_iter()
                .map(|p| root.join(p.strip_prefix("/").unwrap_or(&p)))
                .collect()
        };
        let defaults = Self::default();
        Self {
            systemctl: rebase(defaults.systemctl),
            service: rebase(defaults.service),
        }
    }

    /// Pick the first existing candidate for each tool. When none exists
    /// the last candidate is used; an empty list falls back to the bare
    /// program name.
    pub fn resolve(&self) -> ToolPaths {
        let fallback = ToolPaths::default();
        let tools = ToolPaths {
            systemctl: pick(&self.systemctl, fallback.systemctl),
            service: pick(&self.service, fallback.service),
        };
        debug!(
            systemctl = %tools.systemctl.display(),
            service = %tools.service.display(),
            "resolved init control binaries"
        );
        tools
    }
}

fn pick(candidates: &[PathBuf], bare: PathBuf) -> PathBuf {
    first_existing(candidates)
        .or_else(|| candidates.last().cloned())
        .unwrap_or(bare)
}

/// First path in `candidates` that exists.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn test_prefers_first_existing_candidate() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("bin/systemctl"));
        touch(&tmp.path().join("sbin/systemctl"));

        let tools = ToolCandidates::under(tmp.path()).resolve();
        assert_eq!(tools.systemctl, tmp.path().join("bin/systemctl"));
    }

    #[test]
    fn test_falls_back_to_second_candidate() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("usr/sbin/service"));

        let tools = ToolCandidates::under(tmp.path()).resolve();
        assert_eq!(tools.service, tmp.path().join("usr/sbin/service"));
    }

    #[test]
    fn test_second_candidate_when_nothing_exists() {
        let tmp = TempDir::new().unwrap();
        let tools = ToolCandidates::under(tmp.path()).resolve();
        assert_eq!(tools.systemctl, tmp.path().join("sbin/systemctl"));
        assert_eq!(tools.service, tmp.path().join("usr/sbin/service"));
    }

    #[test]
    fn test_bare_names_without_candidates() {
        let candidates = ToolCandidates {
            systemctl: Vec::new(),
            service: Vec::new(),
        };
        assert_eq!(candidates.resolve(), ToolPaths::default());
    }

    #[test]
    fn test_first_existing_empty() {
        assert_eq!(first_existing(&[]), None);
    }
}
