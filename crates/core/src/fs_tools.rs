use crate::endpoint::Ext;
use std::path::{Path, PathBuf};

/// Every extension an endpoint file may carry, in probe order. `.js`
/// wins over `.ts` when both are present, matching Node's own
/// resolution precedence.
pub const ALL_EXT: &[Ext] = &[Ext::Js, Ext::Jsx, Ext::Ts, Ext::Tsx];

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Probe `base.<ext>` for each extension in order, returning the first
/// candidate that exists.
pub fn check_file_with_exts(base: &Path, exts: &[Ext]) -> Option<PathBuf> {
    for ext in exts {
        let candidate = base.with_extension(ext.as_str());
        if file_exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_respects_extension_order() {
        let temp = tempfile::TempDir::new().unwrap();
        let base = temp.path().join("gatsby-config");
        std::fs::write(temp.path().join("gatsby-config.ts"), "").unwrap();
        std::fs::write(temp.path().join("gatsby-config.tsx"), "").unwrap();

        let found = check_file_with_exts(&base, ALL_EXT).unwrap();
        assert_eq!(found, temp.path().join("gatsby-config.ts"));
    }

    #[test]
    fn probe_misses_when_nothing_matches() {
        let temp = tempfile::TempDir::new().unwrap();
        let base = temp.path().join("gatsby-config");
        assert!(check_file_with_exts(&base, ALL_EXT).is_none());
    }
}
