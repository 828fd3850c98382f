use super::{EndpointSpec, ResolvedEndpoints};
use crate::fs_tools::check_file_with_exts;
use std::path::Path;

/// Look in `config_dir` for each requested endpoint and return the
/// resolved path of every one that exists on disk.
///
/// Absence is not an error: kinds with no matching file are left out
/// of the result. When the same kind appears more than once in
/// `specs`, the last occurrence wins.
pub fn resolve_endpoints(specs: &[EndpointSpec], config_dir: &Path) -> ResolvedEndpoints {
    let mut resolved = ResolvedEndpoints::new();

    for spec in specs {
        let kind = spec.kind();
        let base = config_dir.join(format!("gatsby-{kind}"));
        match check_file_with_exts(&base, spec.ext()) {
            Some(path) => {
                tracing::debug!("Resolved {} endpoint to {}", kind, path.display());
                resolved.insert(kind, path);
            }
            None => {
                tracing::trace!("No {} endpoint under {}", kind, config_dir.display());
            }
        }
    }

    resolved
}
