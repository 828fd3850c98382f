use super::{ConfigType, ResolvedEndpoints};
use crate::error::Result;
use std::fs;
use std::path::Path;
use tsbridge_template::{TemplateSpec, TemplateValue, TransformArgs, transform_code_to_template};

/// The kinds the materializer acts on, in write order.
pub const BROWSER_SSR: [ConfigType; 2] = [ConfigType::Browser, ConfigType::Ssr];

/// Placeholder token in the shipped dist modules that receives the
/// resolved endpoint path.
pub const ENDPOINT_PATH_TOKEN: &str = "__TS_CONFIG_ENDPOINT_PATH";

/// What a cache module contains when no user endpoint was resolved.
pub const EMPTY_MODULE: &str = "module.exports = {}";

/// Write one cache module per kind in [`BROWSER_SSR`]: a proxy that
/// re-exports the user's endpoint when one was resolved, an empty stub
/// otherwise.
///
/// Proxies are produced by templating `dist_dir/gatsby-<kind>.js` with
/// the resolved path bound to [`ENDPOINT_PATH_TOKEN`] as a string
/// literal. A transform or write failure propagates immediately;
/// modules already written for earlier kinds stay in place.
pub fn setup_endpoints(
    resolved: &ResolvedEndpoints,
    dist_dir: &Path,
    cache_dir: &Path,
) -> Result<()> {
    for kind in BROWSER_SSR {
        let endpoint_file = format!("gatsby-{kind}.js");
        let src_file = dist_dir.join(&endpoint_file);
        let target_file = cache_dir.join(&endpoint_file);

        match resolved.get(&kind) {
            Some(user_file) => {
                tracing::debug!(
                    "Proxying {} endpoint to {}",
                    kind,
                    user_file.display()
                );
                let template_spec = TemplateSpec::new().bind(
                    ENDPOINT_PATH_TOKEN,
                    TemplateValue::StringLiteral(user_file.display().to_string()),
                );
                transform_code_to_template(TransformArgs {
                    src_file: &src_file,
                    target_file: &target_file,
                    template_spec: &template_spec,
                })?;
            }
            None => {
                tracing::debug!("No {} endpoint resolved, writing stub", kind);
                fs::write(&target_file, EMPTY_MODULE)?;
            }
        }
    }

    Ok(())
}
