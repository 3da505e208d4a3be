//! The `init` command: resolve and write a backend configuration.

use console::style;
use tracing::debug;

use crate::artifact::ArtifactFetcher;
use crate::backend::{BackendCatalog, TemplateStore};
use crate::cli::args::InitArgs;
use crate::defaults;
use crate::error::Result;
use crate::resolver::{ArtifactRequest, ConfigResolver, InitRequest};
use crate::ui;

pub fn run(args: &InitArgs) -> Result<()> {
    let catalog = BackendCatalog::load()?;
    let store = TemplateStore::load(&catalog)?;

    let platform = match &args.platform {
        Some(platform) => platform.clone(),
        None => ui::prompts::select_backend(&catalog, args.non_interactive)?,
    };

    let request = build_request(args, platform);
    debug!("config destination: {}", request.conf_path.display());

    let fetcher = ArtifactFetcher::new();
    let resolver = ConfigResolver::new(&catalog, &store, &fetcher);

    let resolved = resolver.resolve(&request)?;
    resolved.write(&request.conf_path)?;

    println!(
        "{} Wrote {} config to {}",
        style("✓").green(),
        resolved.backend(),
        request.conf_path.display()
    );

    let placeholders = resolved.placeholders();
    if !placeholders.is_empty() {
        println!(
            "  Fill in before running workflows: {}",
            style(placeholders.join(", ")).yellow()
        );
    }

    Ok(())
}

/// Fill CLI gaps with the pinned defaults. The engine JAR is always
/// resolved before the tool JAR.
fn build_request(args: &InitArgs, platform: String) -> InitRequest {
    let conf_path = args
        .conf
        .as_deref()
        .map(defaults::expand_tilde)
        .unwrap_or_else(defaults::default_conf_path);

    let cromwell = ArtifactRequest::new(
        defaults::CROMWELL_KEY,
        args.cromwell_jar
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_CROMWELL_JAR.to_string()),
        args.cromwell_jar_dir
            .as_deref()
            .map(defaults::expand_tilde)
            .unwrap_or_else(defaults::cromwell_jar_dir),
    );

    let womtool = ArtifactRequest::new(
        defaults::WOMTOOL_KEY,
        args.womtool_jar
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_WOMTOOL_JAR.to_string()),
        args.womtool_jar_dir
            .as_deref()
            .map(defaults::expand_tilde)
            .unwrap_or_else(defaults::womtool_jar_dir),
    );

    InitRequest {
        backend: platform,
        conf_path,
        artifacts: vec![cromwell, womtool],
    }
}
