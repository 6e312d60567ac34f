//! Implementation of `vulcanbox new image` and `vulcanbox new compose`.
//!
//! Responsibility: run the pre-construction validation rules, build the
//! artifact, write it, and report. No rendering logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, instrument};

use vulcanbox_adapters::{BuiltinTemplates, DirStore, DockerCli};
use vulcanbox_core::domain::{
    ComposeArtifact, ComposeSpec, Context, FileKind, ImageArtifact, TemplatedArtifact, validation,
};
use vulcanbox_core::error::VulcanBoxError;
use vulcanbox_core::ports::TemplateStore;

use crate::{
    cli::{ComposeArgs, GlobalArgs, ImageArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `vulcanbox new image`.
///
/// Flow: collision check → construct → write → optional build (streaming
/// logs) → optional JSON sidecar.
#[instrument(skip_all, fields(name = %args.name))]
pub fn image(
    args: ImageArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let destination = cwd.join(&args.name);
    validation::ensure_destination_free(&destination)?;

    debug!(base = %args.base, "creating new Dockerfile");
    if args.build.is_some() {
        debug!("image will build automatically after templating");
    }

    let mut context = Context::new();
    context.insert("base_image".into(), json!(args.base));
    context.insert("ports".into(), json!(args.expose));

    let mut image = ImageArtifact::new(&args.name, context)?;
    let store = template_store(global, config);
    image.write(store.as_ref())?;
    output.success(&format!("Created new Dockerfile: {}", destination.display()))?;

    if let Some(requested) = &args.build {
        let engine = DockerCli::new();
        let handle = image.build(&engine, requested, &mut |line| {
            if !line.is_empty() {
                let _ = output.print(line);
            }
        })?;
        output.success(&format!("Finished building image: {}", handle.id))?;
    }

    if args.export_config {
        let sidecar = sidecar_path(&cwd, &args.name, &args.base);
        debug!(path = %sidecar.display(), "exporting config JSON");
        let body = serde_json::to_string_pretty(&image.json())
            .map_err(|e| VulcanBoxError::runtime(format!("cannot serialize config: {e}")))?;
        std::fs::write(&sidecar, body + "\n")?;
        output.print(&format!("Config JSON exported: {}", sidecar.display()))?;
    }

    Ok(())
}

/// Execute `vulcanbox new compose`.
///
/// An existing compose file is a soft abort: the user is asked to confirm
/// the overwrite, and declining skips the operation with a warning (exit 0).
#[instrument(skip_all, fields(image = %args.image, count = args.count))]
pub fn compose(
    args: ComposeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let compose_path = cwd.join(FileKind::DockerCompose.marker());

    if compose_path.exists()
        && !args.yes
        && !confirm("Compose file already exists in current directory, overwrite?")?
    {
        output.warning("[USER ABORTED] Compose generation cancelled.")?;
        return Ok(());
    }

    validation::ensure_source_exists(&cwd.join(&args.image))?;
    validation::ensure_replica_floor(args.count)?;
    validation::ensure_unprivileged_port(args.expose)?;

    debug!("creating new compose file");
    let compose = ComposeArtifact::new(ComposeSpec {
        image: args.image,
        replicas: args.count,
        port: args.expose,
        with_network: args.with_network,
    })?;

    let store = template_store(global, config);
    compose.write(store.as_ref())?;
    output.success(&format!(
        "Created new Docker Compose suite: {}",
        compose_path.display()
    ))?;

    Ok(())
}

/// Pick the template store: `--templates-dir` wins, then the environment
/// override, then the built-in bodies.
fn template_store(global: &GlobalArgs, config: &AppConfig) -> Box<dyn TemplateStore> {
    match global
        .templates_dir
        .as_ref()
        .or(config.templates_dir.as_ref())
    {
        Some(dir) => Box::new(DirStore::new(dir)),
        None => Box::new(BuiltinTemplates),
    }
}

fn sidecar_path(cwd: &Path, name: &str, base: &str) -> PathBuf {
    let parsed_name = name.replace(".Dockerfile", "");
    let base_part = base.replace(':', "-");
    cwd.join(format!("vulcanbox-{parsed_name}-{base_part}.json"))
}

fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [Y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_name_strips_marker_and_colon() {
        let path = sidecar_path(Path::new("/work"), "api.Dockerfile", "ubuntu:20.04");
        assert_eq!(
            path,
            Path::new("/work/vulcanbox-api-ubuntu-20.04.json")
        );
    }

    #[test]
    fn sidecar_name_for_bare_dockerfile() {
        let path = sidecar_path(Path::new("/work"), "Dockerfile", "alpine");
        assert_eq!(path, Path::new("/work/vulcanbox--alpine.json"));
    }

    #[test]
    fn flag_beats_env_for_template_dir() {
        let global = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            templates_dir: Some(PathBuf::from("/flag")),
        };
        let config = AppConfig {
            github: None,
            templates_dir: Some(PathBuf::from("/env")),
        };
        // the DirStore built from the flag path is selected
        let store = template_store(&global, &config);
        // smoke: loading from a bogus dir is a runtime error, proving the
        // DirStore (not the builtin store) was chosen
        assert!(store
            .load("docker", FileKind::Dockerfile)
            .unwrap_err()
            .to_string()
            .contains("/flag"));
    }
}
