//! Templated artifact base: the shared render-and-write capability.
//!
//! Both artifact kinds ([`crate::domain::ImageArtifact`] and
//! [`crate::domain::ComposeArtifact`]) implement [`TemplatedArtifact`] and
//! share the provided `write` flow: load the template body through the
//! [`TemplateStore`] port, substitute the render context, normalize
//! whitespace, and write the result to the frozen destination path.
//!
//! Invariant: `destination` is computed once at construction (base directory
//! + name) and never recomputed — there is no renaming mid-lifecycle.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::context::{self, Context};
use crate::error::{VulcanBoxError, VulcanBoxResult};
use crate::ports::TemplateStore;

/// The two file kinds VulcanBox knows how to template.
///
/// The marker doubles as the required naming convention: an artifact name
/// must contain its kind's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Dockerfile,
    DockerCompose,
}

impl FileKind {
    /// The fixed file-type marker, e.g. `Dockerfile`.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Dockerfile => "Dockerfile",
            Self::DockerCompose => "docker-compose.yml",
        }
    }

    /// File name of the template body inside a template-source directory.
    pub fn template_file(self) -> String {
        format!("{}.tmpl", self.marker())
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// A renderable, writable configuration file produced from a template plus a
/// context mapping.
pub trait TemplatedArtifact {
    /// Immutable artifact name, satisfying the kind's naming convention.
    fn name(&self) -> &str;

    /// Frozen absolute destination path.
    fn destination(&self) -> &Path;

    /// Which template body to load (directory name under the template root).
    fn template_source(&self) -> &str;

    /// The file kind this artifact produces.
    fn kind(&self) -> FileKind;

    /// The retained context copy, exactly as supplied at construction.
    fn context(&self) -> &Context;

    /// Context actually used for substitution.
    ///
    /// Default is the retained copy; artifacts override this to add derived
    /// keys (EXPOSE directives, compose service stanzas) without polluting
    /// the copy kept for serialization.
    fn render_context(&self) -> Context {
        self.context().clone()
    }

    /// Whether blank-line structure is preserved in the rendered output.
    ///
    /// When `false`, newline characters are stripped from the rendered body
    /// before the trailing newline is restored — best-effort cosmetic
    /// compaction, not idempotent with the placeholder syntax.
    fn keep_whitespace(&self) -> bool {
        true
    }

    /// Render the template and write it to the destination.
    ///
    /// Overwrites an existing file silently; collision checks are the
    /// caller's responsibility before construction. Every I/O failure is
    /// wrapped into a `Runtime` error.
    fn write(&self, store: &dyn TemplateStore) -> VulcanBoxResult<()> {
        let body = store.load(self.template_source(), self.kind())?;
        let rendered = context::render(&body, &self.render_context());
        let content = normalize(rendered, self.keep_whitespace());

        std::fs::write(self.destination(), content).map_err(|e| {
            VulcanBoxError::runtime(format!(
                "failed to write {}: {e}",
                self.destination().display()
            ))
        })?;

        info!(destination = %self.destination().display(), "wrote templated file");
        Ok(())
    }
}

/// Apply whitespace mode and guarantee exactly one trailing newline.
pub(crate) fn normalize(rendered: String, keep_whitespace: bool) -> String {
    let mut content = if keep_whitespace {
        rendered
    } else {
        rendered.replace('\n', "")
    };
    content.truncate(content.trim_end_matches('\n').len());
    content.push('\n');
    content
}

/// Reject names that do not carry the kind's file-type marker.
pub(crate) fn check_name(name: &str, kind: FileKind) -> VulcanBoxResult<()> {
    if !name.contains(kind.marker()) {
        return Err(VulcanBoxError::input(format!(
            "Name '{name}' is invalid, must end with '{}'",
            kind.marker()
        )));
    }
    Ok(())
}

/// Absolute destination for an artifact name under a base directory.
pub(crate) fn resolve_destination(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

/// The process working directory, as a `Runtime` error on failure.
pub(crate) fn working_dir() -> VulcanBoxResult<PathBuf> {
    std::env::current_dir()
        .map_err(|e| VulcanBoxError::runtime(format!("cannot resolve working directory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_required_in_name() {
        assert!(check_name("web.Dockerfile", FileKind::Dockerfile).is_ok());
        assert!(check_name("Dockerfile", FileKind::Dockerfile).is_ok());

        let err = check_name("web.txt", FileKind::Dockerfile).unwrap_err();
        assert!(err.is_input());
        assert!(err.to_string().contains("Dockerfile"));
    }

    #[test]
    fn template_file_names() {
        assert_eq!(FileKind::Dockerfile.template_file(), "Dockerfile.tmpl");
        assert_eq!(
            FileKind::DockerCompose.template_file(),
            "docker-compose.yml.tmpl"
        );
    }

    #[test]
    fn normalize_adds_single_trailing_newline() {
        assert_eq!(normalize("FROM ubuntu".into(), true), "FROM ubuntu\n");
    }

    #[test]
    fn normalize_collapses_many_trailing_newlines() {
        assert_eq!(normalize("FROM ubuntu\n\n\n".into(), true), "FROM ubuntu\n");
    }

    #[test]
    fn normalize_without_whitespace_strips_newlines() {
        assert_eq!(normalize("a\nb\nc\n".into(), false), "abc\n");
    }

    #[test]
    fn normalize_empty_body_is_one_newline() {
        assert_eq!(normalize(String::new(), true), "\n");
    }

    // ── write() through a fake store ──────────────────────────────────────

    use crate::domain::{Context, ImageArtifact};
    use serde_json::json;

    struct StaticStore(&'static str);

    impl TemplateStore for StaticStore {
        fn load(&self, _source: &str, _kind: FileKind) -> VulcanBoxResult<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn write_renders_and_normalizes_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new();
        ctx.insert("base_image".into(), json!("ubuntu:20.04"));
        let image = ImageArtifact::at(dir.path(), "web.Dockerfile", ctx).unwrap();

        let store = StaticStore("FROM {{base_image}}\n\n\n");
        image.write(&store).unwrap();

        let written = std::fs::read_to_string(image.destination()).unwrap();
        assert_eq!(written, "FROM ubuntu:20.04\n");
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new();
        ctx.insert("base_image".into(), json!("alpine"));
        let image = ImageArtifact::at(dir.path(), "web.Dockerfile", ctx).unwrap();

        let store = StaticStore("FROM {{base_image}}");
        image.write(&store).unwrap();
        let first = std::fs::read_to_string(image.destination()).unwrap();
        image.write(&store).unwrap();
        let second = std::fs::read_to_string(image.destination()).unwrap();

        assert_eq!(first, second);
        assert!(first.ends_with('\n') && !first.ends_with("\n\n"));
    }

    #[test]
    fn write_to_unwritable_destination_is_runtime_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory at the destination path makes fs::write fail
        let dest = dir.path().join("web.Dockerfile");
        std::fs::create_dir(&dest).unwrap();

        let image = ImageArtifact::at(dir.path(), "web.Dockerfile", Context::new()).unwrap();
        let err = image.write(&StaticStore("FROM scratch")).unwrap_err();
        assert!(!err.is_input());
    }
}
