//! Filesystem-backed template store.
//!
//! Layout mirrors the builtin collection: one directory per template source,
//! containing `<kind marker>.tmpl`:
//!
//! ```text
//! templates/
//! ├── docker/
//! │   └── Dockerfile.tmpl
//! └── compose/
//!     └── docker-compose.yml.tmpl
//! ```

use std::path::PathBuf;

use tracing::debug;

use vulcanbox_core::domain::FileKind;
use vulcanbox_core::error::{VulcanBoxError, VulcanBoxResult};
use vulcanbox_core::ports::TemplateStore;

/// Template store reading bodies from a directory tree.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl TemplateStore for DirStore {
    fn load(&self, source: &str, kind: FileKind) -> VulcanBoxResult<String> {
        let path = self.root.join(source).join(kind.template_file());
        debug!(path = %path.display(), "loading template body");

        std::fs::read_to_string(&path).map_err(|e| {
            VulcanBoxError::runtime(format!(
                "cannot read template {}: {e}",
                path.display()
            ))
        })
    }
}
