//! Template store implementations.
//!
//! Two stores implement the [`vulcanbox_core::ports::TemplateStore`] port:
//!
//! - [`BuiltinTemplates`] — the bodies compiled into the binary; always
//!   available, used unless the user points at a custom template directory.
//! - [`DirStore`] — reads `<dir>/<source>/<kind suffix>.tmpl` from disk,
//!   for user-maintained template collections
//!   (`VULCANBOX_TEMPLATES_DIR` / `--templates-dir`).

mod builtin;
mod dir;

pub use builtin::BuiltinTemplates;
pub use dir::DirStore;
