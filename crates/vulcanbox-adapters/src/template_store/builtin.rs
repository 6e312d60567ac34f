//! Templates that ship with VulcanBox, embedded at compile time.

use vulcanbox_core::domain::FileKind;
use vulcanbox_core::error::{VulcanBoxError, VulcanBoxResult};
use vulcanbox_core::ports::TemplateStore;

const DOCKERFILE_BODY: &str = include_str!("../../templates/docker/Dockerfile.tmpl");
const COMPOSE_BODY: &str = include_str!("../../templates/compose/docker-compose.yml.tmpl");

/// Zero-configuration template store backed by `include_str!` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn load(&self, source: &str, kind: FileKind) -> VulcanBoxResult<String> {
        match (source, kind) {
            ("docker", FileKind::Dockerfile) => Ok(DOCKERFILE_BODY.to_string()),
            ("compose", FileKind::DockerCompose) => Ok(COMPOSE_BODY.to_string()),
            _ => Err(VulcanBoxError::runtime(format!(
                "no built-in template for source '{source}' ({kind})"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docker_body_has_base_image_placeholder() {
        let body = BuiltinTemplates.load("docker", FileKind::Dockerfile).unwrap();
        assert!(body.contains("{{base_image}}"));
        assert!(body.contains("{{expose_directives}}"));
    }

    #[test]
    fn compose_body_has_block_placeholders() {
        let body = BuiltinTemplates
            .load("compose", FileKind::DockerCompose)
            .unwrap();
        assert!(body.starts_with("services:"));
        assert!(body.contains("{{services_block}}"));
        assert!(body.contains("{{network_block}}"));
    }

    #[test]
    fn unknown_source_is_a_runtime_error() {
        let err = BuiltinTemplates.load("vm", FileKind::Dockerfile).unwrap_err();
        assert!(!err.is_input());
    }
}
