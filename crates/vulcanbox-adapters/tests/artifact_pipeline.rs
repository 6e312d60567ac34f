//! End-to-end artifact pipeline: builtin templates through the memory engine.

use serde_json::json;
use tempfile::tempdir;

use vulcanbox_adapters::{BuiltinTemplates, DirStore, MemoryEngine};
use vulcanbox_core::prelude::*;

fn image_context(base: &str, ports: &[u16]) -> Context {
    let mut ctx = Context::new();
    ctx.insert("base_image".into(), json!(base));
    ctx.insert("ports".into(), json!(ports));
    ctx
}

#[test]
fn written_dockerfile_contains_distinct_expose_lines() {
    let dir = tempdir().unwrap();
    let image = ImageArtifact::at(
        dir.path(),
        "web.Dockerfile",
        image_context("ubuntu:20.04", &[5050, 8080]),
    )
    .unwrap();

    image.write(&BuiltinTemplates).unwrap();

    let content = std::fs::read_to_string(image.destination()).unwrap();
    assert!(content.contains("FROM ubuntu:20.04"));
    let lines: Vec<_> = content.lines().collect();
    assert!(lines.contains(&"EXPOSE 5050"));
    assert!(lines.contains(&"EXPOSE 8080"));
    assert!(content.ends_with('\n') && !content.ends_with("\n\n"));
}

#[test]
fn build_lifecycle_sets_tag_exactly_once() {
    let dir = tempdir().unwrap();
    let mut image =
        ImageArtifact::at(dir.path(), "app.Dockerfile", image_context("alpine", &[])).unwrap();
    image.write(&BuiltinTemplates).unwrap();

    let engine = MemoryEngine::with_log_lines(["Step 1/3", "Step 2/3", "Step 3/3"]);
    assert!(!image.is_built());

    let mut log = Vec::new();
    image
        .build(&engine, "my base", &mut |line| log.push(line.to_string()))
        .unwrap();

    assert!(image.is_built());
    assert_eq!(log.len(), 3);
    let tag = image.image_tag().unwrap();
    assert!(tag.starts_with("vulcanbox-my-base-"));
    assert_eq!(engine.last_build().unwrap().tag, tag);

    // second build is rejected as an input error, engine untouched
    let err = image.build(&engine, "my base", &mut |_| {}).unwrap_err();
    assert_eq!(err.exit_code(), exit_code::INPUT_ERROR);
    assert_eq!(engine.build_count(), 1);
}

#[test]
fn failed_build_leaves_artifact_unbuilt() {
    let dir = tempdir().unwrap();
    let mut image =
        ImageArtifact::at(dir.path(), "app.Dockerfile", image_context("alpine", &[])).unwrap();

    let engine = MemoryEngine::failing();
    let err = image.build(&engine, "base", &mut |_| {}).unwrap_err();

    assert_eq!(err.exit_code(), exit_code::RUNTIME_ERROR);
    assert!(!image.is_built());
    assert_eq!(image.json()["tag"], serde_json::Value::Null);
}

#[test]
fn start_without_build_is_a_runtime_error() {
    let dir = tempdir().unwrap();
    let image =
        ImageArtifact::at(dir.path(), "app.Dockerfile", image_context("alpine", &[])).unwrap();

    let engine = MemoryEngine::new();
    let err = image.start(&engine).unwrap_err();
    assert_eq!(err.exit_code(), exit_code::RUNTIME_ERROR);
    assert!(err.to_string().contains("no image tag set"));
}

#[test]
fn start_after_build_runs_detached_and_removed() {
    let dir = tempdir().unwrap();
    let mut image =
        ImageArtifact::at(dir.path(), "app.Dockerfile", image_context("alpine", &[])).unwrap();

    let engine = MemoryEngine::new();
    image.build(&engine, "base", &mut |_| {}).unwrap();
    image.start(&engine).unwrap();

    let run = engine.last_run().unwrap();
    assert_eq!(run.image, image.image_tag().unwrap());
    assert!(run.remove_on_exit);
    assert!(run.detached);
}

#[test]
fn compose_renders_replicas_and_network() {
    let dir = tempdir().unwrap();
    let compose = ComposeArtifact::at(
        dir.path(),
        ComposeSpec {
            image: "web.Dockerfile".into(),
            replicas: 2,
            port: 8080,
            with_network: true,
        },
    );

    compose.write(&BuiltinTemplates).unwrap();

    let content = std::fs::read_to_string(compose.destination()).unwrap();
    assert!(content.starts_with("services:\n"));
    assert!(content.contains("box-1:"));
    assert!(content.contains("box-2:"));
    assert!(content.contains("dockerfile: web.Dockerfile"));
    assert!(content.contains("vulcanbox-net"));
    assert!(content.ends_with('\n') && !content.ends_with("\n\n"));
}

#[test]
fn compose_without_network_omits_networks_section() {
    let dir = tempdir().unwrap();
    let compose = ComposeArtifact::at(
        dir.path(),
        ComposeSpec {
            image: "web.Dockerfile".into(),
            replicas: 1,
            port: 22,
            with_network: false,
        },
    );

    compose.write(&BuiltinTemplates).unwrap();

    let content = std::fs::read_to_string(compose.destination()).unwrap();
    assert!(!content.contains("networks:"));
    assert!(content.contains("- \"22\""));
}

#[test]
fn dir_store_overrides_builtin_bodies() {
    let project = tempdir().unwrap();
    let templates = tempdir().unwrap();
    let docker_dir = templates.path().join("docker");
    std::fs::create_dir_all(&docker_dir).unwrap();
    std::fs::write(
        docker_dir.join("Dockerfile.tmpl"),
        "# custom\nFROM {{base_image}}\n{{expose_directives}}\n",
    )
    .unwrap();

    let image = ImageArtifact::at(
        project.path(),
        "web.Dockerfile",
        image_context("debian:12", &[9000]),
    )
    .unwrap();
    image.write(&DirStore::new(templates.path())).unwrap();

    let content = std::fs::read_to_string(image.destination()).unwrap();
    assert!(content.starts_with("# custom\n"));
    assert!(content.contains("FROM debian:12"));
    assert!(content.contains("EXPOSE 9000"));
}
