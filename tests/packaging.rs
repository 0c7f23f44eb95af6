//! Checks on the container recipe: the runtime stage ships the binary only,
//! runs unprivileged and has no shell.

const DOCKERFILE: &str = include_str!("../Dockerfile");
const COMPOSE: &str = include_str!("../docker-compose.yml");
const MANIFEST: &str = include_str!("../Cargo.toml");

/// Instruction lines of the last `FROM` stage, comments and continuations dropped.
fn runtime_stage() -> Vec<&'static str> {
    let lines: Vec<&str> = DOCKERFILE
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    let start = lines
        .iter()
        .rposition(|l| l.starts_with("FROM "))
        .expect("no FROM instruction");
    lines[start..].to_vec()
}

#[test]
fn recipe_has_build_and_runtime_stages() {
    let stages = DOCKERFILE.lines().filter(|l| l.starts_with("FROM ")).count();
    assert_eq!(stages, 2);
    assert!(DOCKERFILE.contains("cargo build --release"));
}

#[test]
fn runtime_image_is_distroless_nonroot() {
    let stage = runtime_stage();
    assert!(stage[0].contains("distroless"), "base: {}", stage[0]);
    assert!(stage[0].ends_with(":nonroot"));
    assert!(stage.contains(&"USER nonroot:nonroot"));
}

#[test]
fn runtime_image_contains_only_the_binary() {
    let copies: Vec<_> = runtime_stage()
        .into_iter()
        .filter(|l| l.starts_with("COPY") || l.starts_with("ADD"))
        .collect();
    assert_eq!(
        copies,
        vec!["COPY --from=builder /app/hello-server /app/hello-server"]
    );
}

#[test]
fn runtime_stage_runs_no_shell_commands() {
    let stage = runtime_stage();
    assert!(!stage.iter().any(|l| l.starts_with("RUN ")));
    assert!(stage.contains(&"ENTRYPOINT [\"/app/hello-server\"]"));
    assert!(stage.contains(&"EXPOSE 5000"));
}

#[test]
fn build_stage_discards_sources() {
    assert!(DOCKERFILE.contains("rm -rf /build/src /build/target"));
}

#[test]
fn compose_maps_port_and_restarts() {
    for expected in [
        "image: hello-server",
        "container_name: hello-server",
        "- \"5000:5000\"",
        "restart: always",
    ] {
        assert!(
            COMPOSE.lines().any(|l| l.trim() == expected),
            "missing {expected:?} in docker-compose.yml"
        );
    }
}

#[test]
fn builder_image_matches_declared_rust_version() {
    let rust_version = MANIFEST
        .lines()
        .find_map(|l| l.strip_prefix("rust-version = "))
        .map(|v| v.trim_matches('"'))
        .expect("rust-version missing from Cargo.toml");
    assert!(MANIFEST.lines().any(|l| l == "resolver = \"3\""));

    let builder = DOCKERFILE
        .lines()
        .find(|l| l.starts_with("FROM ") && l.ends_with(" AS builder"))
        .expect("no builder stage");
    assert!(
        builder.starts_with(&format!("FROM rust:{rust_version}-")),
        "builder {builder:?} does not match rust-version {rust_version}"
    );
}

#[test]
fn application_build_is_locked() {
    let build = DOCKERFILE
        .lines()
        .filter(|l| l.contains("cargo build"))
        .last()
        .expect("no cargo build");
    assert!(build.contains("--release --locked"), "{build}");
}
