use std::process::{Output, Stdio};

use serde_json::{Value, json};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Build a command for the CLI binary pointed at `api_url`, isolated from the
/// caller's environment.
fn cli(args: &[&str], api_url: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_schemactl"));
    cmd.args(args);
    cmd.env("SCHEMACTL_API_URL", api_url);
    cmd.env_remove("SCHEMACTL_API_KEY");
    cmd.env_remove("SCHEMACTL_TIMEOUT");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI binary with arguments.
pub async fn run_cli(args: &[&str], api_url: &str) -> Output {
    cli(args, api_url)
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI with extra environment variables.
pub async fn run_cli_with_env(args: &[&str], api_url: &str, env: &[(&str, &str)]) -> Output {
    let mut cmd = cli(args, api_url);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI feeding `input` on stdin.
pub async fn run_cli_with_stdin(args: &[&str], api_url: &str, input: &str) -> Output {
    let mut child = cli(args, api_url)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    let mut stdin = child.stdin.take().expect("stdin is piped");
    stdin.write_all(input.as_bytes()).await.unwrap();
    drop(stdin);

    child.wait_with_output().await.expect("Failed to wait for CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], api_url: &str) -> String {
    let output = run_cli(args, api_url).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn health_json() -> Value {
    json!({
        "status": "ok",
        "database": "connected",
        "timestamp": "2025-03-01T10:15:00Z"
    })
}

pub fn schema_json(public_id: &str, name: &str, status: &str) -> Value {
    json!({
        "publicId": public_id,
        "publicVersionId": public_id.replacen("sch_", "schv_", 1),
        "name": name,
        "version": 1,
        "content": {"type": "object"},
        "schemaType": "standard",
        "status": status,
        "visibility": "public",
        "docTypeCode": "Invoice",
        "countryCode": "PT",
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z"
    })
}
