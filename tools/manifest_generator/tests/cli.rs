use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_manifest_generator"));
    cmd.env_clear().current_dir(dir);
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("spawn manifest_generator")
}

const MAIN_ENV: [(&str, &str); 3] = [
    ("INPUT_REF", "refs/heads/main"),
    ("INPUT_REF_NAME", "feature/foo"),
    ("INPUT_COMMIT", "abc123"),
];

#[test]
fn writes_sanitized_manifest_in_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_in(tmp.path(), &MAIN_ENV);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(tmp.path().join("feature-foo.json")).unwrap();
    assert_eq!(
        text,
        r#"{"ref":"refs/heads/main","branch":"feature-foo","commit":"abc123","builds":{},"srcFilenames":{}}"#
    );
}

#[test]
fn keep_policy_with_slash_exits_with_io_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let mut env: Vec<(&str, &str)> = MAIN_ENV.to_vec();
    env.push(("INPUT_BRANCH-SEPARATOR", "keep"));
    let out = run_in(tmp.path(), &env);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn empty_environment_is_a_configuration_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_in(tmp.path(), &[]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("INPUT_REF"));
    assert!(!tmp.path().join("None.json").exists());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn publishes_manifest_file_output() {
    let tmp = tempfile::tempdir().unwrap();
    let gh_output = tmp.path().join("gh_output");
    let gh_output_str = gh_output.to_str().unwrap().to_string();
    let mut env: Vec<(&str, &str)> = MAIN_ENV.to_vec();
    env.push(("GITHUB_OUTPUT", gh_output_str.as_str()));
    env.push(("INPUT_PROJECT-NAME", "go-livepeer"));
    env.push(("INPUT_BUCKET-DOMAIN", "build.livepeer.live"));
    env.push(("INPUT_PLATFORM", "linux"));
    env.push(("INPUT_ARCHITECTURE", "amd64"));

    let out = run_in(tmp.path(), &env);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(&gh_output).unwrap(),
        "manifest-file=feature-foo.json\n"
    );

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("feature-foo.json")).unwrap())
            .unwrap();
    assert_eq!(
        v["builds"]["linux-amd64"],
        "https://build.livepeer.live/go-livepeer/abc123/livepeer-go-livepeer-linux-amd64.tar.gz"
    );
}
