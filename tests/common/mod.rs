#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the format-guard binary.
#[macro_export]
macro_rules! format_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("format-guard"))
    };
}

/// Stand-in for clang-format: a file containing `BAD` is non-conforming and
/// `-i` rewrites it to `GOOD`. Every file it sees is logged to `calls.log`.
pub const FAKE_FORMATTER: &str = r#"mode=check
status=0
log="$(dirname "$0")/calls.log"
for arg in "$@"; do
  case "$arg" in
    -i) mode=fix ;;
    -*) ;;
    *)
      echo "$mode $arg" >> "$log"
      if grep -q BAD "$arg"; then
        if [ "$mode" = fix ]; then
          sed 's/BAD/GOOD/g' "$arg" > "$arg.tmp" && mv "$arg.tmp" "$arg"
        else
          echo "$arg:1:1: error: code should be clang-formatted [-Wclang-format-violations]" >&2
          status=1
        fi
      fi
      ;;
  esac
done
exit $status
"#;

/// Temporary project directory used as the working directory of a run.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Writes `.dev/whitelist.txt` with one entry per line.
    pub fn create_whitelist(&self, entries: &[&str]) {
        let mut content = entries.join("\n");
        content.push('\n');
        self.create_file(".dev/whitelist.txt", &content);
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".format-guard.toml", content);
    }

    /// Installs the fake formatter and points `.format-guard.toml` at it.
    pub fn use_fake_formatter(&self) {
        self.use_fake_formatter_with("");
    }

    /// Like [`Self::use_fake_formatter`], with extra config appended.
    pub fn use_fake_formatter_with(&self, extra_config: &str) {
        self.create_file("tools/fake-clang-format.sh", FAKE_FORMATTER);
        let script = self.script_path();
        self.create_config(&format!(
            "{extra_config}\n[formatter]\ncommand = [\"sh\", '{}']\n",
            script.display()
        ));
    }

    pub fn script_path(&self) -> PathBuf {
        self.dir.path().join("tools/fake-clang-format.sh")
    }

    /// Runs git in the fixture directory and asserts it succeeded.
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Turns the fixture into a git repository with a committer identity.
    pub fn init_git_repo(&self) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test User"]);
        self.git(&["config", "commit.gpgsign", "false"]);
    }

    /// Lines logged by the fake formatter, e.g. `check src/a.c`.
    pub fn formatter_calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("tools/calls.log"))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }
}
