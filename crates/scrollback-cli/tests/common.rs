use assert_cmd::Command;
use scrollback_testing::StorageFixture;

/// Test environment: a synthetic storage tree plus a ready-to-run binary
/// pointed at it.
pub struct TestFixture {
    pub storage: StorageFixture,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            storage: StorageFixture::new(),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("scrollback").expect("binary scrollback should build");
        cmd.arg("--storage-root")
            .arg(self.storage.root().as_os_str());
        cmd
    }
}
