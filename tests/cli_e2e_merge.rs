//! End-to-end tests for the `merge` command
//!
//! These invoke the CLI binary on list files laid out in a temporary
//! directory. No git repository is involved.

mod common;
use common::prelude::*;

fn fixture() -> TestFixture {
    TestFixture::new()
        .with_file("lflist.conf", lists::AUTHORITATIVE)
        .with_file("ocg/ocg.conf", lists::FALLBACK_OCG)
        .with_file("ocg/README.md", "!GOAT\n1 0\n")
        .with_file("goat/goat.conf", lists::FALLBACK_GOAT)
        .with_file("lflist-sync.yaml", lists::CONFIG)
}

#[test]
fn test_merge_help() {
    let mut cmd = cargo_bin_cmd!("lflist-sync");

    cmd.arg("merge")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--authoritative"))
        .stdout(predicate::str::contains("--fallback"));
}

#[test]
fn test_merge_to_stdout() {
    let fixture = fixture();

    fixture
        .command()
        .args(["--log-level", "error", "merge"])
        .args(["--authoritative", "lflist.conf"])
        .args(["--fallback", "ocg", "--fallback", "goat"])
        .args(["--config", "lflist-sync.yaml"])
        .assert()
        .success()
        .stdout(lists::EXPECTED);
}

#[test]
fn test_merge_to_file() {
    let fixture = fixture();

    fixture
        .command()
        .args(["merge", "-a", "lflist.conf", "-f", "ocg", "-f", "goat"])
        .args(["-c", "lflist-sync.yaml", "-o", "out/lflist.conf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 3 of 4 lists"));

    let written = std::fs::read_to_string(fixture.join("out/lflist.conf")).unwrap();
    assert_eq!(written, lists::EXPECTED);
}

#[test]
fn test_merge_fallback_order_matters() {
    let fixture = TestFixture::new()
        .with_file("lflist.conf", "!Other\n1 0\n")
        .with_file("first/a.conf", "!TCG\n1111 0\n")
        .with_file("second/b.conf", "!TCG\n2222 0\n")
        .with_file("lflist-sync.yaml", "header: '# h'\npriority: [TCG]\n");

    fixture
        .command()
        .args(["--log-level", "error", "merge", "-a", "lflist.conf"])
        .args(["-f", "second", "-f", "first", "-c", "lflist-sync.yaml"])
        .assert()
        .success()
        .stdout("# h\n#[TCG]\n!TCG\n2222 0\n");
}

#[test]
fn test_merge_logs_discovered_sections() {
    let fixture = fixture();

    fixture
        .command()
        .args(["merge", "-a", "lflist.conf", "-c", "lflist-sync.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sections found in"))
        .stderr(predicate::str::contains("!TCG"));
}

#[test]
fn test_merge_missing_authoritative_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["merge", "-a", "missing.conf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source not found"));
}

#[test]
fn test_merge_invalid_config() {
    let fixture = fixture().with_file("bad.yaml", "priority: [A\n");

    fixture
        .command()
        .args(["merge", "-a", "lflist.conf", "-c", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML parsing error"));
}
