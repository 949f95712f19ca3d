use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("tapbuy-alma"));
    cmd.env_remove("RUST_LOG").arg("tests/fixtures/invocations.jsonl");

    cmd.assert()
        .success()
        // Partner call with both URLs
        .stdout(predicate::str::contains(
            r#"{"payment":{"purchase_amount":15000,"return_url":"https://tapbuy.test/accept","customer_cancel_url":"https://tapbuy.test/cancel","failure_return_url":"https://tapbuy.test/cancel"},"order":{"merchant_reference":"000000001"}}"#,
        ))
        // Regular storefront call
        .stdout(predicate::str::contains(
            r#"{"payment":{"purchase_amount":2000,"return_url":"https://shop.test/return","customer_cancel_url":"https://shop.test/cancel","failure_return_url":"https://shop.test/failure"}}"#,
        ))
        // Malformed metadata
        .stdout(predicate::str::contains(
            r#"{"payment":{"purchase_amount":3000,"return_url":"https://shop.test/return"}}"#,
        ))
        // No metadata
        .stdout(predicate::str::contains(
            r#"{"payment":{"purchase_amount":4000,"return_url":"https://shop.test/return"}}"#,
        ))
        .stderr(predicate::str::contains("could not be unserialized"))
        .stderr(predicate::str::contains("Tapbuy payment URLs override applied"));

    Ok(())
}

#[test]
fn test_cli_never_origin_leaves_everything_alone() {
    let mut cmd = Command::new(cargo_bin!("tapbuy-alma"));
    cmd.env_remove("RUST_LOG")
        .arg("tests/fixtures/invocations.jsonl")
        .arg("--origin")
        .arg("never");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tapbuy.test").not());
}

#[test]
fn test_cli_partner_token_mismatch() {
    let mut cmd = Command::new(cargo_bin!("tapbuy-alma"));
    cmd.env_remove("RUST_LOG")
        .arg("tests/fixtures/invocations.jsonl")
        .arg("--partner-token")
        .arg("expected-secret");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tapbuy.test").not());
}

#[test]
fn test_cli_reads_stdin() {
    let input = std::fs::read_to_string("tests/fixtures/invocations.jsonl").unwrap();

    let mut cmd = assert_cmd::Command::new(cargo_bin!("tapbuy-alma"));
    cmd.env_remove("RUST_LOG").arg("-").write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://tapbuy.test/accept"));
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("tapbuy-alma"));
    cmd.arg("tests/fixtures/does-not-exist.jsonl");

    cmd.assert().failure();
}
