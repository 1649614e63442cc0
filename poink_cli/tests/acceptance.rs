//! Acceptance test: runs the application as a subprocess and asserts its
//! output for given argument combinations matches what is expected.

#![forbid(unsafe_code)]

use abscissa_core::testing::prelude::*;
use once_cell::sync::Lazy;

/// Runs the `poink` binary built for this test run.
pub static RUNNER: Lazy<CmdRunner> = Lazy::new(|| CmdRunner::new(env!("CARGO_BIN_EXE_poink")));

const CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/support/config.toml");

#[test]
fn link_for_query_app_on_default_chain() {
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("link")
        .arg("Raydium")
        .arg("EPjFW")
        .arg("--timestamp")
        .arg("1700000000000")
        .capture_stdout()
        .run();

    cmd.stdout()
        .expect_line("https://raydium.io/swap?inputMint=sol&outputMint=EPjFW");
    cmd.stdout().expect_line(
        "https://poink.test/embed?url=https%3A%2F%2Fraydium.io%2Fswap%3FinputMint%3Dsol%26outputMint%3DEPjFW&chain=solana&back=%2Fsolana%3Ft%3D1700000000000&t=1700000000000",
    );
    cmd.wait().unwrap().expect_success();
}

#[test]
fn link_with_chain_override_and_no_back() {
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("link")
        .arg("CoW Swap")
        .arg("0xTOKEN")
        .arg("--chain")
        .arg("ethereum")
        .arg("--no-back")
        .arg("--timestamp")
        .arg("7")
        .capture_stdout()
        .run();

    cmd.stdout().expect_line("https://swap.cow.fi/#/1/swap/ETH/0xTOKEN");
    cmd.stdout().expect_line(
        "https://poink.test/embed?url=https%3A%2F%2Fswap.cow.fi%2F%23%2F1%2Fswap%2FETH%2F0xTOKEN&chain=ethereum&t=7",
    );
    cmd.wait().unwrap().expect_success();
}

#[test]
fn link_to_parameterized_app_needs_a_token() {
    let mut runner = RUNNER.clone();
    let cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("link")
        .arg("Jupiter")
        .capture_stdout()
        .run();

    cmd.wait().unwrap().expect_code(1);
}

#[test]
fn link_to_unknown_chain_fails() {
    let mut runner = RUNNER.clone();
    let cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("link")
        .arg("Uniswap")
        .arg("0xTOKEN")
        .arg("--chain")
        .arg("dogechain")
        .capture_stdout()
        .run();

    cmd.wait().unwrap().expect_code(1);
}

#[test]
fn embed_wraps_arbitrary_url() {
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("embed")
        .arg("https://app.uniswap.org?x=1&y=2")
        .arg("--timestamp")
        .arg("1700000000000")
        .capture_stdout()
        .run();

    cmd.stdout().expect_line(
        "https://poink.test/embed?url=https%3A%2F%2Fapp.uniswap.org%3Fx%3D1%26y%3D2&t=1700000000000",
    );
    cmd.wait().unwrap().expect_success();
}

#[test]
fn card_prints_player_meta_tags() {
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("card")
        .arg("/embed?url=https%3A%2F%2Fgmonad.club%2F&t=1")
        .arg("--timestamp")
        .arg("2")
        .capture_stdout()
        .run();

    cmd.stdout()
        .expect_line(r#"<meta name="twitter:card" content="player" />"#);
    cmd.wait().unwrap().expect_success();
}

#[test]
fn card_without_destination_fails() {
    let mut runner = RUNNER.clone();
    let cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("card")
        .arg("/embed?t=1")
        .capture_stdout()
        .run();

    cmd.wait().unwrap().expect_code(1);
}

#[test]
fn token_lookup_needs_a_numeric_chain_id() {
    let mut runner = RUNNER.clone();
    let cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("token")
        .arg("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
        .capture_stdout()
        .run();

    cmd.wait().unwrap().expect_code(1);
}

#[test]
fn native_token_lookup_stays_offline() {
    let mut runner = RUNNER.clone();
    let mut cmd = runner
        .arg("-c")
        .arg(CONFIG)
        .arg("token")
        .arg("eth")
        .arg("--chain")
        .arg("ethereum")
        .arg("--api")
        .arg("http://127.0.0.1:9")
        .capture_stdout()
        .run();

    cmd.stdout().expect_line("{");
    cmd.stdout().expect_line(r#"    "symbol": "ETH","#);
    cmd.wait().unwrap().expect_success();
}
