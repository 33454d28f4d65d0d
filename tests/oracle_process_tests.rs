//! Subprocess Oracle Integration Tests
//!
//! Runs small shell commands as oracle programs. Unix only, since the
//! commands rely on `sh`.

#![cfg(unix)]

use chess_referee::config::{EngineSettings, OracleSettings};
use chess_referee::game::ai::{serialize_board, MoveOracle, MoveSelector, MoveSource, OracleMove, ProcessOracle};
use chess_referee::game::components::PieceColor;
use chess_referee::game::rules::BoardState;
use std::time::{Duration, Instant};

fn shell_oracle(script: &str, timeout: Duration) -> ProcessOracle {
    ProcessOracle::new("sh", vec!["-c".to_string(), script.to_string()], timeout)
}

#[test]
fn test_process_oracle_reads_stdout() {
    let mut oracle = shell_oracle("echo 1 4 3 4", Duration::from_secs(5));
    assert_eq!(
        oracle.request_move(&serialize_board(&BoardState::initial())),
        Some(OracleMove {
            from_row: 1,
            from_col: 4,
            to_row: 3,
            to_col: 4
        })
    );
}

#[test]
fn test_board_is_passed_as_last_argument() {
    //! With `sh -c script name board`, the board lands in `$1`. Splitting it
    //! on whitespace gives 64 square tokens and 7 row separators.
    let mut oracle = ProcessOracle::new(
        "sh",
        vec![
            "-c".to_string(),
            "set -- $1; echo $# 0 0 0".to_string(),
            "oracle".to_string(),
        ],
        Duration::from_secs(5),
    );
    let board = serialize_board(&BoardState::initial());
    assert_eq!(oracle.request_move(&board).map(|mv| mv.from_row), Some(71));
}

#[test]
fn test_slow_oracle_times_out() {
    let mut oracle = shell_oracle("sleep 5; echo 1 4 3 4", Duration::from_millis(200));
    let started = Instant::now();

    assert_eq!(oracle.request_move("empty"), None);
    assert!(started.elapsed() < Duration::from_secs(4), "Child was not killed on timeout");
}

#[test]
fn test_oracle_that_closes_stdout_still_times_out() {
    //! Reaching EOF on stdout is not the end of the wait: the child must also
    //! exit before the deadline.
    let mut oracle = shell_oracle("exec 1>&-; sleep 4", Duration::from_millis(200));
    let started = Instant::now();

    assert_eq!(oracle.request_move("empty"), None);
    assert!(started.elapsed() < Duration::from_secs(1), "Wait exceeded the timeout");
}

#[test]
fn test_grandchild_holding_stdout_does_not_block_call() {
    //! `sh` exits right away but the background `sleep` keeps the pipe open,
    //! so stdout never reaches EOF within the timeout.
    let mut oracle = shell_oracle("sleep 4 & echo 1 4 3 4", Duration::from_millis(200));
    let started = Instant::now();

    assert_eq!(oracle.request_move("empty"), None);
    assert!(started.elapsed() < Duration::from_secs(1), "Wait exceeded the timeout");
}

#[test]
fn test_failing_oracle_yields_no_move() {
    let mut oracle = shell_oracle("echo 1 4 3 4; exit 3", Duration::from_secs(5));
    assert_eq!(oracle.request_move("empty"), None);

    let mut oracle = shell_oracle("echo thinking...", Duration::from_secs(5));
    assert_eq!(oracle.request_move("empty"), None);
}

#[test]
fn test_configured_oracle_drives_selector() {
    let settings = EngineSettings {
        oracle: Some(OracleSettings {
            args: vec!["-c".to_string(), "echo 0 1 2 2".to_string()],
            ..OracleSettings::new("sh")
        }),
        rng_seed: Some(0),
        ..EngineSettings::default()
    };
    let mut selector: MoveSelector = settings.build_selector();
    let mut board = BoardState::initial();

    let chosen = selector.choose_move(&mut board, PieceColor::Black).unwrap();
    assert_eq!(chosen.source, MoveSource::Oracle);
    assert_eq!((chosen.to.row(), chosen.to.col()), (2, 2));
}
