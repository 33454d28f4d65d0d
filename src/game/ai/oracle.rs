//! External move oracle
//!
//! An oracle is an outside collaborator that may suggest a move for the
//! automated side. Its answers are advisory: [`super::MoveSelector`] re-runs
//! the full legality pipeline on whatever comes back.
//!
//! # Wire Format
//!
//! The request is the board as text, rows 0 to 7, one token per square:
//!
//! ```text
//! black-rook black-knight ... black-rook / black-pawn ... / empty empty ... / ...
//! ```
//!
//! Occupied squares are `<color>-<kind>`, empty squares are `empty`, squares
//! are separated by a space and rows by ` / `. The response is four
//! whitespace-separated integers `from_row from_col to_row to_col`. Anything
//! else is treated as no answer.

use crate::game::components::Square;
use crate::game::rules::BoardState;
use crossbeam_channel::RecvTimeoutError;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Token for an empty square in the serialized board
pub const EMPTY_TOKEN: &str = "empty";

/// Separator between rows in the serialized board
pub const ROW_SEPARATOR: &str = " / ";

/// Default bounded wait for a subprocess oracle
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Raw coordinates as returned by an oracle, not yet bounds-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleMove {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl OracleMove {
    /// Both endpoints as on-board squares, `None` if either is off the board
    pub fn squares(&self) -> Option<(Square, Square)> {
        Some((
            Square::new(self.from_row, self.from_col)?,
            Square::new(self.to_row, self.to_col)?,
        ))
    }
}

/// Injectable move-suggestion strategy
///
/// Implementations must not fail loudly: any problem is reported as `None`.
pub trait MoveOracle {
    fn request_move(&mut self, serialized_board: &str) -> Option<OracleMove>;
}

/// Serialize the board for an oracle request
pub fn serialize_board(board_state: &BoardState) -> String {
    board_state
        .snapshot()
        .iter()
        .map(|rank| {
            rank.iter()
                .map(|square| match square {
                    Some(piece) => piece.to_string(),
                    None => EMPTY_TOKEN.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// Parse an oracle response: exactly four whitespace-separated integers
pub fn parse_move_response(response: &str) -> Option<OracleMove> {
    let values = response
        .split_whitespace()
        .map(|token| token.parse::<i32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match values.as_slice() {
        &[from_row, from_col, to_row, to_col] => Some(OracleMove {
            from_row,
            from_col,
            to_row,
            to_col,
        }),
        _ => None,
    }
}

/// Failures talking to a subprocess oracle
///
/// Never escapes this module; [`ProcessOracle`] downgrades every variant to
/// "no move".
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("failed to run oracle: {0}")]
    Io(#[from] std::io::Error),

    #[error("oracle stdout was not captured")]
    NoStdout,

    #[error("oracle did not answer within {0:?}")]
    Timeout(Duration),

    #[error("oracle exited with {0}")]
    ExitStatus(ExitStatus),

    #[error("oracle reader thread disconnected")]
    Disconnected,
}

/// Oracle backed by an external program
///
/// The program is run with the configured arguments followed by the
/// serialized board as the last argument, and must print its move on stdout.
/// The child is killed if it does not finish within the timeout.
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessOracle {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the program once and collect its stdout
    ///
    /// The whole call, including waiting for the child to exit, is bounded
    /// by the timeout. On timeout the child is killed. The reader thread
    /// holds the stdout pipe and finishes when every writer has closed it,
    /// so a grandchild that inherited the pipe can keep that thread alive
    /// after this call returns.
    fn run(&self, serialized_board: &str) -> Result<String, OracleError> {
        let deadline = Instant::now() + self.timeout;
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(serialized_board)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let Some(mut stdout) = child.stdout.take() else {
            kill_and_reap(&mut child);
            return Err(OracleError::NoStdout);
        };
        let (tx, rx) = crossbeam_channel::bounded(1);
        thread::spawn(move || {
            let mut output = String::new();
            let result = stdout.read_to_string(&mut output).map(|_| output);
            // The receiver is gone if we already timed out
            let _ = tx.send(result);
        });

        let output = match rx.recv_deadline(deadline) {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                kill_and_reap(&mut child);
                return Err(err.into());
            }
            Err(RecvTimeoutError::Timeout) => {
                kill_and_reap(&mut child);
                return Err(OracleError::Timeout(self.timeout));
            }
            Err(RecvTimeoutError::Disconnected) => {
                kill_and_reap(&mut child);
                return Err(OracleError::Disconnected);
            }
        };

        let status = match wait_until(&mut child, deadline) {
            Ok(status) => status,
            Err(err) => {
                kill_and_reap(&mut child);
                return Err(err.into());
            }
        };
        match status {
            Some(status) if status.success() => Ok(output),
            Some(status) => Err(OracleError::ExitStatus(status)),
            None => {
                kill_and_reap(&mut child);
                Err(OracleError::Timeout(self.timeout))
            }
        }
    }
}

/// Poll interval while waiting for a child that already closed stdout
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Wait for `child` to exit, giving up at `deadline`
fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(EXIT_POLL_INTERVAL.min(deadline - now));
    }
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl MoveOracle for ProcessOracle {
    fn request_move(&mut self, serialized_board: &str) -> Option<OracleMove> {
        match self.run(serialized_board) {
            Ok(output) => {
                let parsed = parse_move_response(&output);
                if parsed.is_none() {
                    warn!("[ORACLE] Unparseable response {:?}", output.trim());
                } else {
                    debug!("[ORACLE] {:?} answered {:?}", self.program, output.trim());
                }
                parsed
            }
            Err(err) => {
                warn!("[ORACLE] {:?}: {err}", self.program);
                None
            }
        }
    }
}
