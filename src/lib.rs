//! A Brainfuck interpreter with an unbounded, chunked memory tape.
//!
//! This crate executes the eight-instruction tape language directly from its
//! source stream: no AST, no bytecode. The memory tape grows lazily in both
//! directions in 1024-cell chunks, so programs are never limited to a fixed
//! cell count and never fall off either end.
//!
//! Behaviors:
//! - Cells are single bytes with wraparound arithmetic (255 + 1 = 0).
//! - Input `,` reads one byte from the input stream; end-of-input is a fatal
//!   I/O error, the cell is never silently zeroed.
//! - Output `.` writes the current cell as one byte, no translation.
//! - Loops re-execute by seeking the program stream back to the byte after
//!   the `[`; a zero-entry loop body is skipped by a nesting-aware scan.
//! - Any byte outside `><+-.,[]` is a comment.
//!
//! Quick start:
//!
//! ```
//! use std::io::Cursor;
//! use bftape::Interpreter;
//!
//! let mut output = Vec::new();
//! let mut interp = Interpreter::new(Cursor::new("+++."), Cursor::new(""), &mut output);
//! interp.run().expect("program should run");
//! drop(interp);
//! assert_eq!(output, [3]);
//! ```

use std::io::{self, Read, Seek};

pub mod interpreter;
pub mod tape;

pub use interpreter::{InterpretError, Interpreter};
pub use tape::{CHUNK_LEN, Tape};

/// Run a program from a seekable stream against the process's own stdin and
/// stdout, returning a status code instead of a [`Result`].
///
/// Status codes: 0 success, 1 tape allocation failure, 2 stream I/O error,
/// 5 unterminated `[`, 6 unmatched `]`. See [`InterpretError::status`].
pub fn interpret<P: Read + Seek>(program: P) -> i32 {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match Interpreter::new(program, stdin, stdout).run() {
        Ok(()) => 0,
        Err(err) => err.status(),
    }
}
