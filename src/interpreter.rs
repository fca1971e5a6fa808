//! The execution engine: a stream-driven dispatch loop over the eight
//! Brainfuck instructions.
//!
//! The interpreter never builds an AST or bytecode. It pulls one byte at a
//! time from a seekable program stream and dispatches on it; loops are handled
//! by remembering the stream position just past each `[` and seeking back to
//! it whenever the matching `]` fires with a non-zero cell. Skipping a dead
//! loop body is a forward scan that tracks bracket nesting depth. Any byte
//! outside the instruction set is a comment.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::tape::{AllocError, Tape};

/// Errors that abort an interpreter run.
///
/// Every variant maps to a fixed status code via [`InterpretError::status`];
/// success is status 0.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// The tape could not grow (status 1).
    #[error("out of memory while growing the tape")]
    OutOfMemory,

    /// The program, input, or output stream failed, including end-of-input
    /// during `,` (status 2).
    #[error("stream I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `[` was entered and the program ended before its matching `]`
    /// (status 5).
    #[error("'[' with no matching ']' before end of program")]
    UnterminatedLoop,

    /// A `]` executed with no `[` open (status 6).
    #[error("']' with no matching '['")]
    UnmatchedClose,
}

impl From<AllocError> for InterpretError {
    fn from(_: AllocError) -> Self {
        InterpretError::OutOfMemory
    }
}

impl InterpretError {
    /// The status code this error reports to the caller.
    pub fn status(&self) -> i32 {
        match self {
            InterpretError::OutOfMemory => 1,
            InterpretError::Io(_) => 2,
            InterpretError::UnterminatedLoop => 5,
            InterpretError::UnmatchedClose => 6,
        }
    }
}

/// A single interpreter run over one program stream.
///
/// The interpreter owns its [`Tape`] and loop stack for the whole run, so runs
/// are independent and testable in isolation. The program stream must be
/// seekable; input and output are plain byte streams. All three are supplied
/// by the caller, which keeps ownership of them (the program file is opened
/// and closed by the CLI shell, not here).
pub struct Interpreter<P, I, O> {
    program: P,
    input: I,
    output: O,
    tape: Tape,
    loops: Vec<u64>,
}

impl<P, I, O> Interpreter<P, I, O>
where
    P: Read + Seek,
    I: Read,
    O: Write,
{
    /// Build a run over `program` (seekable source), `input` (`,` bytes), and
    /// `output` (`.` bytes). The caller keeps ownership of all three streams.
    pub fn new(program: P, input: I, output: O) -> Self {
        Self {
            program,
            input,
            output,
            tape: Tape::new(),
            loops: Vec::new(),
        }
    }

    /// The tape as of the last executed instruction.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Execute the program until end-of-stream or the first error.
    ///
    /// Reaching end-of-stream with a loop still open is an unterminated-loop
    /// error, whether the `[` was entered or its body was being skipped. The
    /// output stream is flushed on normal completion. The tape and loop stack
    /// are released when the interpreter is dropped, on every exit path.
    pub fn run(&mut self) -> Result<(), InterpretError> {
        while let Some(op) = read_byte(&mut self.program)? {
            match op {
                b'>' => self.tape.shift_right()?,
                b'<' => self.tape.shift_left()?,
                b'+' => self.tape.increment(),
                b'-' => self.tape.decrement(),
                b'.' => self.output.write_all(&[self.tape.read_cell()])?,
                b',' => self.read_input()?,
                b'[' => self.loop_open()?,
                b']' => self.loop_close()?,
                _ => {} // comment
            }
        }
        if !self.loops.is_empty() {
            return Err(InterpretError::UnterminatedLoop);
        }
        self.output.flush()?;
        Ok(())
    }

    /// `,`: one byte from the input stream into the current cell.
    /// End-of-input is fatal; the cell is never silently zeroed.
    fn read_input(&mut self) -> Result<(), InterpretError> {
        match read_byte(&mut self.input)? {
            Some(byte) => {
                self.tape.write_cell(byte);
                Ok(())
            }
            None => Err(InterpretError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input during ','",
            ))),
        }
    }

    /// `[`: with a non-zero cell, push the position just past the bracket as
    /// the loop's re-entry point. With a zero cell, scan forward over the body
    /// tracking nesting depth until the matching `]`.
    fn loop_open(&mut self) -> Result<(), InterpretError> {
        if self.tape.read_cell() != 0 {
            let reentry = self.program.stream_position()?;
            self.loops.push(reentry);
            return Ok(());
        }
        let mut depth = 1u32;
        while depth > 0 {
            // A stream error surfaces here as Io, ahead of UnterminatedLoop.
            match read_byte(&mut self.program)? {
                Some(b'[') => depth += 1,
                Some(b']') => depth -= 1,
                Some(_) => {}
                None => return Err(InterpretError::UnterminatedLoop),
            }
        }
        Ok(())
    }

    /// `]`: with a non-zero cell, seek back to the re-entry point on top of
    /// the loop stack without popping it. With a zero cell, pop it and fall
    /// through past the bracket.
    fn loop_close(&mut self) -> Result<(), InterpretError> {
        let Some(&reentry) = self.loops.last() else {
            return Err(InterpretError::UnmatchedClose);
        };
        if self.tape.read_cell() != 0 {
            self.program.seek(SeekFrom::Start(reentry))?;
        } else {
            self.loops.pop();
        }
        Ok(())
    }
}

/// Read one byte from a stream; `Ok(None)` at end-of-stream.
fn read_byte<R: Read>(stream: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
