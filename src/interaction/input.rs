use std::io::{self, BufRead, Write};

/// Literal that ends the session at any prompt, compared ignoring case
pub const QUIT_COMMAND: &str = "quit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted {
    /// The user asked to leave, or input ran out
    Quit,
    /// Anything else, with the line terminator removed
    Line(String),
}

impl Prompted {
    /// Classify a raw line
    pub fn from_line(line: &str) -> Self {
        let text = line.trim_end_matches(&['\r', '\n'][..]);
        if text.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
            Prompted::Quit
        } else {
            Prompted::Line(text.to_string())
        }
    }
}

/// Line-oriented request/response primitive
pub trait Input {
    fn next_line(&mut self) -> io::Result<Prompted>;
}

/// Prompts on a writer and reads lines from a buffered reader
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Input for Console<R, W> {
    fn next_line(&mut self) -> io::Result<Prompted> {
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Prompted::Quit);
        }
        Ok(Prompted::from_line(&line))
    }
}

/// Replays a fixed list of lines, then behaves like end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Prompted> {
        Ok(self
            .lines
            .pop_front()
            .map(|line| Prompted::from_line(&line))
            .unwrap_or(Prompted::Quit))
    }
}
