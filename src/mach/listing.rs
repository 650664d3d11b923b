use super::{LINE_BASE, LINE_STEP, MAX_PROGRAM_LINES};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramLine {
    number: u32,
    content: String,
}

impl ProgramLine {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for ProgramLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.content)
    }
}

/// ## A loaded program
///
/// Cloning is cheap so the runner can walk the lines while commands
/// mutate the rest of the runtime.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<str>,
    lines: Arc<Vec<ProgramLine>>,
}

impl Listing {
    /// Number the lines of a program file. Lines past the limit are dropped.
    pub fn load<I, S>(source: &str, lines: I) -> Listing
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<ProgramLine> = lines
            .into_iter()
            .take(MAX_PROGRAM_LINES)
            .zip((0..).map(|index| LINE_BASE + LINE_STEP * index))
            .map(|(line, number)| ProgramLine {
                number,
                content: line
                    .as_ref()
                    .trim_end_matches(|c: char| c == '\n' || c == '\r')
                    .to_string(),
            })
            .collect();
        Listing {
            source: source.into(),
            lines: Arc::new(lines),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lines(&self) -> std::slice::Iter<'_, ProgramLine> {
        self.lines.iter()
    }

    pub fn line(&self, number: i32) -> Option<&ProgramLine> {
        self.lines
            .iter()
            .find(|line| i64::from(line.number) == i64::from(number))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
