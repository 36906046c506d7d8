//! Lazy reader for newline-delimited JSON task files.
//!
//! Each non-blank line must hold one JSON object. Lines are read one at a
//! time as the caller pulls from the iterator, so large files are never held
//! in memory.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::FusedIterator;
use std::path::Path;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Example,
};

pub struct JsonlReader<R> {
    lines: Lines<R>,
    line_number: usize,
    finished: bool,
}

impl JsonlReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::Io(format!("could not open '{}': {}", path.display(), e))
        })?;
        log::debug!("Reading examples from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            finished: false,
        }
    }

    fn parse_line(&self, line: &str) -> AppResult<Example> {
        let value: serde_json::Value =
            serde_json::from_str(line).map_err(|e| AppError::InvalidExample {
                line: self.line_number,
                message: e.to_string(),
            })?;

        Example::try_from(value).map_err(|other| AppError::InvalidExample {
            line: self.line_number,
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        })
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = AppResult<Example>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parsed = self.parse_line(line);
            if parsed.is_err() {
                self.finished = true;
            }
            return Some(parsed);
        }
    }
}

impl<R: BufRead> FusedIterator for JsonlReader<R> {}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
