/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! Compiles parsed [EmojiRecord]s into one matching pattern and a lookup table.

use std::collections::HashMap;
use std::io::BufRead;

use regex::Regex;

use crate::tables::errors::ParseFailure;
use crate::tables::record::{parse_line, EmojiRecord};

/// The result of compiling an emoji table:
/// An alternation of all emoji sequences and a mapping from the emojis to their descriptions.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CompiledTable {
    pattern: String,
    code_map: HashMap<String, String>,
}

impl CompiledTable {
    /// All match fragments, joined by `|` in the order of the table
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Maps each emoji to its description.
    ///
    /// **Important**: The iteration order of this map is arbitrary,
    /// sort it if you need a stable output.
    pub fn code_map(&self) -> &HashMap<String, String> {
        &self.code_map
    }

    pub fn len(&self) -> usize {
        self.code_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_map.is_empty()
    }

    /// Compiles the pattern with the `regex` crate.
    ///
    /// # Examples
    /// ```
    /// use emoji_codemap::tables::code_map::compile_lines;
    ///
    /// let table = compile_lines(vec![
    ///     "1f600 ; fully-qualified # 😀 grinning face",
    ///     "0031 fe0f 20e3 ; fully-qualified # 1️⃣ keycap: 1",
    /// ]);
    /// let regex = table.regex().unwrap();
    ///
    /// assert!(regex.is_match("Hello 😀"));
    /// assert!(regex.is_match("1\u{fe0f}\u{20e3}"));
    /// assert!(!regex.is_match("1"));
    /// ```
    pub fn regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.pattern)
    }

    /// Reads an emoji table line by line and compiles it.
    ///
    /// Empty lines and comments (starting with `#`) are skipped before parsing,
    /// so raw `emoji-test.txt` files can be used directly.
    /// Lines that aren't valid UTF-8 are skipped like any other malformed line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, std::io::Error> {
        let mut compiler = TableCompiler::new();
        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = match String::from_utf8(line) {
                Ok(line) => line,
                Err(error) => {
                    warn!("Malformed line ({}): {}", error.utf8_error(), String::from_utf8_lossy(error.as_bytes()));
                    compiler.skipped += 1;
                    continue;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                debug!("Skipping comment: {}", trimmed);
                continue;
            }
            let _ = compiler.push_line(&line);
        }
        Ok(compiler.finish())
    }
}

impl From<CompiledTable> for (String, HashMap<String, String>) {
    fn from(table: CompiledTable) -> Self {
        (table.pattern, table.code_map)
    }
}

/// Builds a [CompiledTable] from records, one after the other.
///
/// Records have to be pushed in the order of the table; the pattern keeps that order
/// and duplicate emojis get the description of their last occurrence.
#[derive(Debug, Default)]
pub struct TableCompiler {
    table: CompiledTable,
    records: usize,
    skipped: usize,
}

impl TableCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EmojiRecord) {
        let (match_fragment, key, description) = record.into_parts();
        if self.records > 0 {
            self.table.pattern.push('|');
        }
        self.table.pattern.push_str(&match_fragment);
        self.table.code_map.insert(key, description);
        self.records += 1;
    }

    /// Parses a line and adds it to the table.
    /// Malformed lines are logged and skipped.
    pub fn push_line(&mut self, line: &str) -> Result<(), ParseFailure> {
        match parse_line(line) {
            Ok(record) => {
                debug!("Parsed: {:?}", record);
                self.push(record);
                Ok(())
            }
            Err(failure) => {
                warn!("Malformed line ({}): {}", failure, line);
                self.skipped += 1;
                Err(failure)
            }
        }
    }

    /// The number of records that made it into the table so far
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> CompiledTable {
        info!("Compiled {} emoji records into {} entries ({} lines skipped)",
              self.records,
              self.table.code_map.len(),
              self.skipped);
        self.table
    }
}

/// Compiles already parsed records, in order.
pub fn compile<I>(records: I) -> CompiledTable
    where I: IntoIterator<Item=EmojiRecord> {
    let mut compiler = TableCompiler::new();
    records.into_iter().for_each(|record| compiler.push(record));
    compiler.finish()
}

/// Parses and compiles lines, skipping those that cannot be parsed.
pub fn compile_lines<I, S>(lines: I) -> CompiledTable
    where I: IntoIterator<Item=S>, S: AsRef<str> {
    let mut compiler = TableCompiler::new();
    for line in lines {
        // Failures are already logged
        let _ = compiler.push_line(line.as_ref());
    }
    compiler.finish()
}
