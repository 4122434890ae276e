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
//! Parsing of single emoji table lines.
//!
//! The syntax of these lines is:
//! `Codepoint(s) ; Status # Emoji Description`,
//! e.g. `1F600 ; fully-qualified # 😀 grinning face`

use std::convert::TryFrom;

use regex::Regex;

use crate::tables::errors::ParseFailure;

/// A single entry of an emoji table.
///
/// It consists of the regex fragment matching the emoji's codepoint sequence,
/// the emoji itself and its description.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EmojiRecord {
    match_fragment: String,
    key: String,
    description: String,
}

impl EmojiRecord {
    pub fn new<F, K, D>(match_fragment: F, key: K, description: D) -> Self
        where F: Into<String>, K: Into<String>, D: Into<String> {
        Self {
            match_fragment: match_fragment.into(),
            key: key.into(),
            description: description.into(),
        }
    }

    /// The escaped codepoint sequence, e.g. `\x{0031}\x{fe0f}\x{20e3}`
    pub fn match_fragment(&self) -> &str {
        &self.match_fragment
    }

    /// The emoji as it appears in the table
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.match_fragment, self.key, self.description)
    }
}

impl TryFrom<&str> for EmojiRecord {
    type Error = ParseFailure;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        parse_line(line)
    }
}

/// Parses one line of an emoji table.
///
/// The whole line gets lower-cased first, so the description will be lower-case as well.
///
/// # Examples
/// ```
/// use emoji_codemap::tables::record::parse_line;
///
/// let record = parse_line("1F600 ; fully-qualified # 😀 Grinning Face").unwrap();
///
/// assert_eq!(record.match_fragment(), r"\x{1f600}");
/// assert_eq!(record.key(), "😀");
/// assert_eq!(record.description(), " grinning face");
/// ```
pub fn parse_line(line: &str) -> Result<EmojiRecord, ParseFailure> {
    let line = line.to_lowercase();

    let match_fragment = match_fragment(&line)?;

    // `#` is ASCII, so the next byte is always a character boundary
    let emoji_part = line.find('#')
        .map(|index| &line[index + 1..])
        .ok_or(ParseFailure::MissingEmojiField)?;
    let key = emoji_part.split(' ')
        .nth(1)
        .filter(|key| !key.is_empty())
        .ok_or(ParseFailure::MissingEmojiField)?;

    let description = description(emoji_part, key)?;

    Ok(EmojiRecord::new(match_fragment, key, description))
}

/// Builds the regex fragment from everything in front of the first `;`.
/// An empty codepoint field results in an empty fragment.
fn match_fragment(line: &str) -> Result<String, ParseFailure> {
    lazy_static! {
        static ref HEX_SEQUENCE: Regex = Regex::new(r"^[a-fA-F0-9]{1,8}$").unwrap();
    }

    let codepoints = line.split(';').next().unwrap_or_default();
    codepoints.split_whitespace()
        .map(|token| if HEX_SEQUENCE.is_match(token) {
            Ok(format!(r"\x{{{}}}", token))
        } else {
            Err(ParseFailure::MalformedCodepointToken(token.to_owned()))
        })
        .collect()
}

/// Takes everything behind the emoji as its description.
///
/// The emoji is located by searching for its first codepoint and skipping its full byte length.
/// If that codepoint already appears earlier (e.g. in a preceding comment),
/// the description will be cut at the wrong position.
fn description<'a>(emoji_part: &'a str, key: &str) -> Result<&'a str, ParseFailure> {
    let first = key.chars().next().ok_or(ParseFailure::MissingEmojiField)?;
    let start = emoji_part.find(first).ok_or(ParseFailure::MissingEmojiField)?;
    emoji_part.get(start + key.len()..)
        .ok_or(ParseFailure::DescriptionOutOfBounds)
}
