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

use std::fmt::{Display, Formatter};

/// The reasons why a single line of an emoji table could not be turned into a record.
///
/// None of these are fatal; the line is simply skipped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseFailure {
    /// There's no `#`-section with an emoji in it
    MissingEmojiField,
    /// A token in front of the `;` isn't a hexadecimal codepoint
    MalformedCodepointToken(String),
    /// The description would start in the middle of a character
    DescriptionOutOfBounds,
}

impl Display for ParseFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailure::MissingEmojiField => write!(f, "missing emoji field"),
            ParseFailure::MalformedCodepointToken(token) =>
                write!(f, "malformed codepoint token {:?}", token),
            ParseFailure::DescriptionOutOfBounds =>
                write!(f, "description does not start at a character boundary"),
        }
    }
}

impl std::error::Error for ParseFailure {}
