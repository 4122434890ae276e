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

use crate::render::RenderError;

/// Anything that stops a whole generation run
#[derive(Debug)]
pub enum GenerationError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// The compiled table couldn't be rendered into source code
    Render(RenderError),
    /// The compiled pattern is not accepted by the `regex` crate
    InvalidPattern(regex::Error),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Io(error) => write!(f, "I/O error: {}", error),
            GenerationError::Render(error) => write!(f, "rendering failed: {}", error),
            GenerationError::InvalidPattern(error) => write!(f, "invalid emoji pattern: {}", error),
            #[cfg(feature = "online")]
            GenerationError::Reqwest(error) => write!(f, "fetching the emoji table failed: {}", error),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Io(error) => Some(error),
            GenerationError::Render(error) => Some(error),
            GenerationError::InvalidPattern(error) => Some(error),
            #[cfg(feature = "online")]
            GenerationError::Reqwest(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        GenerationError::Io(err)
    }
}

impl From<RenderError> for GenerationError {
    fn from(err: RenderError) -> Self {
        GenerationError::Render(err)
    }
}

impl From<regex::Error> for GenerationError {
    fn from(err: regex::Error) -> Self {
        GenerationError::InvalidPattern(err)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Reqwest(err)
    }
}
