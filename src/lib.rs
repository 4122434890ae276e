/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
 */
//! Generates a regular expression matching all emojis of an emoji table
//! and a lookup table for their descriptions, rendered as Rust code.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Parsing emoji tables and compiling them into a pattern and a lookup table
pub mod tables;
/// Turning a compiled table into source code
pub mod render;
/// Errors that stop a whole generation run
pub mod errors;
/// Command line configuration and the whole generation run
pub mod config;
