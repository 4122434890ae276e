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
//! Renders a [CompiledTable] into a formatted Rust module.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use itertools::Itertools;
use proc_macro2::Literal;
use quote::quote;

use crate::tables::code_map::CompiledTable;

pub const DEFAULT_MODULE_NAME: &str = "emoji_codemap";
pub const DEFAULT_OUTPUT_FILE: &str = "emoji_codemap.rs";

const HEADER: &str = "\
// NOTE: THIS FILE WAS PRODUCED BY THE
// EMOJI_CODEMAP CODE GENERATION TOOL
// DO NOT EDIT

";

/// Where and under which name the generated code ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub module_name: String,
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_name: String::from(DEFAULT_MODULE_NAME),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[derive(Debug)]
pub enum RenderError {
    /// The module name is not a Rust identifier
    InvalidModuleName(String),
    /// The generated code could not be parsed for formatting
    Syntax(syn::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidModuleName(name) => write!(f, "{:?} is not a valid module name", name),
            RenderError::Syntax(error) => write!(f, "generated code is malformed: {}", error),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidModuleName(_) => None,
            RenderError::Syntax(error) => Some(error),
        }
    }
}

impl From<syn::Error> for RenderError {
    fn from(error: syn::Error) -> Self {
        RenderError::Syntax(error)
    }
}

/// Renders the pattern and the lookup table as a Rust module and formats it.
///
/// The entries of the lookup table are sorted by their emoji so that
/// the same table always results in the same file.
///
/// # Examples
/// ```
/// use emoji_codemap::render::{render, RenderConfig};
/// use emoji_codemap::tables::code_map::compile_lines;
///
/// let table = compile_lines(vec!["1f600 ; fully-qualified # 😀 grinning face"]);
/// let source = render(&table, &RenderConfig::default()).unwrap();
///
/// assert!(source.contains("pub mod emoji_codemap"));
/// assert!(source.contains(r#""\\x{1f600}""#));
/// ```
pub fn render(table: &CompiledTable, config: &RenderConfig) -> Result<String, RenderError> {
    let module: syn::Ident = syn::parse_str(&config.module_name)
        .map_err(|_| RenderError::InvalidModuleName(config.module_name.clone()))?;

    // Literal::string takes care of escaping quotes and backslashes
    let pattern = Literal::string(table.pattern());
    let (keys, descriptions): (Vec<_>, Vec<_>) = table.code_map().iter()
        .sorted()
        .map(|(key, description)| (Literal::string(key), Literal::string(description)))
        .unzip();

    let tokens = quote! {
        pub mod #module {
            /// Matches any emoji of the source table.
            pub const EMOJI_PATTERN: &str = #pattern;

            /// Mapping from emoji to its description, sorted by emoji.
            pub static EMOJI_CODE_MAP: &[(&str, &str)] = &[
                #( (#keys, #descriptions) ),*
            ];

            /// Looks up the description of an emoji.
            pub fn description(emoji: &str) -> Option<&'static str> {
                EMOJI_CODE_MAP
                    .binary_search_by_key(&emoji, |&(key, _)| key)
                    .ok()
                    .map(|index| EMOJI_CODE_MAP[index].1)
            }
        }
    };

    debug!("Unformatted module: {}", tokens);
    let file: syn::File = syn::parse2(tokens)?;
    Ok(format!("{}{}", HEADER, prettyplease::unparse(&file)))
}
