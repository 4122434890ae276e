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
 */

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::errors::GenerationError;
use crate::render::{render, RenderConfig, DEFAULT_MODULE_NAME, DEFAULT_OUTPUT_FILE};
use crate::tables::code_map::CompiledTable;
#[cfg(feature = "online")]
use crate::tables::online;

/// Where the emoji table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    #[cfg(feature = "online")]
    Online(String),
    File(PathBuf),
}

impl TableSource {
    pub fn load(&self) -> Result<CompiledTable, GenerationError> {
        match self {
            #[cfg(feature = "online")]
            TableSource::Online(url) => {
                let client = reqwest::blocking::Client::new();
                let reader = online::get_data_file_online(&client, url)?;
                Ok(CompiledTable::from_reader(reader)?)
            }
            TableSource::File(path) => {
                info!("Reading {}", path.display());
                let reader = BufReader::new(File::open(path)?);
                Ok(CompiledTable::from_reader(reader)?)
            }
        }
    }
}

/// Everything needed for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: TableSource,
    pub render: RenderConfig,
    /// Compile the pattern with the `regex` crate before writing anything
    pub check_pattern: bool,
}

impl GeneratorConfig {
    pub fn app<'a, 'b>() -> App<'a, 'b> {
        let app = App::new("emoji_codemap")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Constantin A. <emoji.builder@c1710.de>")
            .about("Generates an emoji pattern and description table from an emoji table")
            .arg(Arg::with_name("pkg")
                .short("p")
                .long("pkg")
                .value_name("NAME")
                .help("The name of the generated module")
                .takes_value(true)
                .default_value(DEFAULT_MODULE_NAME)
                .required(false))
            .arg(Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("The file to write the generated code to")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT_FILE)
                .required(false))
            .arg(Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Read the emoji table from a local file")
                .takes_value(true)
                .required(cfg!(not(feature = "online"))))
            .arg(Arg::with_name("check")
                .long("check")
                .help("Make sure the generated pattern is a valid regular expression")
                .takes_value(false)
                .required(false))
            .arg(Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable debug output")
                .takes_value(false)
                .required(false));

        #[cfg(feature = "online")]
        let app = app.arg(Arg::with_name("url")
            .short("u")
            .long("url")
            .value_name("URL")
            .help("The URL of the emoji table (ignored if --input is given)")
            .takes_value(true)
            .default_value(online::EMOJI_DATA_URL)
            .required(false));

        app
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let source = match matches.value_of("input") {
            Some(path) => TableSource::File(PathBuf::from(path)),
            #[cfg(feature = "online")]
            None => TableSource::Online(matches.value_of("url")
                .unwrap_or(online::EMOJI_DATA_URL)
                .to_owned()),
            // --input is required without the online feature
            #[cfg(not(feature = "online"))]
            None => unreachable!("no input file given"),
        };
        let render = RenderConfig {
            module_name: matches.value_of("pkg").unwrap_or(DEFAULT_MODULE_NAME).to_owned(),
            output_path: PathBuf::from(matches.value_of("output").unwrap_or(DEFAULT_OUTPUT_FILE)),
        };

        Self {
            source,
            render,
            check_pattern: matches.is_present("check"),
        }
    }
}

/// Reads the table, compiles it, renders it and writes it to the output file,
/// replacing whatever has been there before.
pub fn generate(config: &GeneratorConfig) -> Result<CompiledTable, GenerationError> {
    let table = config.source.load()?;

    if config.check_pattern {
        let regex = table.regex()?;
        debug!("Pattern compiled ({} bytes)", regex.as_str().len());
    }

    let source = render(&table, &config.render)?;

    std::fs::write(&config.render.output_path, source)?;
    info!("Wrote {} emojis to {}", table.len(), config.render.output_path.display());

    Ok(table)
}
