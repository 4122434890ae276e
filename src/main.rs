/*
 * Copyright 2019 Constantin A.
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

use log::{error, LevelFilter};

use emoji_codemap::config::{generate, GeneratorConfig};

fn main() {
    let matches = GeneratorConfig::app().get_matches();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    );
    if matches.is_present("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = GeneratorConfig::from_matches(&matches);

    if let Err(err) = generate(&config) {
        error!("{}", err);
        std::process::exit(1);
    }
}
