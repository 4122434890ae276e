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


use std::collections::HashMap;
use std::sync::RwLock;

/// A copy of Unicode's `emoji-test.txt` (version 11.0), reduced to its data lines
pub const EMOJI_DATA_URL: &str =
    "https://raw.githubusercontent.com/phenixrizen/generateEmojiCodeMap/master/emoji-data.txt";

pub fn get_data_file_online(client: &reqwest::blocking::Client, url: &str) -> Result<std::io::Cursor<bytes::Bytes>, reqwest::Error> {
    // Check if we can return the file from the cache already
    let cache = (&*TABLE_CACHE as &TableCache).read();
    if let Ok(cache) = cache {
        if let Some(cached) = cache.get(url) {
            debug!("Using cached table for {}", url);
            return Ok(std::io::Cursor::new(cached.clone()));
        }
    }
    info!("Fetching {}", url);
    let bytes = client.get(url).send()?
        .error_for_status()?
        .bytes()?;

    // Insert data into the cache
    let cache = (&*TABLE_CACHE as &TableCache).write();
    if let Ok(mut cache) = cache {
        // We need to check again here, since we didn't hold the Lock for some time
        cache.entry(url.to_owned())
            .or_insert_with(|| bytes.clone());
    }

    Ok(std::io::Cursor::new(bytes))
}

type TableCache = RwLock<HashMap<String, bytes::Bytes>>;

lazy_static! {
    static ref TABLE_CACHE: TableCache =
        RwLock::new(HashMap::with_capacity(4));
}
