// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use seabattle::game::{MatchState, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contents of the save file: the match and which side the human plays.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub human: Side,
    pub state: MatchState,
}

impl SaveFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open save file '{}'", path.display()))?;
        let save: SaveFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("'{}' is not a valid save file", path.display()))?;
        debug!(path = %path.display(), human = %save.human, "Loaded save file");
        Ok(save)
    }

    pub fn store(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Could not create save file '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.display(), "Stored save file");
        Ok(())
    }
}
