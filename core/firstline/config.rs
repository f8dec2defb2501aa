// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//
#![allow(non_snake_case)]

use crate::error::*;
use confique::{Config, FileFormat, Partial};
use constants::FIRSTLINE_CONFIG;
use snafu::prelude::*;
use std::path::Path;

#[derive(Config, Debug)]
pub struct FirstLineConfig {
    #[config(default = "warn", env = "FIRSTLINE_LOG_LEVEL")]
    pub LogLevel: String,
    #[config(default = "console", env = "FIRSTLINE_LOG_TARGET")]
    pub LogTarget: String,
    #[config(default = "/var/log/firstline/firstline.log", env = "FIRSTLINE_LOG_FILE")]
    pub LogFile: String,
}

impl FirstLineConfig {
    /// Load the configuration, environment first, then the file, then defaults.
    ///
    /// An explicitly given file has to exist, the default one may be absent.
    pub fn load(file: Option<&str>) -> Result<FirstLineConfig> {
        type ConfigPartial = <FirstLineConfig as Config>::Partial;
        if let Some(path) = file {
            ensure!(Path::new(path).exists(), ConfigNotFoundSnafu { path });
        }

        let mut partial: ConfigPartial = Partial::from_env().context(ConfiqueSnafu)?;
        let path = file.unwrap_or(FIRSTLINE_CONFIG);
        let from_file = confique::File::with_format(path, FileFormat::Toml)
            .load()
            .context(ConfiqueSnafu)?;
        partial = partial.with_fallback(from_file);
        partial = partial.with_fallback(ConfigPartial::default_values());
        FirstLineConfig::from_partial(partial).context(ConfiqueSnafu)
    }

    /// The configured log targets, separated by space or '-'.
    pub fn log_targets(&self) -> Vec<&str> {
        self.LogTarget
            .split(&[' ', '-'][..])
            .filter(|t| !t.is_empty())
            .collect()
    }
}
