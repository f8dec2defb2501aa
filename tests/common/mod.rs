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

use std::{
    ffi::OsStr,
    io::Write,
    path::Path,
    process::{Command, Output},
};
use tempfile::NamedTempFile;

/// write a config file logging only to the given file
pub fn config_logging_to(log_file: &Path) -> NamedTempFile {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "LogLevel = \"debug\"").unwrap();
    writeln!(config, "LogTarget = \"file\"").unwrap();
    writeln!(config, "LogFile = \"{}\"", log_file.display()).unwrap();
    config.flush().unwrap();
    config
}

/// run the firstline binary isolated from the FIRSTLINE_* environment
pub fn run_firstline<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_firstline"))
        .args(args)
        .env_remove("FIRSTLINE_LOG_LEVEL")
        .env_remove("FIRSTLINE_LOG_TARGET")
        .env_remove("FIRSTLINE_LOG_FILE")
        .output()
        .expect("failed to execute firstline!")
}
