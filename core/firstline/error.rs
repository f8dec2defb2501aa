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

//! Errors of the firstline binary
use nix::errno::Errno;
use snafu::prelude::*;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to load configuration: {}", source))]
    Confique { source: confique::Error },

    #[snafu(display("Configuration file '{}' does not exist", path))]
    ConfigNotFound { path: String },

    #[snafu(display("Invalid log level: '{}'", level))]
    InvalidLogLevel { level: String },

    #[snafu(display("Failed to write output: {}", source))]
    Output { source: std::io::Error },

    #[snafu(context(false), display("{}", source))]
    Util { source: basic::Error },
}

impl Error {
    /// Translate the error to the process exit code.
    pub fn get_errno(&self) -> i32 {
        let errno = match self {
            Error::Confique { source: _ } => Errno::EINVAL as i32,
            Error::ConfigNotFound { path: _ } => Errno::ENOENT as i32,
            Error::InvalidLogLevel { level: _ } => Errno::EINVAL as i32,
            Error::Output { source } => source.raw_os_error().unwrap_or(Errno::EIO as i32),
            Error::Util { source } => source.get_errno(),
        };
        if errno == 0 {
            1
        } else {
            errno
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
