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

//! This crate provides common, functions for unit tests
use std::io::{self, ErrorKind};
use walkdir::WalkDir;

/// get the root path of the crate invoking the macro
///
/// Expands at the call site, so `CARGO_MANIFEST_DIR` is the caller's.
#[macro_export]
macro_rules! get_crate_root {
    () => {
        ::std::path::PathBuf::from(::std::env!("CARGO_MANIFEST_DIR"))
    };
}

/// count the file descriptors the current process holds
///
/// The directory handle used for the walk is counted too, so only compare
/// results of this function with each other.
pub fn open_fd_count() -> io::Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new("/proc/self/fd").min_depth(1).max_depth(1) {
        match entry {
            Ok(_) => count += 1,
            /* the walk's own fd may vanish between readdir and stat */
            Err(e) if e.io_error().map(|e| e.kind()) == Some(ErrorKind::NotFound) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(count)
}
