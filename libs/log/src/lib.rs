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

//! Process-wide logger of the firstline tools.
//!
//! Records go through the `log` facade, so the usual `log::info!` family
//! works everywhere. [`init_log`] may be called again at any time to switch
//! targets or the level.
pub mod logger;

/// reexport the facade macros and level
pub use log::Level;
pub use log::{debug, error, info, trace, warn};

pub use logger::init_log;
