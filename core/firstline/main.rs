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

//! Print the first line of a file.

mod config;
mod error;

use basic::file_util::read_first_line;
use clap::Parser;
use config::FirstLineConfig;
use constants::FIRSTLINE_NAME;
use error::*;
use snafu::ResultExt;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

/// parse program arguments
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File whose first line is printed
    #[clap(required = true, parse(from_os_str))]
    path: PathBuf,

    /// Configuration file, defaults to /etc/firstline/firstline.conf
    #[clap(short, long)]
    config: Option<String>,

    /// Log level, overrides LogLevel of the configuration
    #[clap(short, long)]
    log_level: Option<String>,
}

fn init_logger(config: &FirstLineConfig, level_override: Option<&str>) -> Result<()> {
    let level_str = level_override.unwrap_or(&config.LogLevel);
    let level = log::Level::from_str(level_str).map_err(|_| Error::InvalidLogLevel {
        level: level_str.to_string(),
    })?;

    log::init_log(FIRSTLINE_NAME, level, config.log_targets(), &config.LogFile);
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = FirstLineConfig::load(args.config.as_deref())?;
    init_logger(&config, args.log_level.as_deref())?;
    log::debug!("Loaded configuration: {:?}", config);

    let line = read_first_line(&args.path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line).context(OutputSnafu)?;
    out.flush().context(OutputSnafu)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::debug!("{} failed: {:?}", args.path.display(), e);
        eprintln!("{}: {}", FIRSTLINE_NAME, e);
        exit(e.get_errno());
    }
}
