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

//!
use log::{Level, Log, Metadata, Record};
use std::{
    fs::{self, File, OpenOptions},
    io::{Error, Write},
    os::unix::{
        net::UnixDatagram,
        prelude::{OpenOptionsExt, PermissionsExt},
    },
    path::{Path, PathBuf},
    sync::{Mutex, Once, RwLock},
};

const SYSLOG_PATH: &str = "/dev/log";
/* LOG_USER facility, see syslog(3) */
const SYSLOG_FACILITY_USER: u8 = 1;

static DISPATCHER: Dispatcher = Dispatcher {
    loggers: RwLock::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn local_time() -> String {
    let time: libc::time_t = unsafe { libc::time(std::ptr::null_mut()) };
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    if unsafe { libc::localtime_r(&time, &mut tm) }.is_null() {
        return String::from("0000-00-00 00:00:00");
    }
    format!(
        "{:0>4}-{:0>2}-{:0>2} {:0>2}:{:0>2}:{:0>2}",
        tm.tm_year + 1900, /* tm_year is years since 1900 */
        tm.tm_mon + 1,     /* tm_mon is months since Jan: [0, 11] */
        tm.tm_mday,
        tm.tm_hour,
        tm.tm_min,
        tm.tm_sec
    )
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {} {} {}\n",
        local_time(),
        record.module_path().unwrap_or("unknown"),
        record.level(),
        record.args()
    )
}

fn syslog_severity(level: Level) -> u8 {
    match level {
        Level::Error => 3,
        Level::Warn => 4,
        Level::Info => 6,
        Level::Debug | Level::Trace => 7,
    }
}

/// Forwards every record to the loggers configured by the latest [`init_log`].
struct Dispatcher {
    loggers: RwLock<Vec<Box<dyn Log>>>,
}

impl Dispatcher {
    fn replace(&self, loggers: Vec<Box<dyn Log>>) {
        match self.loggers.write() {
            Ok(mut v) => *v = loggers,
            Err(poisoned) => *poisoned.into_inner() = loggers,
        }
    }
}

impl Log for Dispatcher {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(loggers) = self.loggers.read() {
            for logger in loggers.iter() {
                logger.log(record);
            }
        }
    }

    fn flush(&self) {
        if let Ok(loggers) = self.loggers.read() {
            for logger in loggers.iter() {
                logger.flush();
            }
        }
    }
}

/// Writes to stderr, stdout belongs to the tool's own output.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let msg = format_record(record);
        let _ = std::io::stderr().lock().write_all(msg.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/* This is an extremely simple implementation, and only
 * supports the very basic log function. */
struct SysLogger {
    name: String,
    dgram: UnixDatagram,
}

impl SysLogger {
    fn connect(name: &str) -> Result<Self, Error> {
        let dgram = UnixDatagram::unbound()?;
        dgram.connect(SYSLOG_PATH)?;
        Ok(Self {
            name: name.to_string(),
            dgram,
        })
    }
}

impl Log for SysLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let priority = SYSLOG_FACILITY_USER * 8 + syslog_severity(record.level());
        let msg = format!(
            "<{}>{}[{}]: {}",
            priority,
            self.name,
            std::process::id(),
            record.args()
        );
        if let Err(e) = self.dgram.send(msg.as_bytes()) {
            eprintln!("Failed to send message to syslog: {}", e);
        }
    }

    fn flush(&self) {}
}

struct FileLogger {
    file: Mutex<File>,
}

impl FileLogger {
    fn open(file_path: &Path, file_mode: u32) -> Result<Self, Error> {
        if let Some(dir) = file_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
                fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .mode(file_mode)
            .open(file_path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let msg = format_record(record);
        let mut file = match self.file.lock() {
            Err(_) => return,
            Ok(v) => v,
        };
        if let Err(e) = file.write_all(msg.as_bytes()) {
            eprintln!("Failed to write log file: {}", e);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            if let Err(e) = file.flush() {
                eprintln!("Failed to flush log file: {}", e);
            }
        }
    }
}

/// Initialize the global static logger instance.
/// Available log `targets` include `file`, `syslog`, `console`.
/// `file_path` only takes effect on the `file` target.
///
/// Calling it again replaces the previous targets and level. Targets that
/// cannot be set up are reported on stderr and skipped.
///
/// # Arguments
///
/// * `name` - The application name, used as syslog identifier and in diagnostics.
/// * `level` - Log message level.
/// * `targets` - A set of log targets, repeated targets take effect only once.
/// * `file_path` - The log file path.
pub fn init_log(name: &str, level: Level, targets: Vec<&str>, file_path: &str) {
    INSTALL.call_once(|| {
        if let Err(e) = log::set_logger(&DISPATCHER) {
            eprintln!("{}: failed to set global logger: {}", name, e);
        }
    });

    let mut loggers: Vec<Box<dyn Log>> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for target in targets {
        if target.is_empty() || seen.contains(&target) {
            continue;
        }
        seen.push(target);

        let logger = match target {
            "console" => Box::new(ConsoleLogger) as Box<dyn Log>,
            "syslog" => match SysLogger::connect(name) {
                Ok(logger) => Box::new(logger) as Box<dyn Log>,
                Err(e) => {
                    eprintln!("{}: failed to create syslogger: {}", name, e);
                    continue;
                }
            },
            "file" => match FileLogger::open(&PathBuf::from(file_path), 0o600) {
                Ok(logger) => Box::new(logger) as Box<dyn Log>,
                Err(e) => {
                    eprintln!(
                        "{}: failed to create '{}' file logger: {}",
                        name, file_path, e
                    );
                    continue;
                }
            },
            _ => {
                eprintln!("{}: log target '{}' is strange, ignoring.", name, target);
                continue;
            }
        };
        loggers.push(logger);
    }

    if loggers.is_empty() {
        eprintln!("{}: no available log targets.", name);
    }

    DISPATCHER.replace(loggers);
    log::set_max_level(level.to_level_filter());
}
