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

//! the utils of the file operation
//!
use crate::error::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

const FIRST_LINE_CAPACITY: usize = 1024;

/// read first line from a file
///
/// The line ends at the first '\n' or '\r' (so "\r\n" too), or at the end
/// of the file, and the terminator is not part of the result. An empty file
/// gives an empty string. Failing to open or read the file gives
/// [`Error::FileAccess`]; the file is closed before returning either way.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Failed to open {}: {}", path.display(), e);
            return Err(e).context(FileAccessSnafu { path });
        }
    };
    let mut reader = BufReader::new(file);

    match read_first_line_from(&mut reader) {
        Ok(line) => {
            log::debug!(
                "Read first line of {} ({} bytes)",
                path.display(),
                line.len()
            );
            Ok(line)
        }
        Err(e) => {
            log::debug!("Failed to read first line of {}: {}", path.display(), e);
            Err(Error::FileAccess {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

/// read first line from a buffered reader
///
/// Stops pulling buffers as soon as a line terminator shows up, the bytes
/// after it stay unconsumed in the reader.
pub fn read_first_line_from<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut raw = Vec::with_capacity(FIRST_LINE_CAPACITY);

    loop {
        let (found, used) = {
            let available = match reader.fill_buf() {
                Ok(v) => v,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
                Some(i) => {
                    raw.extend_from_slice(&available[..i]);
                    (true, i + 1)
                }
                None => {
                    raw.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };

        reader.consume(used);
        if found {
            break;
        }
    }

    String::from_utf8(raw).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod test {
    use super::{read_first_line, read_first_line_from};
    use crate::Error;
    use std::{
        io::{BufRead, BufReader, BufWriter, Cursor, ErrorKind, Read, Write},
        path::Path,
    };
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let mut buffer = BufWriter::new(&file);
        buffer.write_all(content).unwrap();
        buffer.flush().unwrap();
        drop(buffer);
        file
    }

    #[test]
    fn test_read_first_line() {
        let file = temp_file_with(b"hello\nworld");
        let first_line: Result<String, crate::Error> = read_first_line(file.path());
        assert_eq!(first_line.unwrap(), "hello");
    }

    #[test]
    fn test_read_first_line_without_terminator() {
        let file = temp_file_with(b"onlyline");
        assert_eq!(read_first_line(file.path()).unwrap(), "onlyline");
    }

    #[test]
    fn test_read_first_line_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let result = read_first_line(file.path());
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_read_first_line_empty_first_line() {
        let file = temp_file_with(b"\nsecond line\n");
        assert_eq!(read_first_line(file.path()).unwrap(), "");
    }

    #[test]
    fn test_read_first_line_carriage_return() {
        let file = temp_file_with(b"dos line\r\nnext\r\n");
        assert_eq!(read_first_line(file.path()).unwrap(), "dos line");

        let file = temp_file_with(b"old mac\rnext\r");
        assert_eq!(read_first_line(file.path()).unwrap(), "old mac");
    }

    #[test]
    fn test_read_first_line_is_repeatable() {
        let file = temp_file_with(b"Hello, world!\nsecond\n");
        let first = read_first_line(file.path()).unwrap();
        let second = read_first_line(file.path()).unwrap();
        assert_eq!(first, "Hello, world!");
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_first_line_long_line() {
        let mut content = "x".repeat(64 * 1024);
        content.push('\n');
        content.push_str("tail");
        let file = temp_file_with(content.as_bytes());
        assert_eq!(read_first_line(file.path()).unwrap().len(), 64 * 1024);
    }

    #[test]
    fn test_read_first_line_nonexistent_file() {
        let path = Path::new("nonexistent_file.txt");
        let result: Result<String, crate::Error> = read_first_line(path);
        match result {
            Err(Error::FileAccess { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_first_line_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_first_line(dir.path());
        assert!(matches!(result, Err(Error::FileAccess { .. })));
    }

    #[test]
    fn test_read_first_line_invalid_utf8() {
        let file = temp_file_with(b"\xff\xfe\xfd\nok\n");
        match read_first_line(file.path()) {
            Err(Error::FileAccess { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::InvalidData)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_first_line_from_leaves_rest_unread() {
        let mut reader = Cursor::new(b"first\nsecond\n".to_vec());
        assert_eq!(read_first_line_from(&mut reader).unwrap(), "first");
        assert_eq!(reader.position(), 6);

        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn test_read_first_line_from_small_buffer() {
        let data: &[u8] = b"spans several buffers\nnext";
        let mut reader = BufReader::with_capacity(4, data);
        assert_eq!(
            read_first_line_from(&mut reader).unwrap(),
            "spans several buffers"
        );
    }

    struct FlakyReader {
        interrupted: bool,
        data: Cursor<Vec<u8>>,
        fail_after: Option<usize>,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(ErrorKind::Interrupted.into());
            }
            if let Some(limit) = self.fail_after {
                if self.data.position() as usize >= limit {
                    return Err(std::io::Error::new(ErrorKind::Other, "device gone"));
                }
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_read_first_line_from_retries_interrupted() {
        let mut reader = BufReader::new(FlakyReader {
            interrupted: false,
            data: Cursor::new(b"after eintr\n".to_vec()),
            fail_after: None,
        });
        assert_eq!(read_first_line_from(&mut reader).unwrap(), "after eintr");
    }

    #[test]
    fn test_read_first_line_from_propagates_read_error() {
        let mut reader = BufReader::with_capacity(
            2,
            FlakyReader {
                interrupted: true,
                data: Cursor::new(b"no terminator here".to_vec()),
                fail_after: Some(4),
            },
        );
        let err = read_first_line_from(&mut reader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
