use super::{MAX_LINE_LEN, MAX_PROGRAM_LINES};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub system: String,
    pub release: String,
    pub machine: String,
    pub node: String,
}

/// ## Everything outside the interpreter
///
/// Files, the working directory, the mount table and the clock. The
/// runtime only formats what comes back.
pub trait Host {
    fn read_lines(&mut self, filename: &str) -> io::Result<Vec<String>>;
    fn write(&mut self, filename: &str, contents: &str) -> io::Result<()>;
    /// Names of all entries in the working directory.
    fn entries(&self) -> io::Result<Vec<String>>;
    /// Names of the subdirectories of the working directory.
    fn directories(&self) -> io::Result<Vec<String>>;
    fn mounts(&self) -> io::Result<Vec<Mount>>;
    fn system_info(&self) -> io::Result<SystemInfo>;
    fn now(&self) -> DateTime<Local>;
}

/// The real filesystem and operating system.
#[derive(Debug, Default)]
pub struct Disk;

impl Host for Disk {
    /// At most `MAX_PROGRAM_LINES` lines. Bytes that are not UTF-8 are
    /// replaced and lines longer than `MAX_LINE_LEN` are split.
    fn read_lines(&mut self, filename: &str) -> io::Result<Vec<String>> {
        let mut reader = BufReader::new(File::open(filename)?);
        let mut lines = vec![];
        let mut buf = vec![];
        while lines.len() < MAX_PROGRAM_LINES {
            buf.clear();
            let len = reader
                .by_ref()
                .take(MAX_LINE_LEN as u64)
                .read_until(b'\n', &mut buf)?;
            if len == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            lines.push(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string());
        }
        Ok(lines)
    }

    fn write(&mut self, filename: &str, contents: &str) -> io::Result<()> {
        let mut file = File::create(filename)?;
        file.write_all(contents.as_bytes())
    }

    fn entries(&self) -> io::Result<Vec<String>> {
        let mut names = vec![];
        for entry in fs::read_dir(".")? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn directories(&self) -> io::Result<Vec<String>> {
        let mut names = vec![];
        for entry in fs::read_dir(".")? {
            let entry = entry?;
            if fs::metadata(entry.path()).map_or(false, |m| m.is_dir()) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn mounts(&self) -> io::Result<Vec<Mount>> {
        let table = fs::read_to_string("/proc/mounts")?;
        Ok(table
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                Some(Mount {
                    device: fields.next()?.to_string(),
                    mount_point: fields.next()?.to_string(),
                    fs_type: fields.next()?.to_string(),
                })
            })
            .collect())
    }

    fn system_info(&self) -> io::Result<SystemInfo> {
        Ok(SystemInfo {
            system: kernel("ostype").unwrap_or_else(|| std::env::consts::OS.to_string()),
            release: kernel("osrelease").unwrap_or_else(|| "unknown".to_string()),
            machine: std::env::consts::ARCH.to_string(),
            node: kernel("hostname")
                .or_else(|| std::env::var("HOSTNAME").ok())
                .unwrap_or_else(|| "localhost".to_string()),
        })
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

fn kernel(key: &str) -> Option<String> {
    fs::read_to_string(format!("/proc/sys/kernel/{}", key))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
