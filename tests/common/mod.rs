#![allow(dead_code)]
use chrono::{DateTime, Local, TimeZone};
use mcl::mach::{Event, Host, Mount, Runtime, SystemInfo, Var};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Exit => {
                s.push_str("<EXIT>\n");
                break;
            }
        }
    }
    s
}

/// Enter one line and return everything it printed.
pub fn run(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line);
    exec(runtime)
}

/// In-memory stand-in for the filesystem and operating system.
#[derive(Clone, Default)]
pub struct MemHost {
    files: Rc<RefCell<BTreeMap<String, String>>>,
    pub dirs: Vec<String>,
    pub mounts: Vec<Mount>,
}

impl MemHost {
    pub fn new() -> MemHost {
        MemHost::default()
    }

    pub fn with_file(self, name: &str, contents: &str) -> MemHost {
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        self
    }

    pub fn file(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    pub fn runtime(&self) -> Runtime {
        Runtime::new(Box::new(self.clone()))
    }

    pub fn runtime_with_vars(&self, vars: Var) -> Runtime {
        Runtime::with_vars(Box::new(self.clone()), vars)
    }
}

impl Host for MemHost {
    fn read_lines(&mut self, filename: &str) -> io::Result<Vec<String>> {
        match self.files.borrow().get(filename) {
            Some(contents) => Ok(contents.lines().map(String::from).collect()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, filename)),
        }
    }

    fn write(&mut self, filename: &str, contents: &str) -> io::Result<()> {
        if filename.starts_with("/readonly/") {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, filename));
        }
        self.files
            .borrow_mut()
            .insert(filename.to_string(), contents.to_string());
        Ok(())
    }

    fn entries(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = self.files.borrow().keys().cloned().collect();
        names.extend(self.dirs.iter().cloned());
        Ok(names)
    }

    fn directories(&self) -> io::Result<Vec<String>> {
        Ok(self.dirs.clone())
    }

    fn mounts(&self) -> io::Result<Vec<Mount>> {
        if self.mounts.is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "/proc/mounts"));
        }
        Ok(self.mounts.clone())
    }

    fn system_info(&self) -> io::Result<SystemInfo> {
        Ok(SystemInfo {
            system: "Linux".to_string(),
            release: "6.1.0".to_string(),
            machine: "x86_64".to_string(),
            node: "vax".to_string(),
        })
    }

    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }
}
