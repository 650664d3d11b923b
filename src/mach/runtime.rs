use super::{Disk, Host, Listing, Var};
use super::{DEFAULT_SAVE_FILE, MAX_LINE_LEN, PROGRAM_EXTENSIONS};
use crate::error;
use crate::lang::ast::*;
use crate::lang::{expression, parse, statement, Error, Line};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

const HELP: &str = "\
MCL Commands:
SUM <expr>,<expr>     - Add two values
SYB <expr>,<expr>     - Subtract two values
INI $<var> [value]    - Initialize variable
LIST 1,$              - List directories
LIST $,1              - List disks/mounts
LIST $$,0             - List program lines
LIST $,2              - List libraries
LIST $INF             - Show system info
LIST $$,T             - List variables
LIST $$               - List programs
LD 0,$<filename>      - Load program
SAVE [filename]       - Save state
ED $NUM<line>         - Edit/show line
$RUN                  - Run loaded program
EXIT                  - Exit MCL
";

const LIST_USAGE: &str = "\
LIST command format:
LIST 1,$     - List directories
LIST $,1     - List disks/mounts
LIST $$,0    - List program lines
LIST $,2     - List libraries
LIST $INF    - Show system info
LIST $$,T    - List variables
LIST $$      - List programs
";

const LIBRARIES: &str = "\
Available libraries:
STDIO.LIB - Standard I/O functions
MATH.LIB - Mathematical functions
STRING.LIB - String manipulation
FILE.LIB - File operations
";

/// ## Output of the runtime
///
/// `Print` carries finished text including newlines. `Exit` asks the
/// caller to end the session; the runtime never ends the process itself.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Print(String),
    Errors(Vec<Error>),
    Exit,
}

/// ## Interpreter state
///
/// Owns the variables, the loaded program and the queue of pending output.
/// Feed it lines with `enter` and drain the results with `execute`.
pub struct Runtime {
    vars: Var,
    listing: Option<Listing>,
    host: Box<dyn Host>,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Box::new(Disk::default()))
    }
}

impl Runtime {
    pub fn new(host: Box<dyn Host>) -> Runtime {
        Runtime::with_vars(host, Var::new())
    }

    pub fn with_vars(host: Box<dyn Host>, vars: Var) -> Runtime {
        Runtime {
            vars,
            listing: None,
            host,
            events: VecDeque::new(),
        }
    }

    /// Run one line of direct input. Returns true when the line was worth
    /// keeping in history.
    pub fn enter(&mut self, s: &str) -> bool {
        let line = Line::new(s);
        if line.len() > MAX_LINE_LEN {
            self.error(error!(LineBufferOverflow));
            return false;
        }
        if line.is_empty() {
            return false;
        }
        if let Err(error) = parse(&line).and_then(|command| self.command(command)) {
            self.error(error);
        }
        true
    }

    /// Next pending event, or `Event::Stopped` when the line is finished.
    pub fn execute(&mut self) -> Event {
        self.events.pop_front().unwrap_or(Event::Stopped)
    }

    /// Drop pending output.
    pub fn interrupt(&mut self) {
        self.events.clear();
        self.error(error!(Break));
    }

    /// Evaluate the expression at the front of `s`. Never fails; a missing
    /// variable is reported and counts as zero.
    pub fn evaluate<'a>(&mut self, s: &'a str) -> (i32, &'a str) {
        let (expr, rest) = expression(s);
        (self.value(&expr), rest)
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn listing(&self) -> Option<&Listing> {
        self.listing.as_ref()
    }

    fn value(&mut self, expr: &Expression) -> i32 {
        match expr {
            Expression::Literal(n) => *n,
            Expression::Empty => 0,
            Expression::Variable(name) => match self.vars.find(name) {
                Some(var) => var.value(),
                None => {
                    self.error(error!(VariableNotFound; name));
                    0
                }
            },
        }
    }

    fn print<S: AsRef<str>>(&mut self, s: S) {
        let mut s = s.as_ref().to_string();
        if !s.ends_with('\n') {
            s.push('\n');
        }
        self.events.push_back(Event::Print(s));
    }

    fn error(&mut self, error: Error) {
        self.events.push_back(Event::Errors(vec![error]));
    }

    fn command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Sum(a, b) => {
                let sum = self.value(&a).wrapping_add(self.value(&b));
                self.print(sum.to_string());
                Ok(())
            }
            Command::Syb(a, b) => {
                let difference = self.value(&a).wrapping_sub(self.value(&b));
                self.print(difference.to_string());
                Ok(())
            }
            Command::Ini(ini) => self.r_ini(ini),
            Command::List(args) => self.r_list(args),
            Command::Load(load) => self.r_load(load),
            Command::Save(filename) => self.r_save(filename),
            Command::Edit(expr) => self.r_edit(expr),
            Command::Run => self.r_run(),
            Command::Help => {
                self.print(HELP);
                Ok(())
            }
            Command::Exit => {
                self.print("Goodbye from MCL!");
                self.events.push_back(Event::Exit);
                Ok(())
            }
        }
    }

    fn r_ini(&mut self, ini: Ini) -> Result<()> {
        let value = self.value(&ini.value);
        self.vars.set(&ini.name, value)?;
        self.print(format!("Variable ${} initialized to {}", ini.name, value));
        Ok(())
    }

    fn r_list(&mut self, args: ListArgs) -> Result<()> {
        let second = match &args.second {
            Some(expr) => Some(self.value(expr)),
            None => None,
        };
        let mut s = String::new();
        match ListReport::resolve(&args, second) {
            ListReport::Info => self.list_info(&mut s)?,
            ListReport::Variables => {
                s.push_str("Variables:\n");
                for var in self.vars.iter() {
                    s.push_str(&format!("{}\n", var));
                }
            }
            ListReport::ProgramLines => {
                s.push_str("Program lines:\n");
                for line in self.listing.iter().flat_map(Listing::lines) {
                    s.push_str(&format!("{}\n", line));
                }
            }
            ListReport::Programs => {
                let entries = self
                    .host
                    .entries()
                    .map_err(|_| error!(CannotAccess; "current directory"))?;
                s.push_str("Programs/Scripts:\n");
                for name in entries
                    .iter()
                    .filter(|name| PROGRAM_EXTENSIONS.iter().any(|ext| name.contains(ext)))
                {
                    s.push_str(&format!("{}\n", name));
                }
            }
            ListReport::Directories => {
                let dirs = self
                    .host
                    .directories()
                    .map_err(|_| error!(CannotAccess; "current directory"))?;
                s.push_str("Directories:\n");
                for name in dirs.iter().filter(|name| !name.starts_with('.')) {
                    s.push_str(&format!("{}/\n", name));
                }
            }
            ListReport::Mounts => {
                let mounts = self
                    .host
                    .mounts()
                    .map_err(|_| error!(CannotAccess; "mount information"))?;
                s.push_str("Mounted filesystems:\n");
                for m in mounts
                    .iter()
                    .filter(|m| m.mount_point.starts_with('/') && m.mount_point.len() < 20)
                {
                    s.push_str(&format!("{} on {} ({})\n", m.device, m.mount_point, m.fs_type));
                }
            }
            ListReport::Libraries => s.push_str(LIBRARIES),
            ListReport::Usage => s.push_str(LIST_USAGE),
        }
        self.print(s);
        Ok(())
    }

    fn list_info(&mut self, s: &mut String) -> Result<()> {
        let info = self
            .host
            .system_info()
            .map_err(|_| error!(CannotAccess; "system information"))?;
        let now = self.host.now();
        s.push_str("MCL System Information:\n");
        s.push_str(&format!("System: {} {}\n", info.system, info.release));
        s.push_str(&format!("Machine: {}\n", info.machine));
        s.push_str(&format!("Node: {}\n", info.node));
        s.push_str(&format!("Time: {}\n", now.format("%a %b %e %H:%M:%S %Y")));
        s.push_str(&format!("Variables: {}/{}\n", self.vars.len(), self.vars.capacity()));
        match &self.listing {
            Some(listing) => {
                s.push_str("Program loaded: Yes\n");
                s.push_str(&format!("Program: {} ({} lines)\n", listing.source(), listing.len()));
            }
            None => {
                s.push_str("Program loaded: No\n");
            }
        }
        Ok(())
    }

    fn r_load(&mut self, load: Load) -> Result<()> {
        let filename = match load {
            Load::Disk(disk) => {
                self.print(format!("Loading from disk: {}", disk));
                return Err(error!(NotImplemented; "Disk loading"));
            }
            Load::File(filename) => filename,
        };
        let lines = self
            .host
            .read_lines(&filename)
            .map_err(|_| error!(CannotLoad; &filename))?;
        let listing = Listing::load(&filename, lines);
        self.print(format!(
            "Program loaded: {} ({} lines)",
            listing.source(),
            listing.len()
        ));
        self.listing = Some(listing);
        Ok(())
    }

    fn r_save(&mut self, filename: Option<String>) -> Result<()> {
        let filename = filename.unwrap_or_else(|| DEFAULT_SAVE_FILE.to_string());
        let mut s = String::from("# MCL State File\n# Variables\n");
        for var in self.vars.iter() {
            s.push_str(&format!("INI ${} {}\n", var.name(), var.value()));
        }
        if let Some(listing) = &self.listing {
            s.push_str(&format!("# Program: {}\n", listing.source()));
            for line in listing.lines() {
                s.push_str(&format!("# {}\n", line));
            }
        }
        self.host
            .write(&filename, &s)
            .map_err(|_| error!(CannotSave; &filename))?;
        self.print(format!("State saved to: {}", filename));
        Ok(())
    }

    fn r_edit(&mut self, expr: Expression) -> Result<()> {
        let number = self.value(&expr);
        let found = self
            .listing
            .as_ref()
            .and_then(|listing| listing.line(number))
            .map(|line| line.to_string());
        match found {
            Some(line) => {
                self.print(line);
                Ok(())
            }
            None => Err(error!(UndefinedLine; number.to_string())),
        }
    }

    fn r_run(&mut self) -> Result<()> {
        let listing = match &self.listing {
            Some(listing) => listing.clone(),
            None => return Err(error!(NoProgram)),
        };
        self.print(format!("Running program: {}", listing.source()));
        for line in listing.lines() {
            self.print(format!(
                "Executing line {}: {}",
                line.number(),
                line.content()
            ));
            match statement(line.content()) {
                Ok(Statement::Print(text)) => self.print(format!("OUTPUT: {}", text)),
                Ok(Statement::Ini(ini)) => {
                    if let Err(error) = self.r_ini(ini) {
                        self.error(error);
                    }
                }
                Ok(Statement::Unknown) => {
                    self.print(format!("Unknown program command: {}", line.content()))
                }
                Err(error) => self.error(error),
            }
        }
        self.print("Program execution completed");
        Ok(())
    }
}
