/*!
## Rust Machine Module

This Rust module holds the MCL interpreter state and runs commands.

*/

/// Most variables the store will hold.
pub const MAX_VARS: usize = 256;
/// Longest variable name, not counting the `$`.
pub const MAX_VAR_NAME_LEN: usize = 31;
/// Lines past this count are dropped by the loader.
pub const MAX_PROGRAM_LINES: usize = 100;
/// Number given to the first loaded line.
pub const LINE_BASE: u32 = 10;
pub const LINE_STEP: u32 = 10;
pub const MAX_LINE_LEN: usize = 1024;
pub const DEFAULT_SAVE_FILE: &str = "mcl_state.sav";
/// `LIST $$` shows directory entries whose name contains one of these.
pub const PROGRAM_EXTENSIONS: &[&str] = &[".mcl", ".txt"];

mod host;
mod listing;
mod runtime;
mod var;

pub use host::Disk;
pub use host::Host;
pub use host::Mount;
pub use host::SystemInfo;
pub use listing::Listing;
pub use listing::ProgramLine;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
pub use var::Variable;
