//! # MCL
//!
//! A minimal line-oriented command language in the style of DCL.
//!
//! MCL keeps a table of named integer variables and one loaded program,
//! a plain list of text lines numbered 10, 20, 30 as they are read.
//! Begin by running the executable. If you get the following, you have
//! achieved success.
//! ```text
//! MCL - Miguel's Command Language
//! Based on DCL (DIGITAL Command Language)
//! Type HELP for available commands, EXIT to quit
//!
//! MCL> █
//! ```
//!
//! To embed the interpreter, feed lines to a [`mach::Runtime`] and drain
//! the events it produces.
//! ```
//! use mcl::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("INI $A 10");
//! runtime.enter("SUM $A,5");
//! let mut out = String::new();
//! while let Event::Print(s) = runtime.execute() {
//!     out.push_str(&s);
//! }
//! assert_eq!(out, "Variable $A initialized to 10\n15\n");
//! ```

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod _Commands;

pub mod lang;
pub mod mach;
pub mod term;
