extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::verbs;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("MCL")?;
    command.set_prompt("MCL> ")?;
    command.set_completer(Arc::new(VerbCompleter));

    command.write_fmt(format_args!(
        "MCL - Miguel's Command Language\n\
         Based on DCL (DIGITAL Command Language)\n\
         Type HELP for available commands, EXIT to quit\n\n"
    ))?;

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute() {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
            Event::Exit => break,
        }
    }
    Ok(())
}

/// Completes the command keyword at the start of the line.
struct VerbCompleter;

impl<Term: Terminal> Completer<Term> for VerbCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if start != 0 {
            return None;
        }
        let word = word.to_ascii_uppercase();
        let comp_list: Vec<Completion> = verbs()
            .filter(|verb| verb.starts_with(&word))
            .map(|verb| Completion::simple(verb.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
