use super::MAX_VARS;
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: Rc<str>,
    value: i32,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "${} = {}", self.name, self.value)
    }
}

/// ## Variable memory
///
/// Size limited and kept in insertion order. Names are case sensitive.
/// Variables are never removed.

#[derive(Debug)]
pub struct Var {
    vars: Vec<Variable>,
    capacity: usize,
}

impl Default for Var {
    fn default() -> Var {
        Var::with_capacity(MAX_VARS)
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn with_capacity(capacity: usize) -> Var {
        Var {
            vars: Vec::new(),
            capacity,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|v| &*v.name == name)
    }

    /// Append a new variable holding zero.
    pub fn create(&mut self, name: &str) -> Result<&mut Variable> {
        if self.vars.len() >= self.capacity {
            return Err(error!(OutOfMemory));
        }
        self.vars.push(Variable {
            name: name.into(),
            value: 0,
        });
        let index = self.vars.len() - 1;
        Ok(&mut self.vars[index])
    }

    pub fn set(&mut self, name: &str, value: i32) -> Result<()> {
        let var = match self.vars.iter().position(|v| &*v.name == name) {
            Some(index) => &mut self.vars[index],
            None => self.create(name)?,
        };
        var.value = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
