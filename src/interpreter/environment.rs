use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// A single scope frame.
///
/// Frames form a chain through `enclosing`, from the innermost block out to
/// the globals. They are shared (`Rc<RefCell<_>>`) because a closure keeps the
/// frame it was declared in alive after that frame's block has finished.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Self>>>,
}

impl Environment {
    /// Creates an empty root frame (the globals).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Rc<RefCell<Self>>) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(enclosing), }
    }

    /// Binds `name` in this frame, replacing any previous binding here.
    ///
    /// Redeclaring a name in the same frame is allowed; bindings with the same
    /// name in enclosing frames are shadowed, not touched.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up in this frame, then outward through the chain.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no frame binds `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(enclosing) => ensure_sufficient_stack(|| enclosing.borrow().get(name, line)),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Rebinds `name` in the nearest frame that declares it.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no frame binds `name`.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => {
                ensure_sufficient_stack(|| enclosing.borrow_mut().assign(name, value, line))
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}
