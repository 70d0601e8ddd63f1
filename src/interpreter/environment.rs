use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Environments are reference counted because closures keep their defining
/// scope alive for as long as the closure itself lives, which can be well
/// past the activation that created it.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: a name-to-value store with an optional enclosing scope.
///
/// Lookups walk outward through the chain of enclosing scopes; writes always
/// land in the innermost scope. The global scope has no enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh global scope.
    ///
    /// ## Example
    /// ```
    /// use hilt::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x", Value::Integer(1));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a scope enclosed by `outer`.
    ///
    /// Used for every function activation: parameters are bound here, and
    /// anything not found locally resolves through `outer`.
    #[must_use]
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(outer), }))
    }

    /// Resolves a name, walking outward through enclosing scopes.
    ///
    /// # Parameters
    /// - `name`: The binding name to resolve.
    ///
    /// # Returns
    /// The bound value, or `None` if no scope in the chain binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope, shadowing any same-named binding in an
    /// enclosing scope. Rebinding an existing name replaces its value.
    ///
    /// # Parameters
    /// - `name`: The binding name.
    /// - `value`: The value to bind.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
