// rok-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::value::Value;

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. The environment
/// without a parent is the root, which holds the builtins and every `def`.
/// Lambda calls run in a fresh child of the lambda's captured environment.
///
/// # Examples
///
/// ```
/// use rok_core::{Env, Symbol, Value};
///
/// let env = Env::new();
/// env.def(Symbol::new("x"), Value::number(42));
///
/// let child = env.child();
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), Value::number(42));
///
/// // `put` in a call frame shadows the root binding
/// child.put(Symbol::new("x"), Value::number(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), Value::number(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), Value::number(42));
/// ```
#[derive(Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

struct EnvInner {
    bindings: HashMap<Symbol, Value>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// The parent environment, if any.
    pub fn parent(&self) -> Option<Env> {
        self.inner.borrow().parent.clone()
    }

    /// Whether this is a root environment.
    pub fn is_root(&self) -> bool {
        self.inner.borrow().parent.is_none()
    }

    /// Walk up to the root environment.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    #[must_use]
    pub fn root(&self) -> Env {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Whether two handles refer to the same environment.
    pub fn ptr_eq(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Define a binding in this environment (not parent).
    pub fn define(&self, sym: Symbol, val: Value) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    pub fn lookup(&self, sym: &Symbol) -> Result<Value> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Ok(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return Err(Error::UnboundSymbol(sym.clone())),
            }
        }
    }

    /// Bind in the root environment, whatever the current depth (`def`).
    pub fn def(&self, sym: Symbol, val: Value) {
        self.root().define(sym, val);
    }

    /// Local assignment (`=`).
    ///
    /// Overwrites the binding in the nearest call frame that already owns
    /// `sym`, otherwise binds in this environment. The root is never searched:
    /// assigning to a global name from inside a call shadows it locally, and
    /// only `=` evaluated at the top level writes to the root.
    pub fn put(&self, sym: Symbol, val: Value) {
        let mut current = self.clone();
        loop {
            let parent = {
                let inner = current.inner.borrow();
                if inner.parent.is_none() {
                    break;
                }
                if inner.bindings.contains_key(&sym) {
                    drop(inner);
                    current.define(sym, val);
                    return;
                }
                inner.parent.clone()
            };
            match parent {
                Some(p) => current = p,
                None => break,
            }
        }
        self.define(sym, val);
    }

    /// Check if a symbol is defined in this environment or parent chain.
    #[must_use]
    pub fn is_defined(&self, sym: &Symbol) -> bool {
        self.lookup(sym).is_ok()
    }

    /// Check if a symbol is bound in this environment itself.
    #[must_use]
    pub fn is_local(&self, sym: &Symbol) -> bool {
        self.inner.borrow().bindings.contains_key(sym)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

// Bindings may hold lambdas that capture this environment, so printing
// them would recurse forever.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Env")
            .field("bindings", &inner.bindings.len())
            .field("root", &inner.parent.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    #[test]
    fn test_define_and_lookup() {
        let env = Env::new();
        env.define(sym("x"), Value::number(42));

        assert_eq!(env.lookup(&sym("x")).unwrap(), Value::number(42));
    }

    #[test]
    fn test_unbound_symbol() {
        let env = Env::new();
        assert_eq!(
            env.lookup(&sym("x")),
            Err(Error::UnboundSymbol(sym("x")))
        );
    }

    #[test]
    fn test_child_inherits_parent() {
        let parent = Env::new();
        parent.define(sym("x"), Value::number(42));

        let child = parent.child();
        assert_eq!(child.lookup(&sym("x")).unwrap(), Value::number(42));
    }

    #[test]
    fn test_child_shadows_parent() {
        let parent = Env::new();
        parent.define(sym("x"), Value::number(42));

        let child = parent.child();
        child.define(sym("x"), Value::number(100));

        assert_eq!(child.lookup(&sym("x")).unwrap(), Value::number(100));
        assert_eq!(parent.lookup(&sym("x")).unwrap(), Value::number(42));
    }

    #[test]
    fn test_def_writes_root_from_any_depth() {
        let root = Env::new();
        let grandchild = root.child().child();
        grandchild.def(sym("g"), Value::number(1));

        assert!(root.is_local(&sym("g")));
        assert!(!grandchild.is_local(&sym("g")));
    }

    #[test]
    fn test_put_at_root_writes_root() {
        let root = Env::new();
        root.put(sym("x"), Value::number(1));
        assert!(root.is_local(&sym("x")));
    }

    #[test]
    fn test_put_shadows_global() {
        let root = Env::new();
        root.define(sym("x"), Value::number(10));

        let frame = root.child();
        frame.put(sym("x"), Value::number(5));

        assert_eq!(frame.lookup(&sym("x")).unwrap(), Value::number(5));
        assert_eq!(root.lookup(&sym("x")).unwrap(), Value::number(10));
    }

    #[test]
    fn test_put_updates_owning_frame() {
        let root = Env::new();
        let outer = root.child();
        outer.define(sym("n"), Value::number(1));
        let inner = outer.child();

        inner.put(sym("n"), Value::number(2));

        assert!(!inner.is_local(&sym("n")));
        assert_eq!(outer.lookup(&sym("n")).unwrap(), Value::number(2));
    }

    #[test]
    fn test_put_without_owner_binds_current() {
        let root = Env::new();
        let outer = root.child();
        let inner = outer.child();

        inner.put(sym("fresh"), Value::number(3));

        assert!(inner.is_local(&sym("fresh")));
        assert!(!outer.is_defined(&sym("fresh")));
    }

    #[test]
    fn test_stored_value_is_independent_of_caller() {
        let env = Env::new();
        let mut list = Value::qexpr(vec![Value::number(1)]);
        env.define(sym("l"), list.clone());
        if let Value::Qexpr(items) = &mut list {
            items.push_back(Value::number(2));
        }
        assert_eq!(env.lookup(&sym("l")).unwrap().len(), Some(1));
    }

    #[test]
    fn test_root_and_ptr_eq() {
        let root = Env::new();
        let child = root.child();
        assert!(child.root().ptr_eq(&root));
        assert!(root.is_root());
        assert!(!child.is_root());
        assert!(child.parent().is_some_and(|p| p.ptr_eq(&root)));
    }
}
