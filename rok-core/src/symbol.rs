// rok-core - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Interned symbol names.
//!
//! Symbols are interned per thread, so two symbols with the same name share
//! storage. Equality and hashing are pointer operations.
//!
//! Interned names are never deallocated.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An interned symbol name.
#[derive(Clone)]
pub struct Symbol {
    name: Rc<str>,
}

thread_local! {
    static INTERNER: RefCell<HashSet<Rc<str>>> = RefCell::new(HashSet::new());
}

impl Symbol {
    /// Intern `name` and return its symbol.
    pub fn new(name: &str) -> Self {
        INTERNER.with(|interner| {
            let mut interner = interner.borrow_mut();
            if let Some(existing) = interner.get(name) {
                return Symbol {
                    name: Rc::clone(existing),
                };
            }
            let interned: Rc<str> = Rc::from(name);
            interner.insert(Rc::clone(&interned));
            Symbol { name: interned }
        })
    }

    /// The symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.name).cast::<u8>(), state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}
