use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    sync::{Mutex, PoisonError},
};

use lazy_static::lazy_static;

/// Names every table starts with, in slot order. The associated constants on
/// `Symbol` index into this list.
const PREDEFINED: [&str; 7] = ["Int", "Float", "String", "Bool", "Void", "main", "printf"];

lazy_static! {
    static ref ID_TABLE: Mutex<IdTable> = Mutex::new(IdTable::new());
}

struct IdTable {
    lookup: HashMap<&'static str, Symbol>,
    strings: Vec<&'static str>,
}

impl IdTable {
    fn new() -> Self {
        let mut table = IdTable {
            lookup: HashMap::new(),
            strings: vec![],
        };
        for name in PREDEFINED {
            table.add_string(name);
        }
        table
    }

    fn add_string(&mut self, text: &str) -> Symbol {
        if let Some(symbol) = self.lookup.get(text) {
            return *symbol;
        }

        // Interned text lives for the rest of the process.
        let text: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let symbol = Symbol(self.strings.len() as u32);
        self.strings.push(text);
        self.lookup.insert(text, symbol);
        symbol
    }
}

/// Interned identifier. Two symbols are equal exactly when their text is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    pub const INT: Symbol = Symbol(0);
    pub const FLOAT: Symbol = Symbol(1);
    pub const STRING: Symbol = Symbol(2);
    pub const BOOL: Symbol = Symbol(3);
    pub const VOID: Symbol = Symbol(4);
    pub const MAIN: Symbol = Symbol(5);
    pub const PRINTF: Symbol = Symbol(6);

    pub fn intern(text: &str) -> Symbol {
        ID_TABLE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add_string(text)
    }

    pub fn as_str(&self) -> &'static str {
        ID_TABLE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .strings[self.0 as usize]
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::intern(text)
    }
}
