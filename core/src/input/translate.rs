//! Host key-symbol translation.
//!
//! Host symbols are opaque integers; the translator maps them into the
//! normalized code space once, at the edge, so nothing downstream ever
//! sees a host value.

use std::collections::HashMap;

use crate::input::keys;

/// Maps host key symbols to normalized key codes.
///
/// Built once at startup from a declarative binding list. Lookup order:
/// the explicit binding, then ASCII pass-through for `'0'..='9'` and
/// `'a'..='z'`, then the sentinel [`keys::NONE`].
#[derive(Debug, Default)]
pub struct KeyTranslator {
    map: HashMap<i32, u16>,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(symbol, code)` pairs. The first binding listed for a
    /// symbol wins; later duplicates are ignored.
    pub fn from_bindings(bindings: &[(i32, u16)]) -> Self {
        let mut map = HashMap::with_capacity(bindings.len());
        for &(symbol, code) in bindings {
            map.entry(symbol).or_insert(code);
        }
        Self { map }
    }

    /// Bind or rebind a single symbol.
    pub fn bind(&mut self, symbol: i32, code: u16) {
        self.map.insert(symbol, code);
    }

    /// Translate a host key symbol into a normalized code.
    pub fn translate(&self, symbol: i32) -> u16 {
        if let Some(&code) = self.map.get(&symbol) {
            return code;
        }
        // unmapped digits and lowercase letters name themselves
        if (i32::from(b'0')..=i32::from(b'9')).contains(&symbol)
            || (i32::from(b'a')..=i32::from(b'z')).contains(&symbol)
        {
            return symbol as u16;
        }
        keys::NONE
    }
}
