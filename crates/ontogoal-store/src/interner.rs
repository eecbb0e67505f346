//! String interning for IRI storage.
//!
//! IRIs repeat heavily across triples; interning stores each string once and
//! lets the indexes key on 4-byte ids. The evaluator is single-threaded, so
//! interning takes `&mut self` and needs no synchronization.

use ahash::AHashMap;

/// Interned string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StrId(u32);

impl StrId {
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Interner {
    str_to_id: AHashMap<String, StrId>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its id.
    pub fn intern(&mut self, s: &str) -> StrId {
        if let Some(&id) = self.str_to_id.get(s) {
            return id;
        }
        let id = StrId(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(s.to_string());
        self.str_to_id.insert(s.to_string(), id);
        id
    }

    /// Look up an existing id without inserting.
    pub fn id_of(&self, s: &str) -> Option<StrId> {
        self.str_to_id.get(s).copied()
    }

    /// Resolve an id back to its string. Ids only come from this interner,
    /// so the slot always exists.
    pub fn lookup(&self, id: StrId) -> &str {
        &self.strings[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
