//! Ordered credential rotation for the maps API key.
//!
//! The key names live in the CRM's key-value store; this ring only tracks
//! which name to provision next. Rotation is data-driven over an ordered
//! list rather than hardcoded to a primary/fallback pair.

/// An ordered list of CRM variable names with a cursor to the next one.
#[derive(Debug, Clone)]
pub struct KeyRing {
    names: Vec<String>,
    next: usize,
}

impl KeyRing {
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names, next: 0 }
    }

    /// Hands out the next variable name in rotation order, or `None` once
    /// every configured name has been used.
    pub fn next_name(&mut self) -> Option<String> {
        let name = self.names.get(self.next).cloned()?;
        self.next += 1;
        Some(name)
    }

    /// Number of names not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.names.len().saturating_sub(self.next)
    }
}
