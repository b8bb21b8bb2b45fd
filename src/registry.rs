//! Pattern and palette registries
//!
//! The pattern library itself lives outside this crate. The settings menu
//! only needs to know how many entries there are and how to activate one.

use crate::error::Error;

/// Indexed collection of selectable entries (patterns or palettes)
pub trait PatternRegistry {
    /// Number of entries
    fn count(&self) -> usize;

    /// Display name of an entry, `None` past the end
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Make an entry the active one
    fn set_active(&mut self, index: usize) -> Result<(), Error>;
}

/// Registry backed by a static list of names
///
/// Tracks the active index only; useful for hosts and tests that have no
/// real pattern library behind them.
#[derive(Debug, Clone)]
pub struct NamedRegistry<'a> {
    names: &'a [&'a str],
    active: usize,
}

impl<'a> NamedRegistry<'a> {
    pub const fn new(names: &'a [&'a str]) -> Self {
        Self { names, active: 0 }
    }

    pub const fn active(&self) -> usize {
        self.active
    }
}

impl PatternRegistry for NamedRegistry<'_> {
    fn count(&self) -> usize {
        self.names.len()
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).copied()
    }

    fn set_active(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.names.len() {
            return Err(Error::RegistryIndexOutOfRange {
                index,
                count: self.names.len(),
            });
        }
        self.active = index;
        Ok(())
    }
}
