use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};

/// A shared single-float storage cell.
///
/// This is the unit of memory a parameter writes its output through, and the
/// unit of memory a DSP engine hands to `Parameter::bind`. Cloning a cell
/// shares the same underlying storage, so an engine and a parameter can hold
/// handles to the same float. The handle is valid by construction; there is
/// no null cell to bind.
///
/// Uses atomic operations so a cell shared with an engine on another thread
/// never tears, though write ordering between the two sides is the driver's
/// contract, not the cell's.
#[derive(Clone)]
pub struct ParamCell {
    bits: Arc<AtomicU32>,
}

impl ParamCell {
    /// Creates a new cell with an initial value.
    pub fn new(value: f32) -> Self {
        ParamCell {
            bits: Arc::new(AtomicU32::new(value.to_bits())),
        }
    }

    /// Sets the cell value.
    pub fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Gets the current cell value.
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Returns true if both handles refer to the same underlying storage.
    pub fn shares_storage_with(&self, other: &ParamCell) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

impl Default for ParamCell {
    fn default() -> Self {
        ParamCell::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_roundtrip() {
        let cell = ParamCell::new(1.5);
        assert_eq!(cell.get(), 1.5);

        cell.set(-0.25);
        assert_eq!(cell.get(), -0.25);
    }

    #[test]
    fn test_clone_shares_storage() {
        let cell = ParamCell::new(0.0);
        let alias = cell.clone();

        alias.set(3.0);
        assert_eq!(cell.get(), 3.0);
        assert!(cell.shares_storage_with(&alias));
        assert!(!cell.shares_storage_with(&ParamCell::new(3.0)));
    }
}
