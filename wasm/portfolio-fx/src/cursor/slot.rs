//! Single-instance bookkeeping for the tracker.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{PortfolioError, PortfolioResult};

/// Admits at most one active tracker at a time.
#[derive(Debug, Clone, Default)]
pub struct MountSlot {
    taken: Rc<Cell<bool>>,
}

impl MountSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_taken(&self) -> bool {
        self.taken.get()
    }

    pub(crate) fn ensure_free(&self) -> PortfolioResult<()> {
        if self.is_taken() {
            return Err(PortfolioError::AlreadyMounted("Cursor tracker"));
        }
        Ok(())
    }

    pub(crate) fn claim(&self) -> PortfolioResult<MountClaim> {
        self.ensure_free()?;
        self.taken.set(true);
        Ok(MountClaim {
            taken: Rc::clone(&self.taken),
        })
    }
}

/// Held by an active tracker; frees the slot when dropped.
#[derive(Debug)]
pub struct MountClaim {
    taken: Rc<Cell<bool>>,
}

impl Drop for MountClaim {
    fn drop(&mut self) {
        self.taken.set(false);
    }
}
