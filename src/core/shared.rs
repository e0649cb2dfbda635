use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Run flag shared between a loop and every handle that can stop it.
/// Clones observe and flip the same flag.
#[derive(Clone, Debug)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    pub fn running() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    /// Clear the flag. Returns true only for the call that actually stopped it.
    pub fn stop(&self) -> bool {
        self.0.replace(false)
    }
}

/// Run `f` on state owned elsewhere. Once the owner has dropped it, `f` is
/// not called and this returns false.
pub fn with_live<T>(state: &Weak<RefCell<T>>, f: impl FnOnce(&mut T)) -> bool {
    match state.upgrade() {
        Some(rc) => {
            f(&mut rc.borrow_mut());
            true
        }
        None => false,
    }
}
