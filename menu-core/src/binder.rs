//! Dismissal binder - scoped ownership of global dismissal listeners
//!
//! While a menu is open, a pointer-down outside its surface or an Escape key
//! press anywhere must close it. The binder holds those two listeners for
//! exactly that window: acquired when the root opens, released when it
//! closes for any reason, and released again on drop so an unmounted menu
//! never leaves a listener behind.

use std::fmt;

/// Global events that dismiss an open menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Pointer-down whose target lies outside the menu surface
    OutsidePointer,
    /// Escape key, regardless of focus
    Escape,
}

impl Trigger {
    pub const ALL: [Trigger; 2] = [Trigger::OutsidePointer, Trigger::Escape];
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::OutsidePointer => f.write_str("outside-pointer"),
            Trigger::Escape => f.write_str("escape"),
        }
    }
}

/// Host event scope able to register global listeners
///
/// Implementations register the real listener for a trigger on `attach` and
/// remove it on `detach`. The binder guarantees the calls alternate, so an
/// implementation never sees two attaches for the same trigger in a row.
pub trait ListenerScope {
    fn attach(&mut self, trigger: Trigger);
    fn detach(&mut self, trigger: Trigger);
}

/// Scope for hosts without a global event target
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScope;

impl ListenerScope for NullScope {
    fn attach(&mut self, _trigger: Trigger) {}
    fn detach(&mut self, _trigger: Trigger) {}
}

/// Owns the dismissal listeners of a single menu
pub struct DismissalBinder {
    scope: Box<dyn ListenerScope>,
    bound: bool,
}

impl DismissalBinder {
    pub fn new(scope: impl ListenerScope + 'static) -> Self {
        Self {
            scope: Box::new(scope),
            bound: false,
        }
    }

    /// Binder that never registers anything
    pub fn detached() -> Self {
        Self::new(NullScope)
    }

    /// Whether both listeners are currently registered
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Register both listeners. A second call while bound does nothing.
    pub fn acquire(&mut self) {
        if self.bound {
            return;
        }
        for trigger in Trigger::ALL {
            self.scope.attach(trigger);
        }
        self.bound = true;
        tracing::trace!("Dismissal listeners attached");
    }

    /// Remove both listeners. A call while unbound does nothing.
    pub fn release(&mut self) {
        if !self.bound {
            return;
        }
        for trigger in Trigger::ALL {
            self.scope.detach(trigger);
        }
        self.bound = false;
        tracing::trace!("Dismissal listeners detached");
    }

    /// Bring the listeners in line with root visibility
    pub fn sync(&mut self, root_open: bool) {
        if root_open {
            self.acquire();
        } else {
            self.release();
        }
    }
}

impl Default for DismissalBinder {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for DismissalBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissalBinder")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl Drop for DismissalBinder {
    fn drop(&mut self) {
        self.release();
    }
}
