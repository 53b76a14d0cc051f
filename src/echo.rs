// Tells the widget's own writes to the manual fields apart from user edits.

use antipode_core::UpdateOrigin;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct EchoGuard {
    syncing: Rc<Cell<bool>>,
}

impl EchoGuard {
    /// Run `write` with every `input` event it raises attributed to the widget.
    pub fn write<R>(&self, write: impl FnOnce() -> R) -> R {
        let prev = self.syncing.replace(true);
        let out = write();
        self.syncing.set(prev);
        out
    }

    /// Origin of an `input` event observed right now.
    #[inline]
    pub fn origin(&self) -> UpdateOrigin {
        if self.syncing.get() {
            UpdateOrigin::Programmatic
        } else {
            UpdateOrigin::User
        }
    }
}
