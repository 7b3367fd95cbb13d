//! Which cart views are open.

/// Visibility of the cart sidebar and the two checkout dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Panels {
    pub cart_open: bool,
    pub checkout_open: bool,
    pub success_open: bool,
}

impl Panels {
    /// True if no view is open.
    #[must_use]
    pub const fn all_closed(&self) -> bool {
        !self.cart_open && !self.checkout_open && !self.success_open
    }
}
