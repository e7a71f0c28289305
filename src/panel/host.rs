//! Navigation shell hosting the settings panel

/// The host that opened the panel and gets control back when it closes.
///
/// `on_back` is called at most once per session: after an acknowledged save
/// or when the user leaves without saving.
pub trait HostShell {
    fn on_back(&mut self);
}

impl<F: FnMut()> HostShell for F {
    fn on_back(&mut self) {
        self()
    }
}
