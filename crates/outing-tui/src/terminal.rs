//! Terminal setup and restoration

use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Restore the terminal before the default panic report is printed.
/// Installing more than once is a no-op.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            ratatui::restore();
            previous(info);
        }));
    });
}
