use leptos::logging::log;
use std::panic;

/// Installs `console_error_panic_hook` and, on top of it, a hook that explains
/// panics raised by callbacks outliving their review panel.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        // A vote or submit response resolving after the panel was unmounted
        // touches signals whose owner is gone.
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A review panel signal was used after the panel was unmounted.");
            log!("[PANIC] Usually a pending vote, load or submit finished after navigation.");
        }
    }));
}

/// Call once at startup, before mounting anything.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
