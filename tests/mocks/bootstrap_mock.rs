use wasm_bindgen::prelude::*;

/// This module provides a mock of Bootstrap's `Modal` so the review dialog
/// can be exercised without loading the real library.

/// Installs `window.bootstrap.Modal` and resets the hide counter.
pub fn setup_bootstrap_mock() -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function setup_bootstrap_mock() {
        window.__modalHidden = 0;
        window.__modalShown = 0;
        const instance = {
            show: function() {
                window.__modalShown += 1;
                console.log("[MOCK BOOTSTRAP] Modal shown");
            },
            hide: function() {
                window.__modalHidden += 1;
                console.log("[MOCK BOOTSTRAP] Modal hidden");
            }
        };
        window.bootstrap = {
            Modal: {
                getInstance: function(el) { return instance; },
                getOrCreateInstance: function(el) { return instance; }
            }
        };
        console.log("[MOCK] Bootstrap mock setup complete");
        return true;
    }
    "#)]
    extern "C" {
        fn setup_bootstrap_mock() -> bool;
    }

    setup_bootstrap_mock()
}

/// How many times the mock modal was hidden since setup.
pub fn modal_hidden_count() -> u32 {
    #[wasm_bindgen(inline_js = r#"
    export function modal_hidden_count() {
        return window.__modalHidden || 0;
    }
    "#)]
    extern "C" {
        fn modal_hidden_count() -> u32;
    }

    modal_hidden_count()
}
