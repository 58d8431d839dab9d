//! # lnalias-wasm
//!
//! WebAssembly bindings for lnalias-rs.
//!
//! Lets a registration page check an LNURL and preview the alias that
//! will be stored before calling `/create-lnurl`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { is_valid_lnurl, decode_lnurl, normalize_alias } from 'lnalias-wasm';
//!
//! await init();
//!
//! if (is_valid_lnurl(input)) {
//!   console.log('Points at', decode_lnurl(input));
//!   console.log('Registering as', normalize_alias(alias));
//! }
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use lnalias_core::lnurl;
use wasm_bindgen::prelude::*;

/// Returns true if the string decodes as an LNURL
#[wasm_bindgen]
pub fn is_valid_lnurl(candidate: &str) -> bool {
    lnurl::is_valid(candidate)
}

/// Decode an LNURL into the URL it points at
#[wasm_bindgen]
pub fn decode_lnurl(candidate: &str) -> Result<String, JsValue> {
    lnurl::decode(candidate).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Alias exactly as the relay will store it
#[wasm_bindgen]
pub fn normalize_alias(alias: &str) -> String {
    lnalias_core::normalize_alias(alias)
}

/// Lightning address for an alias on a given domain
#[wasm_bindgen]
pub fn lightning_address(alias: &str, domain: &str) -> String {
    format!("{}@{}", lnalias_core::normalize_alias(alias), domain)
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_lnurl() {
        assert!(is_valid_lnurl(
            "lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mf09emk2mrv944kummhdchkcmn4wfk8qtmzda3qfkgtq7"
        ));
        assert!(!is_valid_lnurl("bob@example.com"));
    }

    #[test]
    fn test_normalize_alias() {
        assert_eq!(normalize_alias(" Satoshi "), "satoshi");
    }

    #[test]
    fn test_lightning_address() {
        assert_eq!(lightning_address("Bob", "example.com"), "bob@example.com");
    }
}
