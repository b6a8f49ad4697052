use core::fmt;

use wasm_bindgen::JsValue;

/// Ways a host call can be rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HostError {
    /// A palette must have exactly four entries; this one had the given
    /// number.
    PaletteLength(usize),
    /// The address is outside the memory map.
    AddressOutOfRange(usize),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostError::PaletteLength(n) => {
                write!(f, "palette needs 4 entries, got {}", n)
            }
            HostError::AddressOutOfRange(addr) => {
                write!(f, "address {:#x} is outside memory", addr)
            }
        }
    }
}

impl std::error::Error for HostError {}

impl From<HostError> for JsValue {
    fn from(e: HostError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
