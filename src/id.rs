use std::fmt;

use gpui::{ElementId, SharedString};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComponentId(SharedString);

impl ComponentId {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn slot_index(&self, name: &str, index: impl fmt::Display) -> ElementId {
        ElementId::Name(format!("{}::{name}::{index}", self.0).into())
    }
}

impl Default for ComponentId {
    #[track_caller]
    fn default() -> Self {
        Self(stable_auto_id("pin-code").into())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ComponentId {
    fn from(value: &'static str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<SharedString> for ComponentId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(value.0)
    }
}

#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
