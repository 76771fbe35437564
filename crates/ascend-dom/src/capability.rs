//! Host capability flags.

use bitflags::bitflags;

bitflags! {
    /// DOM features a host advertises.
    ///
    /// A full [`Document`](crate::Document) supports everything. Hosts that
    /// embed the document in a restricted environment can advertise less via
    /// [`Document::with_capabilities`](crate::Document::with_capabilities),
    /// and consumers can refuse to run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Selector queries over the whole document.
        const QUERY_SELECTOR = 1 << 0;
        /// Class list inspection and mutation.
        const CLASS_LIST = 1 << 1;
        /// Registering event listeners.
        const EVENT_LISTENERS = 1 << 2;
        /// Dispatching custom events.
        const EVENT_DISPATCH = 1 << 3;
        /// Reading and writing element attributes.
        const ATTRIBUTES = 1 << 4;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_set() {
        let caps = Capabilities::default();
        assert!(caps.contains(Capabilities::QUERY_SELECTOR | Capabilities::EVENT_DISPATCH));
        assert_eq!(caps, Capabilities::all());
    }

    #[test]
    fn test_missing_flags() {
        let caps = Capabilities::CLASS_LIST | Capabilities::ATTRIBUTES;
        let missing = Capabilities::all().difference(caps);
        assert!(missing.contains(Capabilities::QUERY_SELECTOR));
        assert!(!missing.contains(Capabilities::CLASS_LIST));
    }
}
