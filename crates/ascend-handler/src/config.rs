/// Configuration for a [`ComponentHandler`](crate::ComponentHandler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Attribute recording which components have upgraded an element.
    pub marker_attribute: String,
    /// Cancelable event fired before an element is upgraded.
    pub upgrading_event: String,
    /// Event fired after each component is applied to an element.
    pub upgraded_event: String,
    /// Event fired after each instance is torn down.
    pub downgraded_event: String,
    /// Class added to the document element once boot succeeds.
    pub scripting_class: String,
    /// Host features boot requires before enabling the engine.
    pub required_capabilities: ascend_dom::Capabilities,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        HandlerConfig {
            marker_attribute: "data-upgraded".to_string(),
            upgrading_event: "component-upgrading".to_string(),
            upgraded_event: "component-upgraded".to_string(),
            downgraded_event: "component-downgraded".to_string(),
            scripting_class: "js-upgraded".to_string(),
            required_capabilities: ascend_dom::Capabilities::all(),
        }
    }
}

impl HandlerConfig {
    pub fn with_marker_attribute(mut self, name: impl Into<String>) -> Self {
        self.marker_attribute = name.into();
        self
    }

    pub fn with_event_names(
        mut self,
        upgrading: impl Into<String>,
        upgraded: impl Into<String>,
        downgraded: impl Into<String>,
    ) -> Self {
        self.upgrading_event = upgrading.into();
        self.upgraded_event = upgraded.into();
        self.downgraded_event = downgraded.into();
        self
    }

    pub fn with_scripting_class(mut self, class: impl Into<String>) -> Self {
        self.scripting_class = class.into();
        self
    }

    pub fn with_required_capabilities(mut self, caps: ascend_dom::Capabilities) -> Self {
        self.required_capabilities = caps;
        self
    }
}
