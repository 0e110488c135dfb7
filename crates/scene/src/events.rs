use bevy::prelude::*;

/// Request to open a building's link in a new browsing context.
///
/// The pick resolver emits one per successful click on a linked building.
/// Whatever owns the egress consumes it; the desktop app hands the URL to
/// the system browser.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct OpenLink {
    pub url: String,
}
