#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Reply to the identity that asked.
    Requester(String),
    /// Everyone connected.
    Broadcast,
}
