#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    /// Prefix for broadcast deliveries.
    pub(crate) broadcast_prefix: String,
}
