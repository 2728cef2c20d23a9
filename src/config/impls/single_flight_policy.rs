use crate::config::enums::single_flight_policy::SingleFlightPolicy;

/// Key held in the in-flight set while a query runs under the global policy.
pub const GLOBAL_FLIGHT_KEY: &str = "*";

impl SingleFlightPolicy {
    pub fn is_global(&self) -> bool {
        matches!(self, SingleFlightPolicy::global)
    }

    /// The in-flight key an identity occupies under this policy.
    pub fn flight_key<'a>(&self, identity: &'a str) -> &'a str {
        match self {
            SingleFlightPolicy::per_identity => identity,
            SingleFlightPolicy::global => GLOBAL_FLIGHT_KEY,
        }
    }
}
