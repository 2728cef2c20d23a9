use crate::config::enums::single_flight_policy::SingleFlightPolicy;
use crate::query::structs::in_flight_guard::InFlightGuard;
use crate::query::structs::in_flight_set::InFlightSet;

impl InFlightSet {
    pub fn new() -> InFlightSet {
        InFlightSet::default()
    }

    /// Marks `identity` as running in one step; `None` if it already is.
    pub fn try_acquire(&self, identity: &str, policy: &SingleFlightPolicy) -> Option<InFlightGuard> {
        let key = policy.flight_key(identity);
        let mut lock = self.keys.lock();
        if !lock.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            set: self.clone(),
            key: key.to_string(),
            gauge: None,
        })
    }

    pub fn contains(&self, identity: &str, policy: &SingleFlightPolicy) -> bool {
        self.keys.lock().contains(policy.flight_key(identity))
    }

    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
