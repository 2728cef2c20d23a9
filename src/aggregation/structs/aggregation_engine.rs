use std::sync::Arc;
use crate::player::traits::player_directory::PlayerDirectory;

#[derive(Clone)]
pub struct AggregationEngine {
    pub(crate) directory: Arc<dyn PlayerDirectory>,
}
