use std::sync::Arc;
use crate::statistic::traits::statistic_vocabulary::StatisticVocabulary;

#[derive(Clone)]
pub struct StatisticResolver {
    pub(crate) vocabulary: Arc<dyn StatisticVocabulary>,
}
