use ahash::AHashMap;
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::statistic::enums::qualifier_kind::QualifierKind;
use crate::statistic::enums::statistic_kind::StatisticKind;
use crate::statistic::structs::static_vocabulary::StaticVocabulary;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;
use crate::statistic::structs::vocabulary_definition::VocabularyDefinition;
use crate::statistic::traits::statistic_vocabulary::StatisticVocabulary;

impl StaticVocabulary {
    pub fn new() -> StaticVocabulary {
        StaticVocabulary {
            statistics: AHashMap::new(),
            qualifiers: AHashMap::new(),
        }
    }

    /// Registers a statistic. Returns false if the name was already known.
    pub fn add_statistic(&mut self, name: &str, kind: StatisticKind) -> bool {
        let key = name.trim().to_lowercase();
        if key.is_empty() || self.statistics.contains_key(&key) {
            return false;
        }
        self.statistics.insert(key, StatisticDescriptor { name: name.trim().to_string(), kind });
        true
    }

    /// Registers a qualifier name under `kind`. Returns false if it was already known.
    pub fn add_qualifier(&mut self, kind: QualifierKind, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let names = self.qualifiers.entry(kind).or_default();
        if names.contains_key(&key) {
            return false;
        }
        names.insert(key, name.trim().to_string());
        true
    }

    pub fn from_definition(definition: &VocabularyDefinition) -> StaticVocabulary {
        let mut vocabulary = StaticVocabulary::new();
        for (name, kind) in definition.statistics.iter() {
            vocabulary.add_statistic(name, *kind);
        }
        for name in definition.blocks.iter() {
            vocabulary.add_qualifier(QualifierKind::Block, name);
        }
        for name in definition.entities.iter() {
            vocabulary.add_qualifier(QualifierKind::Entity, name);
        }
        for name in definition.items.iter() {
            vocabulary.add_qualifier(QualifierKind::Item, name);
        }
        vocabulary
    }

    pub fn to_definition(&self) -> VocabularyDefinition {
        VocabularyDefinition {
            statistics: self.statistics.values().map(|descriptor| (descriptor.name.clone(), descriptor.kind)).collect(),
            blocks: self.qualifier_names(QualifierKind::Block),
            entities: self.qualifier_names(QualifierKind::Entity),
            items: self.qualifier_names(QualifierKind::Item),
        }
    }

    pub fn load(data: &[u8]) -> Result<StaticVocabulary, serde_json::Error> {
        let definition: VocabularyDefinition = serde_json::from_slice(data)?;
        Ok(Self::from_definition(&definition))
    }

    pub fn load_file(path: &str) -> Result<StaticVocabulary, CustomError> {
        let data = std::fs::read(path)
            .map_err(|e| CustomError::new(&format!("unable to read vocabulary file {path}: {e}")))?;
        let vocabulary = Self::load(data.as_slice())
            .map_err(|e| CustomError::new(&format!("unable to parse vocabulary file {path}: {e}")))?;
        info!("[VOCABULARY] Loaded {} statistics from {}", vocabulary.statistics.len(), path);
        Ok(vocabulary)
    }

    pub fn statistic_count(&self) -> usize {
        self.statistics.len()
    }
}

impl StatisticVocabulary for StaticVocabulary {
    fn statistic_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.statistics.values().map(|descriptor| descriptor.name.clone()).collect();
        names.sort();
        names
    }

    fn qualifier_names(&self, kind: QualifierKind) -> Vec<String> {
        let mut names: Vec<String> = self.qualifiers
            .get(&kind)
            .map(|names| names.values().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn find_statistic(&self, name: &str) -> Option<StatisticDescriptor> {
        self.statistics.get(&name.to_lowercase()).cloned()
    }

    fn find_qualifier(&self, kind: QualifierKind, name: &str) -> Option<String> {
        self.qualifiers.get(&kind)?.get(&name.to_lowercase()).cloned()
    }
}
