#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use parking_lot::Mutex;
use playerstats::common::structs::clock::Clock;
use playerstats::config::structs::configuration::Configuration;
use playerstats::output::structs::console_output::ConsoleOutput;
use playerstats::output::structs::rendered_result::RenderedResult;
use playerstats::output::traits::output_boundary::OutputBoundary;
use playerstats::player::enums::directory_error::DirectoryError;
use playerstats::player::structs::memory_directory::MemoryDirectory;
use playerstats::player::structs::player_profile::PlayerProfile;
use playerstats::player::structs::player_record::PlayerRecord;
use playerstats::player::traits::player_directory::PlayerDirectory;
use playerstats::query::enums::destination::Destination;
use playerstats::query::enums::query_error::QueryError;
use playerstats::query::enums::query_result::QueryResult;
use playerstats::query::structs::query_dispatcher::QueryDispatcher;
use playerstats::query::structs::request::Request;
use playerstats::statistic::enums::qualifier_kind::QualifierKind;
use playerstats::statistic::enums::statistic_kind::StatisticKind;
use playerstats::statistic::structs::static_vocabulary::StaticVocabulary;

pub type TestDispatcher = Arc<QueryDispatcher>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_console_interval = 0;
    config.query.scan_timeout_ms = 5_000;
    config
}

pub fn create_test_vocabulary() -> Arc<StaticVocabulary> {
    let mut vocabulary = StaticVocabulary::new();
    vocabulary.add_statistic("jump", StatisticKind::Untyped);
    vocabulary.add_statistic("blocks_mined", StatisticKind::Block);
    vocabulary.add_statistic("kill_entity", StatisticKind::Entity);
    vocabulary.add_statistic("use_item", StatisticKind::Item);
    vocabulary.add_qualifier(QualifierKind::Block, "stone");
    vocabulary.add_qualifier(QualifierKind::Block, "dirt");
    vocabulary.add_qualifier(QualifierKind::Entity, "zombie");
    vocabulary.add_qualifier(QualifierKind::Item, "stone");
    vocabulary.add_qualifier(QualifierKind::Item, "diamond_sword");
    Arc::new(vocabulary)
}

/// Ada: jump 10, blocks_mined/stone 42. Grace: jump 25. Linus: jump 25,
/// blocks_mined/stone 7. Margaret: nothing recorded.
pub fn create_test_directory() -> Arc<MemoryDirectory> {
    let directory = MemoryDirectory::new();
    directory.insert_player(
        PlayerRecord::new("Ada")
            .with_stat("jump", None, 10)
            .with_stat("blocks_mined", Some("stone"), 42)
            .with_profile(PlayerProfile { whitelisted: true, banned: false, last_played: None }),
    );
    directory.insert_player(PlayerRecord::new("Grace").with_stat("jump", None, 25));
    directory.insert_player(
        PlayerRecord::new("Linus")
            .with_stat("jump", None, 25)
            .with_stat("blocks_mined", Some("stone"), 7),
    );
    directory.insert_player(PlayerRecord::new("Margaret"));
    Arc::new(directory)
}

/// Renders like the console boundary and records every delivery.
#[derive(Default)]
pub struct RecordingOutput {
    pub console: ConsoleOutput,
    pub deliveries: Mutex<Vec<(Destination, RenderedResult)>>,
}

impl RecordingOutput {
    pub fn deliveries(&self) -> Vec<(Destination, RenderedResult)> {
        self.deliveries.lock().clone()
    }

    pub fn last_body(&self) -> Option<String> {
        self.deliveries.lock().last().map(|(_, payload)| payload.body().to_string())
    }

    pub fn count(&self) -> usize {
        self.deliveries.lock().len()
    }
}

impl OutputBoundary for RecordingOutput {
    fn render(&self, result: &QueryResult, request: &Request) -> RenderedResult {
        self.console.render(result, request)
    }

    fn render_failure(&self, error: &QueryError, request: &Request) -> RenderedResult {
        self.console.render_failure(error, request)
    }

    fn deliver(&self, payload: &RenderedResult, destination: &Destination) {
        self.deliveries.lock().push((destination.clone(), payload.clone()));
    }
}

/// Sleeps before every counter lookup.
pub struct SlowDirectory {
    pub inner: MemoryDirectory,
    pub delay: Duration,
}

impl SlowDirectory {
    pub fn new(players: usize, delay: Duration) -> SlowDirectory {
        let inner = MemoryDirectory::new();
        for index in 0..players {
            inner.insert_player(PlayerRecord::new(&format!("Player{index}")).with_stat("jump", None, index as i32));
        }
        SlowDirectory { inner, delay }
    }
}

impl PlayerDirectory for SlowDirectory {
    fn known_identities(&self) -> Vec<String> {
        self.inner.known_identities()
    }

    fn raw_stat_value(&self, identity: &str, kind: StatisticKind, statistic: &str, qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError> {
        std::thread::sleep(self.delay);
        self.inner.raw_stat_value(identity, kind, statistic, qualifier)
    }
}

/// Knows Ada and Grace but every lookup fails.
pub struct FailingDirectory;

impl PlayerDirectory for FailingDirectory {
    fn known_identities(&self) -> Vec<String> {
        vec![String::from("Ada"), String::from("Grace")]
    }

    fn raw_stat_value(&self, _identity: &str, _kind: StatisticKind, _statistic: &str, _qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError> {
        Err(DirectoryError::Backend(String::from("storage offline")))
    }
}

/// Panics on every lookup.
pub struct PanickingDirectory;

impl PlayerDirectory for PanickingDirectory {
    fn known_identities(&self) -> Vec<String> {
        vec![String::from("Ada")]
    }

    fn raw_stat_value(&self, _identity: &str, _kind: StatisticKind, _statistic: &str, _qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError> {
        panic!("corrupted statistics file");
    }
}

/// Every lookup sleeps for `delay` and records how many lookups overlap.
pub struct HangingDirectory {
    pub delay: Duration,
    pub active: AtomicUsize,
    pub peak: AtomicUsize,
}

impl HangingDirectory {
    pub fn new(delay: Duration) -> HangingDirectory {
        HangingDirectory { delay, active: AtomicUsize::new(0), peak: AtomicUsize::new(0) }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl PlayerDirectory for HangingDirectory {
    fn known_identities(&self) -> Vec<String> {
        vec![String::from("Ada"), String::from("Grace"), String::from("Linus"), String::from("Margaret")]
    }

    fn raw_stat_value(&self, _identity: &str, _kind: StatisticKind, _statistic: &str, _qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError> {
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now_active, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(Some(1))
    }
}

/// Renders normally but panics on delivery.
#[derive(Default)]
pub struct PanickingOutput {
    pub console: ConsoleOutput,
}

impl OutputBoundary for PanickingOutput {
    fn render(&self, result: &QueryResult, request: &Request) -> RenderedResult {
        self.console.render(result, request)
    }

    fn render_failure(&self, error: &QueryError, request: &Request) -> RenderedResult {
        self.console.render_failure(error, request)
    }

    fn deliver(&self, _payload: &RenderedResult, _destination: &Destination) {
        panic!("chat channel closed");
    }
}

pub struct TestHarness {
    pub dispatcher: TestDispatcher,
    pub output: Arc<RecordingOutput>,
    pub clock: Arc<Clock>,
}

/// "Guest" lacks the share permission, everyone else has it.
pub async fn create_test_harness(config: Configuration, directory: Arc<dyn PlayerDirectory>) -> TestHarness {
    let output = Arc::new(RecordingOutput::default());
    let clock = Arc::new(Clock::default());
    let dispatcher = QueryDispatcher::new(
        Arc::new(config),
        create_test_vocabulary(),
        directory,
        output.clone(),
        Arc::new(|identity: &str, _permission: &str| identity != "Guest"),
        clock.clone(),
    ).await;
    TestHarness {
        dispatcher: Arc::new(dispatcher),
        output,
        clock,
    }
}

pub async fn create_default_harness() -> TestHarness {
    create_test_harness(create_test_config(), create_test_directory()).await
}
