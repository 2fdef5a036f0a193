use pretty_assertions::assert_eq;
use tempfile::TempDir;

use zoo_config::StoreConfig;
use zoo_core::entities::{Animal, Enclosure};
use zoo_core::enums::{ActivityPattern, AnimalSize, AssignMode, Climate, DietaryClass, SecurityLevel};
use zoo_core::habitat::HabitatSet;
use zoo_core::ids::{AnimalId, EnclosureId};
use zoo_engine::assign::auto_assign;
use zoo_engine::plan::reassign;
use zoo_engine::{AutoEnclosurePolicy, ZooSnapshot};
use zoo_store::{StoreError, TrailOp, TrailRecord, ZooStore};

fn animal(id: u32, name: &str, space: f64, security: SecurityLevel) -> Animal {
    Animal {
        id: AnimalId(id),
        name: name.into(),
        species: name.into(),
        size: AnimalSize::Large,
        dietary_class: DietaryClass::Herbivore,
        activity_pattern: ActivityPattern::Diurnal,
        space_requirement: space,
        security_requirement: security,
        category_id: None,
        enclosure_id: None,
        prey_id: None,
    }
}

fn seed() -> ZooSnapshot {
    ZooSnapshot::new(
        vec![
            animal(1, "Lion", 40.0, SecurityLevel::High),
            animal(2, "Zebra", 30.0, SecurityLevel::Low),
        ],
        vec![Enclosure {
            id: EnclosureId(1),
            name: "Plains".into(),
            climate: Climate::Temperate,
            habitat: HabitatSet::new(),
            security_level: SecurityLevel::Low,
            size: 100.0,
        }],
        Vec::new(),
    )
}

async fn seeded_store(dir: &TempDir) -> ZooStore {
    let store = ZooStore::init(dir.path(), &StoreConfig::default())
        .await
        .unwrap();
    store.replace(&seed()).await.unwrap();
    store
}

#[tokio::test]
async fn init_creates_empty_snapshot_once() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::default();
    assert!(!ZooStore::is_initialized(dir.path(), &config));

    let store = ZooStore::init(dir.path(), &config).await.unwrap();
    assert!(ZooStore::is_initialized(dir.path(), &config));
    assert_eq!(store.load().await.unwrap(), ZooSnapshot::default());
    assert!(store.data_path().ends_with(".zoo/zoo.json"));

    assert!(matches!(
        ZooStore::init(dir.path(), &config).await,
        Err(StoreError::InvalidState(_))
    ));
}

#[tokio::test]
async fn open_requires_init() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        ZooStore::open(dir.path(), &StoreConfig::default()),
        Err(StoreError::NotInitialized(_))
    ));
}

#[tokio::test]
async fn commit_plan_persists_and_records_trail() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let snapshot = store.load().await.unwrap();
    let outcome = auto_assign(&snapshot, AssignMode::Finish, &AutoEnclosurePolicy::default());
    let committed = store.commit_plan(&outcome.plan).await.unwrap();

    let reopened = ZooStore::open(dir.path(), &StoreConfig::default()).unwrap();
    let reloaded = reopened.load().await.unwrap();
    assert_eq!(reloaded, committed);
    assert_eq!(reloaded.status().unassigned_animals, 0);
    assert_eq!(reloaded.enclosures.len(), 2);

    let ops = store
        .trail()
        .read_all()
        .unwrap()
        .into_iter()
        .map(|record| record.op)
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            TrailOp::Import,
            TrailOp::CreateEnclosure,
            TrailOp::Reassign,
            TrailOp::Reassign,
        ]
    );
}

#[tokio::test]
async fn reset_plan_is_recorded_before_its_changes() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let snapshot = store.load().await.unwrap();
    let outcome = auto_assign(&snapshot, AssignMode::Reset, &AutoEnclosurePolicy::default());
    let committed = store.commit_plan(&outcome.plan).await.unwrap();

    assert!(committed.enclosure(EnclosureId(1)).is_none());
    let records = store.trail().read_all().unwrap();
    assert_eq!(records[1].op, TrailOp::Reset);
    assert_eq!(records[2].op, TrailOp::RemoveEnclosure);
    assert_eq!(records[2].id, "1");
}

#[tokio::test]
async fn manual_move_is_committed_without_feasibility_checks() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let snapshot = store.load().await.unwrap();
    let change = reassign(&snapshot, AnimalId(1), Some(EnclosureId(1))).unwrap();
    let committed = store.commit_reassignment(&change).await.unwrap();

    assert_eq!(
        committed.animal(AnimalId(1)).unwrap().enclosure_id,
        Some(EnclosureId(1))
    );
    let last = store.trail().read_all().unwrap().pop().unwrap();
    assert_eq!(last.op, TrailOp::Reassign);
    assert_eq!(last.id, "1");
    assert_eq!(last.data, serde_json::json!({ "enclosure_id": 1 }));
}

#[tokio::test]
async fn stale_move_target_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let stale = zoo_engine::Reassignment {
        animal_id: AnimalId(1),
        enclosure_id: Some(EnclosureId(99)),
    };
    assert!(matches!(
        store.commit_reassignment(&stale).await,
        Err(StoreError::Core(_))
    ));
    assert_eq!(store.load().await.unwrap(), seed());
}

#[tokio::test]
async fn duplicate_ids_on_disk_are_invalid_state() {
    let dir = TempDir::new().unwrap();
    let store = ZooStore::init(dir.path(), &StoreConfig::default())
        .await
        .unwrap();
    let mut broken = seed();
    broken.animals.push(animal(1, "Clone", 1.0, SecurityLevel::Low));
    tokio::fs::write(store.data_path(), serde_json::to_string(&broken).unwrap())
        .await
        .unwrap();

    assert!(matches!(
        store.load().await,
        Err(StoreError::InvalidState(reason)) if reason.contains("duplicate animal id 1")
    ));
    assert!(matches!(
        store.replace(&broken).await,
        Err(StoreError::InvalidState(_))
    ));
}

#[tokio::test]
async fn negative_areas_are_refused_on_replace_and_load() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;
    let mut broken = seed();
    broken.animals[1].space_requirement = -5.0;
    broken.enclosures[0].size = -10.0;

    assert!(matches!(
        store.replace(&broken).await,
        Err(StoreError::InvalidState(reason)) if reason.contains("invalid space requirement")
    ));
    assert_eq!(store.load().await.unwrap(), seed());

    tokio::fs::write(store.data_path(), serde_json::to_string(&broken).unwrap())
        .await
        .unwrap();
    assert!(matches!(store.load().await, Err(StoreError::InvalidState(_))));
}

#[tokio::test]
async fn malformed_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let store = ZooStore::init(dir.path(), &StoreConfig::default())
        .await
        .unwrap();
    tokio::fs::write(store.data_path(), "{ not json").await.unwrap();
    assert!(matches!(store.load().await, Err(StoreError::Json(_))));
}

#[tokio::test]
async fn trail_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        trail: false,
        ..StoreConfig::default()
    };
    let store = ZooStore::init(dir.path(), &config).await.unwrap();
    store.replace(&seed()).await.unwrap();

    assert!(!store.trail().is_enabled());
    assert!(!dir.path().join(".zoo/trail.jsonl").exists());
}

#[tokio::test]
async fn trail_records_match_their_schema() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;
    let snapshot = store.load().await.unwrap();
    let outcome = auto_assign(&snapshot, AssignMode::Reset, &AutoEnclosurePolicy::default());
    store.commit_plan(&outcome.plan).await.unwrap();

    let schema = serde_json::to_value(schemars::schema_for!(TrailRecord)).unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();
    for record in store.trail().read_all().unwrap() {
        let value = serde_json::to_value(&record).unwrap();
        assert!(validator.is_valid(&value), "invalid trail record: {value}");
    }
}

#[tokio::test]
async fn no_temp_file_is_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;
    let snapshot = store.load().await.unwrap();
    let change = reassign(&snapshot, AnimalId(2), None).unwrap();
    store.commit_reassignment(&change).await.unwrap();

    let mut names = std::fs::read_dir(dir.path().join(".zoo"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, vec!["trail.jsonl".to_string(), "zoo.json".to_string()]);
}
