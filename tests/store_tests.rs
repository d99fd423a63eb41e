mod common;
use common::{draft, employee, roster_json};
use empmanager::core::seed::initial_employees;
use empmanager::core::{EmployeeStore, Field, NotFoundError, UpdateError};
use empmanager::models::{
    Employee, EmployeeDraft, EmployeeQuery, Gender, GenderFilter, StatusFilter,
};
use empmanager::storage::{EMPLOYEES_KEY, MemorySlots};

fn alice_and_bob() -> MemorySlots {
    let list = vec![
        employee("1", "Alice", Gender::Female, true),
        employee("2", "Bob", Gender::Male, false),
    ];
    MemorySlots::new().with_slot(EMPLOYEES_KEY, &roster_json(&list))
}

fn stored(slots: &MemorySlots) -> Vec<Employee> {
    let raw = slots.peek(EMPLOYEES_KEY).expect("employees slot written");
    serde_json::from_str(raw).expect("valid payload")
}

#[test]
fn test_empty_slot_is_seeded_and_written() {
    let store = EmployeeStore::load(MemorySlots::new());

    assert_eq!(store.employees(), initial_employees().as_slice());
    assert!(store.storage_error().is_none());

    let slots = store.into_slots();
    assert_eq!(stored(&slots), initial_employees());
}

#[test]
fn test_existing_slot_is_rehydrated_not_seeded() {
    let store = EmployeeStore::load(alice_and_bob());

    let ids: Vec<&str> = store.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_add_appends_and_persists() {
    let mut store = EmployeeStore::load(alice_and_bob());

    let emp = store
        .add(&draft("3", "Carol", "Female", true))
        .expect("valid draft");

    assert_eq!(emp.id, "3");
    assert_eq!(store.employees().last(), Some(&emp));

    let slots = store.into_slots();
    let persisted = stored(&slots);
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[2].name, "Carol");
}

#[test]
fn test_duplicate_id_is_rejected_without_mutation() {
    let mut store = EmployeeStore::load(alice_and_bob());
    let before = store.employees().to_vec();

    let errs = store
        .add(&draft("1", "Another Alice", "Female", true))
        .expect_err("duplicate id");

    assert_eq!(errs.get(Field::Id), Some("Employee ID must be unique"));
    assert_eq!(errs.len(), 1);
    assert_eq!(store.employees(), before.as_slice());
}

#[test]
fn test_ids_stay_unique_over_many_adds() {
    let mut store = EmployeeStore::load(MemorySlots::new());

    for i in 0..20 {
        // every id is tried twice
        let id = format!("X{}", i % 10);
        let _ = store.add(&draft(&id, "Someone", "Male", true));
    }

    let mut ids: Vec<&str> = store.employees().iter().map(|e| e.id.as_str()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, initial_employees().len() + 10);
}

#[test]
fn test_all_six_errors_reported_at_once() {
    let mut store = EmployeeStore::load(alice_and_bob());

    let bad = EmployeeDraft {
        id: "   ".into(),
        name: "Al".into(),
        gender: String::new(),
        dob: String::new(),
        state: String::new(),
        is_active: true,
        image: String::new(),
    };

    let errs = store.add(&bad).expect_err("invalid draft");

    assert_eq!(errs.len(), 6);
    assert_eq!(errs.get(Field::Id), Some("Employee ID required"));
    assert_eq!(errs.get(Field::Name), Some("Min 3 characters"));
    assert_eq!(errs.get(Field::Gender), Some("Gender required"));
    assert_eq!(errs.get(Field::Dob), Some("DOB required"));
    assert_eq!(errs.get(Field::State), Some("State required"));
    assert_eq!(errs.get(Field::Image), Some("Profile image is required"));
    assert_eq!(store.employees().len(), 2);
}

#[test]
fn test_update_replaces_in_place_and_keeps_id() {
    let mut store = EmployeeStore::load(alice_and_bob());

    let mut d = draft("ignored", "Alice Cooper", "Female", false);
    d.state = "Tamil Nadu".into();

    let emp = store.update("1", &d).expect("valid update");

    assert_eq!(emp.id, "1");
    assert_eq!(store.employees()[0], emp);
    assert_eq!(store.employees()[0].name, "Alice Cooper");
    assert!(!store.employees()[0].is_active);
    assert_eq!(store.employees()[1].id, "2");
}

#[test]
fn test_update_own_id_does_not_count_as_duplicate() {
    let mut store = EmployeeStore::load(alice_and_bob());

    let d = EmployeeDraft::from(&store.employees()[1].clone());
    let emp = store.update("2", &d).expect("unchanged record is valid");

    assert_eq!(emp, store.employees()[1]);
}

#[test]
fn test_update_invalid_draft_leaves_store_unchanged() {
    let mut store = EmployeeStore::load(alice_and_bob());
    let before = store.employees().to_vec();

    let mut d = draft("1", "Al", "Female", true);
    d.dob = "31/12/1990".into();

    match store.update("1", &d) {
        Err(UpdateError::Validation(errs)) => {
            assert!(errs.contains(Field::Name));
            assert!(errs.contains(Field::Dob));
            assert!(!errs.contains(Field::Id));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.employees(), before.as_slice());
}

#[test]
fn test_update_missing_id_is_not_found() {
    let mut store = EmployeeStore::load(alice_and_bob());

    let res = store.update("99", &draft("99", "Nobody", "Male", true));

    assert_eq!(res, Err(UpdateError::NotFound(NotFoundError("99".into()))));
    assert_eq!(store.employees().len(), 2);
}

#[test]
fn test_remove_deletes_exactly_one() {
    let mut store = EmployeeStore::load(MemorySlots::new());
    let before = store.employees().to_vec();
    let target = before[2].id.clone();

    let removed = store.remove(&target).expect("existing id");

    assert_eq!(removed, before[2]);
    assert_eq!(store.employees().len(), before.len() - 1);

    let expected: Vec<Employee> = before.into_iter().filter(|e| e.id != target).collect();
    assert_eq!(store.employees(), expected.as_slice());
}

#[test]
fn test_remove_twice_fails_second_time() {
    let mut store = EmployeeStore::load(alice_and_bob());

    assert!(store.remove("2").is_ok());
    assert_eq!(store.remove("2"), Err(NotFoundError("2".into())));
}

#[test]
fn test_toggle_twice_restores_status() {
    let mut store = EmployeeStore::load(alice_and_bob());
    let original = store.get("1").cloned().expect("alice");

    let once = store.toggle_active("1").expect("toggle");
    assert_eq!(once.is_active, !original.is_active);
    assert_eq!(once.name, original.name);
    assert_eq!(once.image, original.image);

    let twice = store.toggle_active("1").expect("toggle");
    assert_eq!(twice, original);
}

#[test]
fn test_toggle_unknown_id() {
    let mut store = EmployeeStore::load(alice_and_bob());
    assert_eq!(store.toggle_active("nope"), Err(NotFoundError("nope".into())));
}

#[test]
fn test_toggle_is_persisted() {
    let mut store = EmployeeStore::load(alice_and_bob());
    store.toggle_active("2").expect("toggle");

    let slots = store.into_slots();
    assert!(stored(&slots)[1].is_active);
}

#[test]
fn test_filter_name_substring_and_status() {
    let store = EmployeeStore::load(alice_and_bob());

    let q = EmployeeQuery::new("a", GenderFilter::Any, StatusFilter::Active);
    let names: Vec<&str> = store.filter(&q).iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["Alice"]);
}

#[test]
fn test_filter_is_case_insensitive_and_keeps_order() {
    let store = EmployeeStore::load(MemorySlots::new());

    let q = EmployeeQuery::new("KA", GenderFilter::Any, StatusFilter::Any);
    let ids: Vec<&str> = store.filter(&q).iter().map(|e| e.id.as_str()).collect();

    let expected: Vec<&str> = store
        .employees()
        .iter()
        .filter(|e| e.name.to_lowercase().contains("ka"))
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, expected);
    assert!(!ids.is_empty());
}

#[test]
fn test_filter_by_gender_and_inactive() {
    let store = EmployeeStore::load(alice_and_bob());

    let male = EmployeeQuery::new("", GenderFilter::Only(Gender::Male), StatusFilter::Any);
    assert_eq!(store.filter(&male).len(), 1);
    assert_eq!(store.filter(&male)[0].id, "2");

    let inactive_women =
        EmployeeQuery::new("", GenderFilter::Only(Gender::Female), StatusFilter::Inactive);
    assert!(store.filter(&inactive_women).is_empty());

    assert_eq!(store.filter(&EmployeeQuery::default()).len(), 2);
}

#[test]
fn test_summary_is_consistent() {
    let mut store = EmployeeStore::load(MemorySlots::new());

    let check = |s: &EmployeeStore<MemorySlots>| {
        let sum = s.summary();
        assert_eq!(sum.active + sum.inactive, sum.total);
        assert_eq!(sum.total, s.employees().len());
    };

    check(&store);
    store.add(&draft("N1", "New Person", "Male", false)).expect("add");
    check(&store);
    store.toggle_active("EMP001").expect("toggle");
    check(&store);
    store.remove("EMP002").expect("remove");
    check(&store);

    let sum = store.summary();
    assert_eq!(sum.total, 5);
    assert_eq!(sum.active, 1);
    assert_eq!(sum.inactive, 4);
}

#[test]
fn test_reload_returns_persisted_state() {
    let mut store = EmployeeStore::load(MemorySlots::new());
    store.add(&draft("N1", "New Person", "Male", true)).expect("add");
    store.toggle_active("N1").expect("toggle");
    store.remove("EMP003").expect("remove");
    let snapshot = store.employees().to_vec();

    let reopened = EmployeeStore::load(store.into_slots());
    assert_eq!(reopened.employees(), snapshot.as_slice());
}

#[test]
fn test_corrupt_slot_is_treated_as_empty() {
    let slots = MemorySlots::new().with_slot(EMPLOYEES_KEY, "{not json");
    let mut store = EmployeeStore::load(slots);

    assert!(store.employees().is_empty());
    let err = store.take_storage_error().expect("corruption reported");
    assert_eq!(err.key, EMPLOYEES_KEY);
}

#[test]
fn test_duplicate_ids_in_payload_are_dropped_on_load() {
    let list = vec![
        employee("1", "Alice", Gender::Female, true),
        employee("1", "Alice Twin", Gender::Female, false),
    ];
    let slots = MemorySlots::new().with_slot(EMPLOYEES_KEY, &roster_json(&list));

    let mut store = EmployeeStore::load(slots);
    assert_eq!(store.employees().len(), 1);
    assert_eq!(store.employees()[0].name, "Alice");
    assert!(store.take_storage_error().is_some());
}

#[test]
fn test_unavailable_storage_degrades_to_memory() {
    let mut slots = alice_and_bob();
    slots.set_available(false);

    let mut store = EmployeeStore::load(slots);
    assert!(store.employees().is_empty());
    assert!(store.take_storage_error().is_some());

    // still usable for the session
    let emp = store.add(&draft("3", "Carol", "Female", true)).expect("add");
    assert_eq!(store.employees(), &[emp]);
    assert!(store.take_storage_error().is_some());
}

#[test]
fn test_write_failure_keeps_in_memory_change() {
    let mut slots = alice_and_bob();
    slots.fail_writes(true);

    let mut store = EmployeeStore::load(slots);
    assert_eq!(store.employees().len(), 2);
    assert!(store.storage_error().is_none());

    let emp = store.add(&draft("9", "Nine Nine", "Male", true)).expect("add");
    assert_eq!(store.employees().len(), 3);
    assert_eq!(store.get("9"), Some(&emp));
    let err = store.take_storage_error().expect("write failure recorded");
    assert_eq!(err.key, EMPLOYEES_KEY);

    store.toggle_active("1").expect("toggle");
    assert!(!store.get("1").expect("alice").is_active);
    assert!(store.storage_error().is_some());

    // the slot still holds what was there before the failed writes
    let slots = store.into_slots();
    let persisted = stored(&slots);
    assert_eq!(persisted.len(), 2);
    assert!(persisted[0].is_active);
}

#[test]
fn test_invalid_stored_records_are_dropped_on_load() {
    let raw = r#"[
        {"id":"","name":"X","gender":"Male","dob":"1990-01-15","state":"Kerala","isActive":true,"image":""},
        {"id":" 7","name":" Seven Seas ","gender":"Female","dob":"1991-02-03","state":"Karnataka","isActive":false,"image":"data:image/png;base64,iVBORw0KGgo="},
        {"id":"8","name":"Eight","gender":"Male","dob":"1992-03-04","state":"Kerala","isActive":true,"image":"   "}
    ]"#;
    let slots = MemorySlots::new().with_slot(EMPLOYEES_KEY, raw);

    let mut store = EmployeeStore::load(slots);

    let ids: Vec<&str> = store.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["7"]);
    assert_eq!(store.employees()[0].name, "Seven Seas");
    assert!(!store.employees()[0].is_active);
    assert!(store.take_storage_error().is_some());

    // the normalized id now takes part in the uniqueness check
    let errs = store
        .add(&draft("7", "Another Seven", "Male", true))
        .expect_err("id already taken");
    assert_eq!(errs.get(Field::Id), Some("Employee ID must be unique"));

    // the next write only carries valid records
    store.toggle_active("7").expect("toggle");
    let slots = store.into_slots();
    let persisted = stored(&slots);
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, "7");
    assert!(persisted[0].is_active);
}

#[test]
fn test_valid_payload_loads_without_error() {
    let mut store = EmployeeStore::load(alice_and_bob());
    assert!(store.take_storage_error().is_none());
    assert_eq!(store.employees().len(), 2);
}
