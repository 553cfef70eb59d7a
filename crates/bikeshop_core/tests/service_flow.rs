use std::sync::{Arc, Mutex};

use bikeshop_core::db::open_db_in_memory;
use bikeshop_core::{
    Bicycle, BicycleDto, BikePart, BikePartDto, CatalogService, MemoryRepository, ServiceError,
    SqliteRepository,
};

fn memory_service() -> CatalogService<Bicycle, MemoryRepository<Bicycle>> {
    CatalogService::new(MemoryRepository::new())
}

fn escape_dto() -> BicycleDto {
    BicycleDto {
        model: "Escape".to_string(),
        kind: "Mountain".to_string(),
        manufacturer: "Giant".to_string(),
        release_year: 2024,
        weight: 8.2,
        price: 950.0,
        stock_quantity: 4,
    }
}

#[test]
fn create_then_get_returns_identical_fields() {
    let service = memory_service();

    let created = service.create(&escape_dto()).unwrap();
    let loaded = service.get(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.model, "Escape");
    assert_eq!(loaded.kind, "Mountain");
    assert_eq!(loaded.manufacturer, "Giant");
    assert_eq!(loaded.release_year, 2024);
    assert_eq!(loaded.weight, 8.2);
    assert_eq!(loaded.price, 950.0);
    assert_eq!(loaded.stock_quantity, 4);
}

#[test]
fn get_unknown_id_is_not_found() {
    let service = memory_service();
    assert!(matches!(
        service.get(9999).unwrap_err(),
        ServiceError::NotFound(9999)
    ));
}

#[test]
fn create_with_invalid_release_year_persists_nothing() {
    let service = memory_service();

    let dto = BicycleDto {
        release_year: 1999,
        ..escape_dto()
    };
    let err = service.create(&dto).unwrap_err();
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.field == "release_year"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(service.list(false).unwrap().is_empty());
}

#[test]
fn update_merges_fields_and_preserves_id() {
    let service = memory_service();
    let created = service.create(&escape_dto()).unwrap();

    let replacement = BicycleDto {
        model: "Defy".to_string(),
        kind: "Road".to_string(),
        price: 1200.0,
        ..escape_dto()
    };
    let updated = service.update(created.id, &replacement).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.model, "Defy");
    assert_eq!(updated.kind, "Road");
    assert_eq!(updated.price, 1200.0);

    let loaded = service.get(created.id).unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn update_unknown_id_is_not_found_before_validation() {
    let service = memory_service();

    // Invalid payload on an unknown id: not-found wins.
    let dto = BicycleDto {
        release_year: 1999,
        ..escape_dto()
    };
    assert!(matches!(
        service.update(9999, &dto).unwrap_err(),
        ServiceError::NotFound(9999)
    ));
}

#[test]
fn update_with_invalid_payload_leaves_record_untouched() {
    let service = memory_service();
    let created = service.create(&escape_dto()).unwrap();

    let dto = BicycleDto {
        price: -1.0,
        ..escape_dto()
    };
    assert!(matches!(
        service.update(created.id, &dto).unwrap_err(),
        ServiceError::Validation(_)
    ));

    let loaded = service.get(created.id).unwrap();
    assert_eq!(loaded.price, 950.0);
}

#[test]
fn delete_then_get_is_not_found() {
    let service = memory_service();
    let created = service.create(&escape_dto()).unwrap();

    service.delete(created.id).unwrap();
    assert!(matches!(
        service.get(created.id).unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete(created.id).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[test]
fn list_available_only_filters_out_of_stock_records() {
    let service = memory_service();

    let sold_out = BicycleDto {
        stock_quantity: 0,
        ..escape_dto()
    };
    let in_stock = BicycleDto {
        stock_quantity: 5,
        model: "Defy".to_string(),
        ..escape_dto()
    };
    service.create(&sold_out).unwrap();
    let kept = service.create(&in_stock).unwrap();

    let available = service.list(true).unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, kept.id);

    let all = service.list(false).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn service_runs_unchanged_over_the_sqlite_backend() {
    let conn = Arc::new(Mutex::new(open_db_in_memory().unwrap()));
    let bicycles: CatalogService<Bicycle, _> =
        CatalogService::new(SqliteRepository::new(Arc::clone(&conn)));
    let parts: CatalogService<BikePart, _> = CatalogService::new(SqliteRepository::new(conn));

    let created = bicycles.create(&escape_dto()).unwrap();
    assert_eq!(bicycles.get(created.id).unwrap().model, "Escape");

    let part = parts
        .create(&BikePartDto {
            part_type: "Chain".to_string(),
            description: "11-speed chain".to_string(),
            manufacturer: "Shimano".to_string(),
            price: 35.5,
            stock_quantity: 12,
        })
        .unwrap();
    assert_eq!(parts.get(part.id).unwrap().part_type, "Chain");

    bicycles.delete(created.id).unwrap();
    assert!(matches!(
        bicycles.get(created.id).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}
