//! SeaORM item store tests
//!
//! Exercise the database backend against a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::ItemRequestFactory;
    use crate::{assert_err, assert_ok};
    use item_service::config::DatabaseConfig;
    use item_service::core::models::{ItemId, NewItem};
    use item_service::storage::ItemStore;
    use item_service::storage::database::{Database, DatabaseBackendType};
    use item_service::utils::error::ServiceError;

    fn new_item(name: &str) -> NewItem {
        ItemRequestFactory::named(name).into()
    }

    #[tokio::test]
    async fn test_database_health_check() {
        let db = assert_ok!(Database::new(&DatabaseConfig::in_memory()).await);
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        assert_ok!(db.migrate().await);
        assert_ok!(ItemStore::health_check(&db).await);
    }

    #[tokio::test]
    async fn test_create_assigns_identity_in_order() {
        let db = TestDatabase::new().await;

        let first = assert_ok!(db.db().create(new_item("Alpha")).await);
        let second = assert_ok!(db.db().create(new_item("Beta")).await);

        assert!(second.id > first.id);
        assert_eq!(first.name, "Alpha");
        assert_eq!(first.status, "NEW");
    }

    #[tokio::test]
    async fn test_unique_name_is_enforced_by_the_schema() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().create(new_item("Widget")).await);

        let err = assert_err!(db.db().create(new_item("WIDGET")).await);
        match err {
            ServiceError::Conflict(message) => {
                assert_eq!(message, "An item with this name (WIDGET) already exists")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_by_name_ignores_case() {
        let db = TestDatabase::seeded(&["Widget"]).await;

        let found = assert_ok!(db.db().find_by_name_ignore_case("wIdGeT").await);
        assert_eq!(found.map(|item| item.name), Some("Widget".to_string()));

        let missing = assert_ok!(db.db().find_by_name_ignore_case("Gadget").await);
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_updates_existing_item() {
        let db = TestDatabase::seeded(&["Widget"]).await;
        let mut item = assert_ok!(db.db().list_all().await).remove(0);

        item.status = "PROCESSED".to_string();
        item.description = "changed".to_string();
        let saved = assert_ok!(db.db().save(item.clone()).await);
        assert_eq!(saved, item);

        let stored = assert_ok!(db.db().find_by_id(item.id).await).unwrap();
        assert_eq!(stored.status, "PROCESSED");
        assert_eq!(stored.description, "changed");
    }

    #[tokio::test]
    async fn test_save_unknown_identity_inserts() {
        let db = TestDatabase::new().await;
        let item = new_item("Orphan").with_id(ItemId(40));

        let saved = assert_ok!(db.db().save(item.clone()).await);
        assert_eq!(saved.id, ItemId(40));
        assert_eq!(assert_ok!(db.db().list_all().await), vec![item]);
    }

    #[tokio::test]
    async fn test_save_rename_onto_other_item_conflicts() {
        let db = TestDatabase::seeded(&["Widget", "Gadget"]).await;
        let mut gadget = assert_ok!(db.db().find_by_name_ignore_case("gadget").await).unwrap();

        gadget.name = "widget".to_string();
        let err = assert_err!(db.db().save(gadget).await);
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let db = TestDatabase::seeded(&["Widget"]).await;
        let item = assert_ok!(db.db().list_all().await).remove(0);

        assert_ok!(db.db().delete(item.id).await);
        let err = assert_err!(db.db().delete(item.id).await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_page() {
        let db = TestDatabase::seeded(&["a", "b", "c", "d", "e"]).await;

        let page = assert_ok!(db.db().list_page(1, 2).await);
        let names: Vec<_> = page.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["c", "d"]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);

        let past_end = assert_ok!(db.db().list_page(3, 2).await);
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_identity() {
        let db = TestDatabase::seeded(&["zeta", "alpha", "mu"]).await;

        let names: Vec<_> = assert_ok!(db.db().list_all().await)
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    }
}
