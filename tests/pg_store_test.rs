use std::env;

use license_exam_backend::{
    dto::result_dto::{CreateResultPayload, UpdateResultPayload},
    services::result_store::{PgResultStore, ResultStore},
};
use sqlx::postgres::PgPoolOptions;

async fn setup_store() -> PgResultStore {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    PgResultStore::new(pool)
}

#[tokio::test]
#[ignore = "needs a Postgres instance at DATABASE_URL"]
async fn postgres_round_trip() {
    let store = setup_store().await;

    let payload = CreateResultPayload {
        fields: UpdateResultPayload {
            first_name: Some("Pg".into()),
            last_name: None,
            color_blindness_test: 1,
            long_sightedness_test: 0,
            astigmatism_test: 1,
            body_reaction_test: 1,
            traffic_signs_score: Some(44),
            road_lines_score: None,
            right_of_way_score: Some(0),
            practical_test_result: 1,
        },
        vision_test_result: Some(1),
    };
    let id = store.create(&payload).await.expect("create");

    let all = store.list_all().await.expect("list");
    let row = all.iter().find(|r| r.id == id).expect("row present");
    assert_eq!(row.first_name.as_deref(), Some("Pg"));
    assert_eq!(row.last_name, None);
    assert_eq!(row.traffic_signs_score, Some(44));
    assert_eq!(row.road_lines_score, None);
    assert_eq!(row.right_of_way_score, Some(0));
    assert_eq!(row.vision_test_result, Some(1));

    let affected = store
        .update(id, &UpdateResultPayload::default())
        .await
        .expect("update");
    assert_eq!(affected, 1);
    let all = store.list_all().await.expect("list");
    let row = all.iter().find(|r| r.id == id).expect("row present");
    assert_eq!(row.first_name, None);
    assert_eq!(row.vision_test_result, Some(1));

    assert_eq!(store.delete(id).await.expect("delete"), 1);
    assert_eq!(store.delete(id).await.expect("delete again"), 0);
}
