use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("carol")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("carol").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up a username nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
