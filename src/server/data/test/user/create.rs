use super::*;

fn param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        fullname: Some("Alice Example".to_string()),
        password_hash: "hash".to_string(),
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with the user stored under the given username
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("alice")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.fullname.as_deref(), Some("Alice Example"));
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests creating a user without a full name.
///
/// Expected: Ok with fullname stored as None
#[tokio::test]
async fn creates_user_without_fullname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            fullname: None,
            ..param("bob")
        })
        .await?;

    assert_eq!(user.fullname, None);

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique index.
///
/// Verifies the error is recognisable as a unique-constraint violation and that the
/// original row is left unchanged.
///
/// Expected: Err with UniqueConstraintViolation, one row remaining
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.create(param("alice")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = repo.find_by_username("alice").await?.unwrap();
    assert_eq!(stored.password_hash, existing.password_hash);
    assert_eq!(stored.fullname, existing.fullname);

    Ok(())
}
