use super::*;

/// Tests finding an existing form by id.
///
/// Expected: Ok(Some) matching the stored row
#[tokio::test]
async fn finds_existing_form() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, form) = factory::helpers::create_form_with_dependencies(db).await?;

    let repo = FormRepository::new(db);
    let found = repo.find_by_id(form.id).await?.unwrap();

    assert_eq!(found.title, form.title);
    assert_eq!(found.author_id, user.id);
    assert_eq!(found.fields, form.fields);

    Ok(())
}

/// Tests looking up a form id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);

    assert!(repo.find_by_id(7).await?.is_none());

    Ok(())
}
