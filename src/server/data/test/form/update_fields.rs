use super::*;

/// Tests replacing the field schema of a form.
///
/// Verifies the fields are replaced wholesale and the rest of the row is untouched.
///
/// Expected: Ok(Some) with new fields and the original title
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, form) = factory::helpers::create_form_with_dependencies(db).await?;

    let repo = FormRepository::new(db);
    let updated = repo
        .update_fields(form.id, json!([{ "label": "Email", "type": "email" }]))
        .await?
        .unwrap();

    assert_eq!(updated.id, form.id);
    assert_eq!(updated.title, form.title);
    assert_eq!(updated.fields, json!([{ "label": "Email", "type": "email" }]));

    let stored = repo.find_by_id(form.id).await?.unwrap();
    assert_eq!(stored.fields, updated.fields);

    Ok(())
}

/// Tests updating a form that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_form() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);
    let updated = repo.update_fields(42, json!([])).await?;

    assert!(updated.is_none());

    Ok(())
}
