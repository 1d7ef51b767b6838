use super::*;

/// Tests deleting a form with submissions.
///
/// Verifies the form and all of its submissions are removed while other forms'
/// submissions survive.
///
/// Expected: Ok(true), only the other form's submission left
#[tokio::test]
async fn deletes_form_and_its_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, form, _) = factory::helpers::create_submission_with_dependencies(db).await?;
    factory::create_submission(db, form.id).await?;
    let other_form = factory::create_form(db, user.id).await?;
    let kept = factory::create_submission(db, other_form.id).await?;

    let repo = FormRepository::new(db);
    let deleted = repo.delete(form.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(form.id).await?.is_none());

    let remaining = entity::prelude::Submission::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting a form that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_form() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}
