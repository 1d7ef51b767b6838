use super::*;

/// Tests listing submissions of one form.
///
/// Verifies submissions of other forms are excluded and order follows insertion.
///
/// Expected: Ok with the form's two submissions, oldest first
#[tokio::test]
async fn returns_forms_submissions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, form, first) = factory::helpers::create_submission_with_dependencies(db).await?;
    let second = factory::submission::SubmissionFactory::new(db, form.id)
        .data(json!({ "Name": "Grace" }))
        .build()
        .await?;
    let other_form = factory::create_form(db, user.id).await?;
    factory::create_submission(db, other_form.id).await?;

    let repo = SubmissionRepository::new(db);
    let submissions = repo.find_by_form(form.id).await?;

    let ids: Vec<i32> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(submissions[1].data, json!({ "Name": "Grace" }));

    Ok(())
}

/// Tests listing submissions of a form nobody answered.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unanswered_form() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, form) = factory::helpers::create_form_with_dependencies(db).await?;

    let repo = SubmissionRepository::new(db);

    assert!(repo.find_by_form(form.id).await?.is_empty());

    Ok(())
}
