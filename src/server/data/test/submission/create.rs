use super::*;

/// Tests storing a submission for an existing form.
///
/// Expected: Ok with the answer payload stored verbatim
#[tokio::test]
async fn creates_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, form) = factory::helpers::create_form_with_dependencies(db).await?;

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create(CreateSubmissionParam {
            form_id: form.id,
            data: json!({ "Name": "Ada", "Email": "ada@example.com" }),
        })
        .await?;

    assert_eq!(submission.form_id, form.id);
    assert_eq!(
        submission.data,
        json!({ "Name": "Ada", "Email": "ada@example.com" })
    );

    Ok(())
}
