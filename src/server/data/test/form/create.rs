use super::*;

/// Tests creating a form for an existing author.
///
/// Expected: Ok with title, author and fields stored as given
#[tokio::test]
async fn creates_form() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FormRepository::new(db);
    let form = repo
        .create(CreateFormParam {
            title: "Event RSVP".to_string(),
            author_id: user.id,
            fields: json!([{ "label": "Attending", "type": "checkbox" }]),
        })
        .await?;

    assert_eq!(form.title, "Event RSVP");
    assert_eq!(form.author_id, user.id);
    assert_eq!(form.fields, json!([{ "label": "Attending", "type": "checkbox" }]));

    let count = entity::prelude::Form::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
