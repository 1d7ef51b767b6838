use super::*;

/// Tests listing the forms of one author.
///
/// Verifies only that author's forms are returned, newest first.
///
/// Expected: Ok with two forms in reverse creation order
#[tokio::test]
async fn returns_only_authors_forms_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_form(db, author.id).await?;
    let second = factory::create_form(db, author.id).await?;
    factory::create_form(db, other.id).await?;

    let repo = FormRepository::new(db);
    let forms = repo.find_by_author(author.id).await?;

    let ids: Vec<i32> = forms.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests listing forms of a user who has none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_author_without_forms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = FormRepository::new(db);

    assert!(repo.find_by_author(author.id).await?.is_empty());

    Ok(())
}
