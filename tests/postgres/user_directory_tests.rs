//! User directory persistence and email uniqueness in `PostgreSQL`.

use crate::postgres::helpers::{PostgresCluster, postgres_agency, postgres_cluster, seeded_user};
use eyre::ensure;
use rstest::rstest;
use scrivener::identity::{
    domain::{EmailAddress, Role, User, UserId},
    ports::{UserDirectory, UserDirectoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_are_found_by_id_and_email_and_listed_by_registration(
    postgres_cluster: Option<PostgresCluster>,
) -> eyre::Result<()> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let agency = postgres_agency(cluster)?;
    let wren = seeded_user("wren", Role::Writer, 2)?;
    let root = seeded_user("root", Role::Admin, 1)?;
    agency.directory.store(&wren).await?;
    agency.directory.store(&root).await?;

    let by_id = agency.directory.find_by_id(wren.id()).await?;
    ensure!(by_id.as_ref() == Some(&wren), "lookup by id mismatch: {by_id:?}");

    let by_email = agency
        .directory
        .find_by_email(&EmailAddress::new("WREN@Example.com")?)
        .await?;
    ensure!(by_email.as_ref() == Some(&wren), "lookup by email mismatch: {by_email:?}");

    let listed: Vec<UserId> = agency
        .directory
        .list_users()
        .await?
        .iter()
        .map(User::id)
        .collect();
    ensure!(listed == vec![root.id(), wren.id()], "users should list by registration time");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_users_map_to_typed_errors(
    postgres_cluster: Option<PostgresCluster>,
) -> eyre::Result<()> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let agency = postgres_agency(cluster)?;
    let meera = seeded_user("meera", Role::Marketing, 0)?;
    agency.directory.store(&meera).await?;

    let email_clash = agency
        .directory
        .store(&seeded_user("meera", Role::Writer, 1)?)
        .await;
    ensure!(
        matches!(
            email_clash,
            Err(UserDirectoryError::DuplicateEmail(ref email)) if email == meera.email()
        ),
        "expected duplicate email, got {email_clash:?}"
    );

    let mut renamed = meera.clone();
    renamed.change_email(EmailAddress::new("meera.k@example.com")?, &mockable::DefaultClock);
    let id_clash = agency.directory.store(&renamed).await;
    ensure!(
        matches!(id_clash, Err(UserDirectoryError::DuplicateUser(id)) if id == meera.id()),
        "expected duplicate user, got {id_clash:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_taken_email_and_missing_user(
    postgres_cluster: Option<PostgresCluster>,
) -> eyre::Result<()> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let agency = postgres_agency(cluster)?;
    let meera = seeded_user("meera", Role::Marketing, 0)?;
    let karan = seeded_user("karan", Role::Marketing, 1)?;
    agency.directory.store(&meera).await?;
    agency.directory.store(&karan).await?;

    let mut impostor = karan.clone();
    impostor.change_email(meera.email().clone(), &mockable::DefaultClock);
    let taken = agency.directory.update(&impostor).await;
    ensure!(
        matches!(taken, Err(UserDirectoryError::DuplicateEmail(_))),
        "expected duplicate email on update, got {taken:?}"
    );

    let stranger = seeded_user("stranger", Role::Writer, 2)?;
    let missing = agency.directory.update(&stranger).await;
    ensure!(
        matches!(missing, Err(UserDirectoryError::NotFound(id)) if id == stranger.id()),
        "expected NotFound for an unknown user, got {missing:?}"
    );
    Ok(())
}
