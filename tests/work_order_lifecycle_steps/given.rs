//! Given steps for work order lifecycle BDD scenarios.

use super::world::{WorkOrderWorld, run_async};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use scrivener::{
    identity::{
        domain::{EmailAddress, Role, User, UserName},
        ports::UserDirectory,
    },
    work_order::{domain::CategoryType, services::CreateWorkOrderRequest},
};

fn register(world: &mut WorkOrderWorld, name: String, role: Role) -> Result<(), eyre::Report> {
    let user = User::new(
        UserName::new(name.as_str())?,
        EmailAddress::new(format!("{}@example.com", name.to_lowercase()))?,
        role,
        &DefaultClock,
    );
    run_async(world.directory.store(&user)).wrap_err("store scenario user")?;
    world.users.insert(name, user);
    Ok(())
}

#[given(r#"a marketing user "{name}""#)]
fn marketing_user(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    register(world, name, Role::Marketing)
}

#[given(r#"a writer "{name}""#)]
fn writer(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    register(world, name, Role::Writer)
}

#[given(r#""{name}" has created a work order"#)]
fn created_work_order(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?;
    let request = CreateWorkOrderRequest::new(
        1_500,
        300_000,
        CategoryType::Student,
        "Asha",
        "+91 98765 43210",
        Utc::now() + Duration::days(7),
    );
    let created = run_async(world.service.create(&owner, request))
        .wrap_err("create work order for scenario")?;
    world.order = Some(created);
    Ok(())
}
