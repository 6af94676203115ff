use punchclock::core::Session;
use punchclock::core::permissions::*;
use punchclock::errors::AppError;
use punchclock::models::{Employee, EmployeeId, ManagerPin, Role, RoleChange};

mod common;
use common::*;

fn by_id(n: u32) -> Employee {
    staff().into_iter().find(|e| e.id == id(n)).unwrap()
}

fn denied<T: std::fmt::Debug>(r: Result<T, AppError>) -> bool {
    matches!(r, Err(AppError::PermissionDenied(_)))
}

#[test]
fn test_view_id_masks_other_managers_for_non_master() {
    let manager = by_id(MANAGER);
    assert!(can_view_id(&manager, &by_id(ASSOCIATE)));
    assert!(can_view_id(&manager, &manager));
    assert!(!can_view_id(&manager, &by_id(MANAGER_2)));
    assert!(!can_view_id(&manager, &by_id(MASTER)));

    let master = by_id(MASTER);
    for e in staff() {
        assert!(can_view_id(&master, &e));
    }
}

#[test]
fn test_nobody_changes_own_pay_or_role() {
    let ops = [
        RoleChange::PromoteToManager,
        RoleChange::DemoteToAssociate,
        RoleChange::GrantMaster,
        RoleChange::RevokeMaster,
    ];
    for e in staff() {
        assert!(denied(can_change_pay(&e, &e)), "{} pay", e.name);
        for op in ops {
            assert!(denied(can_change_role(&e, &e, op)), "{} {:?}", e.name, op);
        }
        assert!(denied(can_remove(&e, &e)));
    }
}

#[test]
fn test_non_master_cannot_touch_master() {
    let manager = by_id(MANAGER);
    let master = by_id(MASTER);

    assert!(denied(can_change_pay(&manager, &master)));
    assert!(denied(can_change_status(&manager, &master)));
    assert!(denied(can_change_role(
        &manager,
        &master,
        RoleChange::PromoteToManager
    )));
    assert!(denied(can_remove(&manager, &master)));

    assert!(can_change_pay(&by_id(MASTER_2), &master).is_ok());
}

#[test]
fn test_plain_manager_role_changes() {
    let manager = by_id(MANAGER);
    let associate = by_id(ASSOCIATE);

    assert!(can_change_role(&manager, &associate, RoleChange::PromoteToManager).is_ok());
    assert!(denied(can_change_role(
        &manager,
        &by_id(MANAGER_2),
        RoleChange::DemoteToAssociate
    )));
    assert!(denied(can_change_role(
        &manager,
        &associate,
        RoleChange::GrantMaster
    )));
    assert!(denied(can_change_role(
        &manager,
        &by_id(MANAGER_2),
        RoleChange::RevokeMaster
    )));
}

#[test]
fn test_remove_rules() {
    let manager = by_id(MANAGER);
    assert!(can_remove(&manager, &by_id(ASSOCIATE)).is_ok());
    assert!(denied(can_remove(&manager, &by_id(MANAGER_2))));
    assert!(can_remove(&by_id(MASTER), &by_id(MANAGER_2)).is_ok());
    assert!(denied(can_remove(&by_id(ASSOCIATE), &by_id(ASSOCIATE_2))));
}

#[test]
fn test_associates_have_no_manager_views() {
    let associate = by_id(ASSOCIATE);
    assert!(denied(can_add(&associate)));
    assert!(denied(can_view_clocked_in(&associate)));
    assert!(denied(can_edit_info(&associate, pin(1111))));
    assert!(can_view_clocked_in(&by_id(MANAGER)).is_ok());
}

#[test]
fn test_pin_gate() {
    let manager = by_id(MANAGER);
    assert!(can_edit_info(&manager, pin(2222)).is_ok());

    let err = can_edit_info(&manager, pin(2223)).unwrap_err();
    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    assert!(err.ends_session());
    assert!(err.is_business_rule());

    // manager whose pin was never created
    let no_pin = employee(3000009, "Nat Nopin", 18.0, Role::Manager, 0);
    assert!(matches!(
        verify_pin(&no_pin, pin(1000)),
        Err(AppError::AuthenticationFailed(_))
    ));
}

#[test]
fn test_unlock_admin_through_session() {
    let dir = setup_data_dir("unlock_admin");
    let tc = clock_with(&dir, &staff());

    let session = Session::login(tc.store(), id(MANAGER)).unwrap();
    assert!(session.unlock_admin(tc.store(), pin(2222)).is_ok());
    assert!(session.unlock_admin(tc.store(), pin(9999)).unwrap_err().ends_session());

    let unknown = Session::login(tc.store(), id(9999999)).unwrap_err();
    assert!(matches!(unknown, AppError::NotFound(_)));
}

#[test]
fn test_typed_ids_and_pins_are_digits_only() {
    assert_eq!(EmployeeId::parse(" 1111111 ").unwrap(), id(MASTER));
    assert!(matches!(
        EmployeeId::parse("+1111111"),
        Err(AppError::InvalidInput(_))
    ));
    assert!(EmployeeId::parse("111 1111").is_err());

    assert_eq!(ManagerPin::parse("2222").unwrap(), pin(2222));
    assert!(ManagerPin::parse("+222").is_err());
    assert!(ManagerPin::parse("-2222").is_err());
}
