use super::*;

// ========================================================================
// Bookings past capacity
// ========================================================================

#[test]
fn test_booking_sold_out_feria_stays_at_zero() {
    let manager = create_test_manager();
    let id = create_feria(&manager, 1);
    add_cita(&manager, id);
    assert_eq!(disponibles(&manager, id), 0);

    // The ledger still records the cita; the counter is floored
    let cita_id = add_cita(&manager, id);
    assert_eq!(disponibles(&manager, id), 0);
    assert!(manager.get_cita(cita_id).is_some());
    assert_eq!(manager.citas_for_feria(id).len(), 2);
}

#[test]
fn test_zero_capacity_feria() {
    let manager = create_test_manager();
    let id = create_feria(&manager, 0);
    let feria = manager.get_feria(id).unwrap();
    assert_eq!(feria.cupos_disponibles, 0);
    assert!(!feria.is_bookable());
}

#[test]
fn test_booking_unknown_feria_only_stores_cita() {
    let manager = create_test_manager();
    let before = manager.list_ferias();

    let cita_id = add_cita(&manager, 9_999);

    assert_eq!(manager.get_cita(cita_id).unwrap().id_feria, 9_999);
    assert_eq!(manager.list_ferias(), before);
}

#[test]
fn test_removing_seat_past_total_not_capped() {
    let manager = create_test_manager();
    let id = create_feria(&manager, 1);
    let first = add_cita(&manager, id);
    let second = add_cita(&manager, id);
    assert_eq!(disponibles(&manager, id), 0);

    remove_cita(&manager, first);
    remove_cita(&manager, second);
    assert_eq!(disponibles(&manager, id), 2);
    assert_eq!(manager.verify_capacity().len(), 1);
}

#[test]
fn test_capacity_edit_after_overreturned_seat_does_not_overflow() {
    let manager = create_test_manager();
    let id = create_feria(&manager, 0);
    let cita_id = add_cita(&manager, id);
    assert_eq!(disponibles(&manager, id), 0);
    remove_cita(&manager, cita_id);
    assert_eq!(disponibles(&manager, id), 1);

    // reservados is -1 here
    let resp = set_total(&manager, id, i32::MAX);
    assert!(!resp.success);
    assert_eq!(resp.error.unwrap().code, CommandErrorCode::ValidationFailed);
    assert_eq!(disponibles(&manager, id), 1);

    let resp = set_total(&manager, id, 10);
    assert!(resp.success);
    assert_eq!(disponibles(&manager, id), 11);
}

// ========================================================================
// No-ops
// ========================================================================

#[test]
fn test_remove_missing_cita_is_noop() {
    let manager = create_test_manager();
    let before = manager.snapshot();

    let resp = remove_cita(&manager, 424_242);
    assert!(resp.success);
    assert_eq!(resp.entity_id, None);
    assert_eq!(manager.snapshot(), before);
    assert_eq!(manager.current_sequence().unwrap(), 0);
}

#[test]
fn test_delete_missing_feria_is_noop() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    let resp = run(&manager, LedgerCommandPayload::DeleteFeria { feria_id: 77 });
    assert!(resp.success);
    assert_eq!(manager.list_ferias().len(), 4);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_remove_missing_voluntario_is_noop() {
    let manager = create_test_manager();
    let resp = run(
        &manager,
        LedgerCommandPayload::RemoveVoluntario { voluntario_id: 1 },
    );
    assert!(resp.success);
    assert_eq!(manager.list_voluntarios().len(), 3);
}

// ========================================================================
// Deleting a fair with citas
// ========================================================================

#[test]
fn test_delete_feria_leaves_citas() {
    let manager = create_test_manager();

    // Fixture feria 1 has three citas
    let resp = run(&manager, LedgerCommandPayload::DeleteFeria { feria_id: 1 });
    assert!(resp.success);
    assert_eq!(resp.entity_id, Some(1));
    assert!(manager.get_feria(1).is_none());
    assert_eq!(manager.citas_for_feria(1).len(), 3);

    let events = manager.events_since(0).unwrap();
    match &events[0].payload {
        EventPayload::FeriaDeleted { orphaned_citas, .. } => assert_eq!(*orphaned_citas, 3),
        other => panic!("unexpected payload: {other:?}"),
    }

    // Removing an orphan is accepted and touches no fair
    let orphan = manager.citas_for_feria(1)[0].id;
    assert!(remove_cita(&manager, orphan).success);
    assert_eq!(manager.citas_for_feria(1).len(), 2);
}

// ========================================================================
// Rejected commands
// ========================================================================

#[test]
fn test_negative_capacity_rejected() {
    let manager = create_test_manager();

    let resp = run(
        &manager,
        LedgerCommandPayload::CreateFeria {
            feria: feria_input(-3),
        },
    );
    assert!(!resp.success);
    assert_eq!(resp.error.unwrap().code, CommandErrorCode::NegativeCapacity);
    assert_eq!(manager.list_ferias().len(), 4);

    let resp = set_total(&manager, 3, -1);
    let err = resp.error.unwrap();
    assert_eq!(err.code, CommandErrorCode::NegativeCapacity);
    assert_eq!(err.message, "Los cupos totales no pueden ser negativos.");
    assert_eq!(manager.get_feria(3).unwrap().cupos_totales, 12);
}

#[test]
fn test_update_unknown_feria() {
    let manager = create_test_manager();
    let resp = set_total(&manager, 555, 10);
    assert_eq!(resp.error.unwrap().code, CommandErrorCode::FeriaNotFound);
}

#[test]
fn test_rejected_command_consumes_no_sequence() {
    let manager = create_test_manager();
    set_total(&manager, 1, 1);
    assert_eq!(manager.current_sequence().unwrap(), 0);

    create_feria(&manager, 3);
    assert_eq!(manager.current_sequence().unwrap(), 1);
}

// ========================================================================
// Reset
// ========================================================================

#[test]
fn test_reset_restores_fixtures() {
    let manager = create_test_manager();
    let fixtures = manager.snapshot();

    let id = create_feria(&manager, 5);
    add_cita(&manager, id);
    run(&manager, LedgerCommandPayload::DeleteFeria { feria_id: 2 });

    let resp = run(&manager, LedgerCommandPayload::ResetDemo {});
    assert!(resp.success);
    assert_eq!(resp.entity_id, None);
    assert_eq!(manager.snapshot(), fixtures);

    // Ids keep increasing past everything handed out before the reset
    let next = create_feria(&manager, 1);
    assert!(next > id);
}
