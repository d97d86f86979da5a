use super::*;
use crate::ledger::id::SequentialIdGenerator;
use shared::ledger::{CommandErrorCode, LedgerCommandPayload, LedgerEventType};
use shared::models::{CitaCreate, FeriaCreate, FeriaUpdate, VoluntarioCreate};

fn create_test_manager() -> LedgerManager {
    LedgerManager::open_in_memory(Arc::new(SequentialIdGenerator::starting_at(1))).unwrap()
}

fn feria_input(cupos: i32) -> FeriaCreate {
    FeriaCreate {
        titulo: "Castración El Guarco".to_string(),
        fecha: "2026-12-19".to_string(),
        hora: "07:30".to_string(),
        ubicacion: "Salón Comunal de Tejar".to_string(),
        mapa_url: None,
        tipo: "Castración".to_string(),
        imagen: None,
        descripcion: Some("Jornada de castración".to_string()),
        requisitos: vec!["Ayuno de 8 horas".to_string()],
        cupos_totales: cupos,
    }
}

fn booking(feria_id: i64, mascota: &str) -> CitaCreate {
    CitaCreate {
        id_feria: feria_id,
        nombre_dueno: "Gabriela Solís".to_string(),
        telefono: "8800-1122".to_string(),
        nombre_mascota: mascota.to_string(),
        especie: "Perro".to_string(),
        peso: "10 kg".to_string(),
        edad: "3 años".to_string(),
    }
}

fn voluntario_input() -> VoluntarioCreate {
    VoluntarioCreate {
        nombre: "Marco Castro".to_string(),
        email: "marco@example.com".to_string(),
        telefono: "7000-0000".to_string(),
        area_interes: "Transporte".to_string(),
        disponibilidad: "Sábados".to_string(),
        experiencia_previa: String::new(),
    }
}

fn run(manager: &LedgerManager, payload: LedgerCommandPayload) -> CommandResponse {
    manager.execute_command(LedgerCommand::at(1_767_225_600_000, payload))
}

// ========================================================================
// Helper: create a fair and return its id
// ========================================================================

fn create_feria(manager: &LedgerManager, cupos: i32) -> i64 {
    let resp = run(
        manager,
        LedgerCommandPayload::CreateFeria {
            feria: feria_input(cupos),
        },
    );
    assert!(resp.success, "Failed to create feria: {:?}", resp.error);
    resp.entity_id.unwrap()
}

fn add_cita(manager: &LedgerManager, feria_id: i64) -> i64 {
    let resp = run(
        manager,
        LedgerCommandPayload::AddCita {
            cita: booking(feria_id, "Firulais"),
        },
    );
    assert!(resp.success, "Failed to add cita: {:?}", resp.error);
    resp.entity_id.unwrap()
}

fn remove_cita(manager: &LedgerManager, cita_id: i64) -> CommandResponse {
    run(manager, LedgerCommandPayload::RemoveCita { cita_id })
}

fn set_total(manager: &LedgerManager, feria_id: i64, total: i32) -> CommandResponse {
    run(
        manager,
        LedgerCommandPayload::UpdateFeria {
            feria_id,
            changes: FeriaUpdate {
                cupos_totales: Some(total),
                ..Default::default()
            },
        },
    )
}

fn disponibles(manager: &LedgerManager, feria_id: i64) -> i32 {
    manager.get_feria(feria_id).unwrap().cupos_disponibles
}

mod test_boundary;
