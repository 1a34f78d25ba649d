use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::Consultation;

/// Record a new consultation. Always an insert — consultations have no
/// update path. Returns the store-assigned id.
///
/// The paciente_id is taken as given: there is no FK check, patients are
/// never deleted, and the caller may use `patient_exists` beforehand.
pub fn insert_consultation(
    conn: &Connection,
    consultation: &Consultation,
) -> Result<i64, DatabaseError> {
    let c = consultation.clamped();
    conn.execute(
        "INSERT INTO consultations (paciente_id, fecha, motivo, sintomas,
         vikruti_vata, vikruti_pitta, vikruti_kapha,
         guna_sattva, guna_rajas, guna_tamas, tratamiento, detalle)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            c.paciente_id,
            c.fecha,
            c.motivo,
            c.sintomas,
            c.vikruti_vata,
            c.vikruti_pitta,
            c.vikruti_kapha,
            c.guna_sattva,
            c.guna_rajas,
            c.guna_tamas,
            c.tratamiento,
            c.detalle,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Consultation history for one patient, most recent first. Equal dates
/// fall back to id descending, so same-day entries keep insertion order
/// reversed. Empty vec for a patient with no history.
pub fn list_by_patient(
    conn: &Connection,
    paciente_id: i64,
) -> Result<Vec<Consultation>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, paciente_id, fecha, motivo, sintomas,
         vikruti_vata, vikruti_pitta, vikruti_kapha,
         guna_sattva, guna_rajas, guna_tamas, tratamiento, detalle
         FROM consultations WHERE paciente_id = ?1
         ORDER BY fecha DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![paciente_id], consultation_from_row)?;

    let mut consultations = Vec::new();
    for row in rows {
        consultations.push(row?);
    }
    Ok(consultations)
}

/// Number of recorded consultations for one patient.
pub fn count_by_patient(conn: &Connection, paciente_id: i64) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM consultations WHERE paciente_id = ?1",
        params![paciente_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn consultation_from_row(row: &Row<'_>) -> Result<Consultation, rusqlite::Error> {
    Ok(Consultation {
        id: Some(row.get(0)?),
        paciente_id: row.get(1)?,
        fecha: row.get(2)?,
        motivo: row.get(3)?,
        sintomas: row.get(4)?,
        vikruti_vata: row.get(5)?,
        vikruti_pitta: row.get(6)?,
        vikruti_kapha: row.get(7)?,
        guna_sattva: row.get(8)?,
        guna_rajas: row.get(9)?,
        guna_tamas: row.get(10)?,
        tratamiento: row.get(11)?,
        detalle: row.get(12)?,
    })
}
