use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::Patient;

/// Save a ficha. A record without an id is inserted and gets a fresh
/// store-assigned id; a record with an id has all its mutable fields
/// updated in place. Returns the record's id either way.
///
/// Scores are clamped to the 0–10 domain on the way in. Text fields are
/// stored as given; the form is responsible for the non-empty-name rule.
pub fn save_patient(conn: &Connection, patient: &Patient) -> Result<i64, DatabaseError> {
    let p = patient.clamped();
    match p.id {
        Some(id) => {
            conn.execute(
                "UPDATE patients SET nombre = ?1, domicilio = ?2, telefono = ?3,
                 fecha_nacimiento = ?4, nota = ?5,
                 prakruti_vata = ?6, prakruti_pitta = ?7, prakruti_kapha = ?8,
                 prakruti_sattva = ?9, prakruti_rajas = ?10, prakruti_tamas = ?11
                 WHERE id = ?12",
                params![
                    p.nombre,
                    p.domicilio,
                    p.telefono,
                    p.fecha_nacimiento,
                    p.nota,
                    p.prakruti_vata,
                    p.prakruti_pitta,
                    p.prakruti_kapha,
                    p.prakruti_sattva,
                    p.prakruti_rajas,
                    p.prakruti_tamas,
                    id,
                ],
            )?;
            Ok(id)
        }
        None => {
            conn.execute(
                "INSERT INTO patients (nombre, domicilio, telefono, fecha_nacimiento, nota,
                 prakruti_vata, prakruti_pitta, prakruti_kapha,
                 prakruti_sattva, prakruti_rajas, prakruti_tamas)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    p.nombre,
                    p.domicilio,
                    p.telefono,
                    p.fecha_nacimiento,
                    p.nota,
                    p.prakruti_vata,
                    p.prakruti_pitta,
                    p.prakruti_kapha,
                    p.prakruti_sattva,
                    p.prakruti_rajas,
                    p.prakruti_tamas,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        }
    }
}

/// Get a single ficha by id. Returns None if no such patient exists.
pub fn get_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, nombre, domicilio, telefono, fecha_nacimiento, nota,
         prakruti_vata, prakruti_pitta, prakruti_kapha,
         prakruti_sattva, prakruti_rajas, prakruti_tamas
         FROM patients WHERE id = ?1",
    )?;

    match stmt.query_row(params![id], patient_from_row) {
        Ok(p) => Ok(Some(p)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// All fichas ordered by name ascending. Empty vec when none exist.
pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, nombre, domicilio, telefono, fecha_nacimiento, nota,
         prakruti_vata, prakruti_pitta, prakruti_kapha,
         prakruti_sattva, prakruti_rajas, prakruti_tamas
         FROM patients ORDER BY nombre",
    )?;

    let rows = stmt.query_map([], patient_from_row)?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(row?);
    }
    Ok(patients)
}

/// Total number of fichas.
pub fn count_patients(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
    Ok(count)
}

/// Whether a patient with the given id exists. Consultations are not
/// FK-checked against patients; callers that want the check use this.
pub fn patient_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn patient_from_row(row: &Row<'_>) -> Result<Patient, rusqlite::Error> {
    Ok(Patient {
        id: Some(row.get(0)?),
        nombre: row.get(1)?,
        domicilio: row.get(2)?,
        telefono: row.get(3)?,
        fecha_nacimiento: row.get(4)?,
        nota: row.get(5)?,
        prakruti_vata: row.get(6)?,
        prakruti_pitta: row.get(7)?,
        prakruti_kapha: row.get(8)?,
        prakruti_sattva: row.get(9)?,
        prakruti_rajas: row.get(10)?,
        prakruti_tamas: row.get(11)?,
    })
}
