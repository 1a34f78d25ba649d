use serde::{Deserialize, Serialize};

use super::clamp_score;

/// A patient ficha: demographics plus the baseline constitution recorded
/// once per patient (Prakruti doshas and mental-state Gunas).
///
/// Field names match the column names of the `patients` table, which in
/// turn follow the practice's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// `None` until the record is first saved; assigned by the store.
    pub id: Option<i64>,
    /// Required, non-empty. The form enforces this before saving.
    pub nombre: String,
    pub domicilio: String,
    pub telefono: String,
    /// `YYYY-MM-DD` or empty. Parsing and age display happen in the UI.
    pub fecha_nacimiento: String,
    pub nota: String,
    pub prakruti_vata: i32,
    pub prakruti_pitta: i32,
    pub prakruti_kapha: i32,
    pub prakruti_sattva: i32,
    pub prakruti_rajas: i32,
    pub prakruti_tamas: i32,
}

impl Default for Patient {
    /// Blank ficha with every constitution slider at its neutral midpoint.
    fn default() -> Self {
        Patient {
            id: None,
            nombre: String::new(),
            domicilio: String::new(),
            telefono: String::new(),
            fecha_nacimiento: String::new(),
            nota: String::new(),
            prakruti_vata: 5,
            prakruti_pitta: 5,
            prakruti_kapha: 5,
            prakruti_sattva: 5,
            prakruti_rajas: 5,
            prakruti_tamas: 5,
        }
    }
}

impl Patient {
    /// Copy of this record with every score clamped to the 0–10 domain.
    /// Applied by the repository on save.
    pub fn clamped(&self) -> Self {
        Patient {
            prakruti_vata: clamp_score(self.prakruti_vata),
            prakruti_pitta: clamp_score(self.prakruti_pitta),
            prakruti_kapha: clamp_score(self.prakruti_kapha),
            prakruti_sattva: clamp_score(self.prakruti_sattva),
            prakruti_rajas: clamp_score(self.prakruti_rajas),
            prakruti_tamas: clamp_score(self.prakruti_tamas),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patient_scores_are_neutral() {
        let p = Patient::default();
        assert_eq!(p.id, None);
        assert!(p.nombre.is_empty());
        for score in [
            p.prakruti_vata,
            p.prakruti_pitta,
            p.prakruti_kapha,
            p.prakruti_sattva,
            p.prakruti_rajas,
            p.prakruti_tamas,
        ] {
            assert_eq!(score, 5);
        }
    }

    #[test]
    fn clamped_pulls_scores_into_domain() {
        let p = Patient {
            prakruti_vata: -2,
            prakruti_pitta: 14,
            prakruti_kapha: 10,
            ..Default::default()
        };
        let c = p.clamped();
        assert_eq!(c.prakruti_vata, 0);
        assert_eq!(c.prakruti_pitta, 10);
        assert_eq!(c.prakruti_kapha, 10);
        assert_eq!(c.prakruti_sattva, 5);
    }

    #[test]
    fn clamped_leaves_text_fields_alone() {
        let p = Patient {
            nombre: "Ana García".into(),
            fecha_nacimiento: "1990-12-31".into(),
            prakruti_rajas: 99,
            ..Default::default()
        };
        let c = p.clamped();
        assert_eq!(c.nombre, "Ana García");
        assert_eq!(c.fecha_nacimiento, "1990-12-31");
        assert_eq!(c.prakruti_rajas, 10);
    }
}
