use serde::{Deserialize, Serialize};

use super::clamp_score;

/// One visit in a patient's history: reason, symptoms, treatment, the
/// current-state imbalance (Vikruti doshas) and mental state (Gunas).
///
/// Consultations are append-only: once saved they are never updated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// `None` until saved; assigned by the store.
    pub id: Option<i64>,
    pub paciente_id: i64,
    /// Date string as entered in the form. Not validated here.
    pub fecha: String,
    /// Required, non-empty. The form enforces this before saving.
    pub motivo: String,
    pub sintomas: String,
    pub vikruti_vata: i32,
    pub vikruti_pitta: i32,
    pub vikruti_kapha: i32,
    pub guna_sattva: i32,
    pub guna_rajas: i32,
    pub guna_tamas: i32,
    pub tratamiento: String,
    pub detalle: String,
}

impl Default for Consultation {
    /// Fresh consultation dated today: Vikruti sliders start at zero (no
    /// imbalance recorded yet), Guna sliders at the neutral midpoint.
    fn default() -> Self {
        Consultation {
            id: None,
            paciente_id: 0,
            fecha: chrono::Local::now().format("%Y-%m-%d").to_string(),
            motivo: String::new(),
            sintomas: String::new(),
            vikruti_vata: 0,
            vikruti_pitta: 0,
            vikruti_kapha: 0,
            guna_sattva: 5,
            guna_rajas: 5,
            guna_tamas: 5,
            tratamiento: String::new(),
            detalle: String::new(),
        }
    }
}

impl Consultation {
    /// Copy of this record with every score clamped to the 0–10 domain.
    /// Applied by the repository on save.
    pub fn clamped(&self) -> Self {
        Consultation {
            vikruti_vata: clamp_score(self.vikruti_vata),
            vikruti_pitta: clamp_score(self.vikruti_pitta),
            vikruti_kapha: clamp_score(self.vikruti_kapha),
            guna_sattva: clamp_score(self.guna_sattva),
            guna_rajas: clamp_score(self.guna_rajas),
            guna_tamas: clamp_score(self.guna_tamas),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_consultation_scores() {
        let c = Consultation::default();
        assert_eq!(c.id, None);
        assert_eq!(c.vikruti_vata, 0);
        assert_eq!(c.vikruti_pitta, 0);
        assert_eq!(c.vikruti_kapha, 0);
        assert_eq!(c.guna_sattva, 5);
        assert_eq!(c.guna_rajas, 5);
        assert_eq!(c.guna_tamas, 5);
    }

    #[test]
    fn default_fecha_is_iso_date() {
        let c = Consultation::default();
        assert_eq!(c.fecha.len(), 10);
        assert_eq!(c.fecha.as_bytes()[4], b'-');
        assert_eq!(c.fecha.as_bytes()[7], b'-');
    }

    #[test]
    fn clamped_covers_both_score_groups() {
        let c = Consultation {
            vikruti_vata: 12,
            guna_tamas: -1,
            ..Default::default()
        };
        let out = c.clamped();
        assert_eq!(out.vikruti_vata, 10);
        assert_eq!(out.guna_tamas, 0);
        assert_eq!(out.guna_sattva, 5);
    }
}
