use tracing::debug;

use shared_models::{ServiceError, ServiceResult};
use shared_store::{IdentifierGenerator, QueryPolicy, RecordStore, StoreContext, StoreError};
use shared_utils::{query, validate};

use crate::models::{Consultation, CreateConsultationRequest};

const CONSULTATIONS_TREE: &str = "consultations";

/// Consultations are append-only: no update or delete operations exist.
pub struct ConsultationService {
    store: RecordStore<Consultation>,
    ids: IdentifierGenerator,
    policy: QueryPolicy,
}

impl ConsultationService {
    pub fn new(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            store: ctx.open_store(CONSULTATIONS_TREE)?,
            ids: ctx.ids(),
            policy: ctx.policy(),
        })
    }

    pub fn create_consultation(
        &self,
        request: CreateConsultationRequest,
    ) -> ServiceResult<Consultation> {
        debug!("Creating consultation for patient: {}", request.patient_id);
        validate::require("patient_id", &request.patient_id)?;
        validate::require("problem", &request.problem)?;
        validate::require("department_id", &request.department_id)?;

        let consultation = Consultation {
            id: self.ids.generate(),
            patient_id: request.patient_id,
            problem: request.problem,
            department_id: request.department_id,
        };
        self.store.insert(&consultation.id, &consultation)?;

        Ok(consultation)
    }

    pub fn get_consultation(&self, consultation_id: &str) -> ServiceResult<Consultation> {
        self.store.get(consultation_id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("consultation {} not found", consultation_id))
        })
    }

    pub fn get_all_consultations(&self) -> ServiceResult<Vec<Consultation>> {
        let consultations = self.store.values()?;
        if consultations.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound(
                "no consultations recorded".to_string(),
            ));
        }
        Ok(consultations)
    }

    pub fn get_consultation_history_by_patient(
        &self,
        patient_id: &str,
    ) -> ServiceResult<Vec<Consultation>> {
        debug!("Fetching consultation history for patient: {}", patient_id);
        let history = query::filter_by(self.store.values()?, |c| c.patient_id == patient_id);
        if history.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound(format!(
                "no consultations for patient {}",
                patient_id
            )));
        }
        Ok(history)
    }
}
