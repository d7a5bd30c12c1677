use tracing::debug;

use shared_models::{CallerIdentity, ServiceError, ServiceResult};
use shared_store::{IdentifierGenerator, QueryPolicy, RecordStore, StoreContext, StoreError};
use shared_utils::{query, validate};

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};

const PATIENTS_TREE: &str = "patients";

pub struct PatientService {
    store: RecordStore<Patient>,
    ids: IdentifierGenerator,
    policy: QueryPolicy,
}

impl PatientService {
    pub fn new(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            store: ctx.open_store(PATIENTS_TREE)?,
            ids: ctx.ids(),
            policy: ctx.policy(),
        })
    }

    /// Create a new patient profile owned by the calling identity. `age` is
    /// unsigned, so the non-negative invariant holds by construction.
    pub fn create_patient(
        &self,
        request: CreatePatientRequest,
        caller: &CallerIdentity,
    ) -> ServiceResult<Patient> {
        debug!("Creating patient profile for: {}", request.name);
        validate::require("name", &request.name)?;

        let patient = Patient {
            id: self.ids.generate(),
            owner: caller.clone(),
            name: request.name,
            age: request.age,
        };
        self.store.insert(&patient.id, &patient)?;
        debug!("Patient profile created with ID: {}", patient.id);

        Ok(patient)
    }

    pub fn get_patient(&self, patient_id: &str) -> ServiceResult<Patient> {
        self.store
            .get(patient_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("patient {} not found", patient_id)))
    }

    /// First patient profile owned by the calling identity, if any.
    pub fn get_patient_by_owner(&self, caller: &CallerIdentity) -> ServiceResult<Patient> {
        query::find_by_owner(self.store.values()?, caller, |p| &p.owner).ok_or_else(|| {
            ServiceError::NotFound(format!("no patient profile owned by {}", caller))
        })
    }

    pub fn get_all_patients(&self) -> ServiceResult<Vec<Patient>> {
        let patients = self.store.values()?;
        if patients.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound("no patients registered".to_string()));
        }
        Ok(patients)
    }

    /// Shallow merge of the provided fields over the stored profile.
    pub fn update_patient(
        &self,
        patient_id: &str,
        request: UpdatePatientRequest,
    ) -> ServiceResult<Patient> {
        debug!("Updating patient profile: {}", patient_id);
        let mut patient = self
            .store
            .get(patient_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("patient {} not found", patient_id)))?;

        if let Some(name) = request.name {
            patient.name = name;
        }
        if let Some(age) = request.age {
            patient.age = age;
        }

        self.store.insert(patient_id, &patient)?;
        Ok(patient)
    }

    pub fn delete_patient(&self, patient_id: &str) -> ServiceResult<String> {
        debug!("Deleting patient profile: {}", patient_id);
        if self.store.get(patient_id)?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "patient {} not found",
                patient_id
            )));
        }
        self.store.remove(patient_id)?;

        Ok(format!("Patient {} deleted successfully", patient_id))
    }
}
