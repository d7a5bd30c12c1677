use tracing::debug;

use shared_models::{CallerIdentity, ServiceError, ServiceResult};
use shared_store::{IdentifierGenerator, QueryPolicy, RecordStore, StoreContext, StoreError};
use shared_utils::{query, validate};

use crate::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};

const DOCTORS_TREE: &str = "doctors";

pub struct DoctorService {
    store: RecordStore<Doctor>,
    ids: IdentifierGenerator,
    policy: QueryPolicy,
}

impl DoctorService {
    pub fn new(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            store: ctx.open_store(DOCTORS_TREE)?,
            ids: ctx.ids(),
            policy: ctx.policy(),
        })
    }

    /// Create a new doctor profile owned by the calling identity.
    ///
    /// No two doctors may share the same (name, department) pair. The check
    /// runs at creation only and scans the full store.
    pub fn create_doctor(
        &self,
        request: CreateDoctorRequest,
        caller: &CallerIdentity,
    ) -> ServiceResult<Doctor> {
        debug!("Creating doctor profile for: {}", request.name);
        validate::require("name", &request.name)?;
        validate::require("department_id", &request.department_id)?;
        validate::require("image", &request.image)?;

        let existing = self.store.values()?;
        if existing
            .iter()
            .any(|d| d.name == request.name && d.department_id == request.department_id)
        {
            return Err(ServiceError::InvalidPayload(format!(
                "doctor {} already exists in department {}",
                request.name, request.department_id
            )));
        }

        let doctor = Doctor {
            id: self.ids.generate(),
            owner: caller.clone(),
            name: request.name,
            department_id: request.department_id,
            image: request.image,
            available: None,
        };
        self.store.insert(&doctor.id, &doctor)?;
        debug!("Doctor profile created with ID: {}", doctor.id);

        Ok(doctor)
    }

    pub fn get_doctor(&self, doctor_id: &str) -> ServiceResult<Doctor> {
        self.store
            .get(doctor_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("doctor {} not found", doctor_id)))
    }

    /// First doctor profile owned by the calling identity, if any.
    pub fn get_doctor_by_owner(&self, caller: &CallerIdentity) -> ServiceResult<Doctor> {
        query::find_by_owner(self.store.values()?, caller, |d| &d.owner).ok_or_else(|| {
            ServiceError::NotFound(format!("no doctor profile owned by {}", caller))
        })
    }

    pub fn get_all_doctors(&self) -> ServiceResult<Vec<Doctor>> {
        let doctors = self.store.values()?;
        if doctors.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound("no doctors registered".to_string()));
        }
        Ok(doctors)
    }

    pub fn search_doctors_by_name(&self, name: &str) -> ServiceResult<Vec<Doctor>> {
        debug!("Searching doctors by name: {}", name);
        let matches = query::search_by_name(self.store.values()?, name, |d| &d.name);
        if matches.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound(format!("no doctor matching {}", name)));
        }
        Ok(matches)
    }

    /// Shallow merge of the provided fields over the stored profile. The
    /// (name, department) uniqueness rule is not re-checked here.
    pub fn update_doctor(
        &self,
        doctor_id: &str,
        request: UpdateDoctorRequest,
    ) -> ServiceResult<Doctor> {
        debug!("Updating doctor profile: {}", doctor_id);
        let mut doctor = self
            .store
            .get(doctor_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("doctor {} not found", doctor_id)))?;

        if let Some(name) = request.name {
            doctor.name = name;
        }
        if let Some(department_id) = request.department_id {
            doctor.department_id = department_id;
        }
        if let Some(image) = request.image {
            doctor.image = image;
        }
        if let Some(available) = request.available {
            doctor.available = Some(available);
        }

        self.store.insert(doctor_id, &doctor)?;
        Ok(doctor)
    }

    pub fn update_doctor_availability(
        &self,
        doctor_id: &str,
        available: bool,
    ) -> ServiceResult<Doctor> {
        debug!("Setting doctor availability: {} -> {}", doctor_id, available);
        let mut doctor = self
            .store
            .get(doctor_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("doctor {} not found", doctor_id)))?;

        doctor.available = Some(available);
        self.store.insert(doctor_id, &doctor)?;
        Ok(doctor)
    }

    /// Removes the profile. Records in other stores that reference this
    /// doctor keep their soft references.
    pub fn delete_doctor(&self, doctor_id: &str) -> ServiceResult<String> {
        debug!("Deleting doctor profile: {}", doctor_id);
        if self.store.get(doctor_id)?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "doctor {} not found",
                doctor_id
            )));
        }
        self.store.remove(doctor_id)?;

        Ok(format!("Doctor {} deleted successfully", doctor_id))
    }
}
