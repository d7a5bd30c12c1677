use tracing::debug;

use shared_models::{ServiceError, ServiceResult};
use shared_store::{IdentifierGenerator, QueryPolicy, RecordStore, StoreContext, StoreError};
use shared_utils::{query, validate};

use crate::models::{CreateDepartmentRequest, Department};

const DEPARTMENTS_TREE: &str = "departments";

pub struct DepartmentService {
    store: RecordStore<Department>,
    ids: IdentifierGenerator,
    policy: QueryPolicy,
}

impl DepartmentService {
    pub fn new(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            store: ctx.open_store(DEPARTMENTS_TREE)?,
            ids: ctx.ids(),
            policy: ctx.policy(),
        })
    }

    pub fn create_department(
        &self,
        request: CreateDepartmentRequest,
    ) -> ServiceResult<Department> {
        debug!("Creating department: {}", request.name);
        validate::require("name", &request.name)?;

        let department = Department {
            id: self.ids.generate(),
            name: request.name,
        };
        self.store.insert(&department.id, &department)?;

        Ok(department)
    }

    pub fn get_department(&self, department_id: &str) -> ServiceResult<Department> {
        self.store.get(department_id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("department {} not found", department_id))
        })
    }

    pub fn get_all_departments(&self) -> ServiceResult<Vec<Department>> {
        let departments = self.store.values()?;
        if departments.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound("no departments registered".to_string()));
        }
        Ok(departments)
    }

    pub fn search_departments_by_name(&self, name: &str) -> ServiceResult<Vec<Department>> {
        debug!("Searching departments by name: {}", name);
        let matches = query::search_by_name(self.store.values()?, name, |d| &d.name);
        if matches.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound(format!(
                "no department matching {}",
                name
            )));
        }
        Ok(matches)
    }

    pub fn delete_department(&self, department_id: &str) -> ServiceResult<String> {
        debug!("Deleting department: {}", department_id);
        if self.store.get(department_id)?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "department {} not found",
                department_id
            )));
        }
        self.store.remove(department_id)?;

        Ok(format!("Department {} deleted successfully", department_id))
    }
}
