use assert_matches::assert_matches;

use doctor_cell::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};
use doctor_cell::services::DoctorService;
use shared_models::ServiceError;
use shared_utils::test_utils::{caller, TestConfig};

fn create_request(name: &str, department_id: &str) -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: name.to_string(),
        department_id: department_id.to_string(),
        image: "img.png".to_string(),
    }
}

#[test]
fn created_doctor_is_owned_by_the_caller_and_readable_by_id() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();
    let p1 = caller("p1");

    let created = service.create_doctor(create_request("Dr. Lee", "d1"), &p1).unwrap();

    assert_eq!(created.owner, p1);
    assert_eq!(created.available, None);
    assert_eq!(service.get_doctor(&created.id).unwrap(), created);
}

#[test]
fn create_rejects_blank_required_fields() {
    let config = TestConfig::with_policy(false);
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    for request in [
        create_request("", "d1"),
        create_request("Dr. Lee", ""),
        CreateDoctorRequest {
            image: "  ".to_string(),
            ..create_request("Dr. Lee", "d1")
        },
    ] {
        assert_matches!(
            service.create_doctor(request, &caller("p1")),
            Err(ServiceError::InvalidPayload(_))
        );
    }

    assert!(service.get_all_doctors().unwrap().is_empty());
}

#[test]
fn duplicate_name_and_department_is_rejected_regardless_of_caller_or_image() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    service.create_doctor(create_request("Dr. Lee", "d1"), &caller("p1")).unwrap();

    let duplicate = CreateDoctorRequest {
        image: "other.png".to_string(),
        ..create_request("Dr. Lee", "d1")
    };
    assert_matches!(
        service.create_doctor(duplicate, &caller("p2")),
        Err(ServiceError::InvalidPayload(_))
    );

    // Same name in another department is fine.
    service.create_doctor(create_request("Dr. Lee", "d2"), &caller("p2")).unwrap();
}

#[test]
fn uniqueness_is_checked_at_creation_only() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    service.create_doctor(create_request("Dr. Lee", "d1"), &caller("p1")).unwrap();
    let other = service.create_doctor(create_request("Dr. Kim", "d1"), &caller("p2")).unwrap();

    // Update can produce a colliding (name, department) pair.
    let updated = service
        .update_doctor(
            &other.id,
            UpdateDoctorRequest {
                name: Some("Dr. Lee".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Dr. Lee");
    assert_eq!(updated.department_id, "d1");
}

#[test]
fn get_by_owner_returns_a_profile_owned_by_the_caller() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();
    let p1 = caller("p1");

    assert_matches!(service.get_doctor_by_owner(&p1), Err(ServiceError::NotFound(_)));

    service.create_doctor(create_request("Dr. Lee", "d1"), &p1).unwrap();
    service.create_doctor(create_request("Dr. Kim", "d2"), &caller("p2")).unwrap();

    let owned = service.get_doctor_by_owner(&p1).unwrap();
    assert_eq!(owned.owner, p1);
    assert_eq!(owned.name, "Dr. Lee");
}

#[test]
fn update_merges_provided_fields_and_preserves_the_rest() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();
    let p1 = caller("p1");

    let created = service.create_doctor(create_request("Dr. Lee", "d1"), &p1).unwrap();

    let updated = service
        .update_doctor(
            &created.id,
            UpdateDoctorRequest {
                image: Some("new.png".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.owner, p1);
    assert_eq!(updated.name, "Dr. Lee");
    assert_eq!(updated.department_id, "d1");
    assert_eq!(updated.image, "new.png");
    assert_eq!(service.get_doctor(&created.id).unwrap(), updated);
}

#[test]
fn update_of_unknown_id_reports_not_found() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    assert_matches!(
        service.update_doctor("missing", UpdateDoctorRequest::default()),
        Err(ServiceError::NotFound(_))
    );
    assert_matches!(
        service.update_doctor_availability("missing", true),
        Err(ServiceError::NotFound(_))
    );
}

#[test]
fn availability_update_touches_only_the_availability_flag() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    let created = service.create_doctor(create_request("Dr. Lee", "d1"), &caller("p1")).unwrap();

    let updated = service.update_doctor_availability(&created.id, true).unwrap();
    assert_eq!(updated.available, Some(true));
    assert_eq!(
        Doctor { available: None, ..updated.clone() },
        Doctor { available: None, ..created.clone() }
    );

    let toggled = service.update_doctor_availability(&created.id, false).unwrap();
    assert_eq!(toggled.available, Some(false));
}

#[test]
fn search_matches_case_insensitive_substrings() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = DoctorService::new(&ctx).unwrap();

    service.create_doctor(create_request("John Doe", "d1"), &caller("p1")).unwrap();
    service.create_doctor(create_request("Jane Roe", "d1"), &caller("p2")).unwrap();

    let matches = service.search_doctors_by_name("doe").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "John Doe");
}

#[test]
fn end_to_end_department_and_doctor_lifecycle() {
    use department_cell::models::CreateDepartmentRequest;
    use department_cell::services::DepartmentService;

    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let departments = DepartmentService::new(&ctx).unwrap();
    let doctors = DoctorService::new(&ctx).unwrap();
    let p1 = caller("p1");

    let cardiology = departments
        .create_department(CreateDepartmentRequest {
            name: "Cardiology".to_string(),
        })
        .unwrap();

    let doc1 = doctors
        .create_doctor(create_request("Dr. Lee", &cardiology.id), &p1)
        .unwrap();
    assert_eq!(doc1.owner, p1);

    assert_matches!(
        doctors.create_doctor(create_request("Dr. Lee", &cardiology.id), &caller("p2")),
        Err(ServiceError::InvalidPayload(_))
    );

    assert_eq!(doctors.get_doctor_by_owner(&p1).unwrap(), doc1);

    let message = doctors.delete_doctor(&doc1.id).unwrap();
    assert!(message.contains(&doc1.id));
    assert_matches!(doctors.get_doctor(&doc1.id), Err(ServiceError::NotFound(_)));
}

#[test]
fn deleting_a_department_leaves_referencing_doctors_intact() {
    use department_cell::models::CreateDepartmentRequest;
    use department_cell::services::DepartmentService;

    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let departments = DepartmentService::new(&ctx).unwrap();
    let doctors = DoctorService::new(&ctx).unwrap();

    let department = departments
        .create_department(CreateDepartmentRequest {
            name: "Cardiology".to_string(),
        })
        .unwrap();
    let doctor = doctors
        .create_doctor(create_request("Dr. Lee", &department.id), &caller("p1"))
        .unwrap();

    departments.delete_department(&department.id).unwrap();

    // The soft reference dangles; the doctor record is untouched.
    let fetched = doctors.get_doctor(&doctor.id).unwrap();
    assert_eq!(fetched.department_id, department.id);
}
