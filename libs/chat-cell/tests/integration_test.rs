use assert_matches::assert_matches;

use chat_cell::models::CreateChatRequest;
use chat_cell::services::ChatService;
use shared_models::ServiceError;
use shared_utils::test_utils::TestConfig;

fn create_request(message: &str) -> CreateChatRequest {
    CreateChatRequest {
        patient_id: "p1".to_string(),
        doctor_id: "doc1".to_string(),
        message: message.to_string(),
        timestamp: "2024-05-01T10:00:00Z".to_string(),
    }
}

#[test]
fn created_chat_is_readable_by_id() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = ChatService::new(&ctx).unwrap();

    let created = service.create_chat(create_request("hello doctor")).unwrap();

    let fetched = service.get_chat(&created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.timestamp, "2024-05-01T10:00:00Z");
}

#[test]
fn create_rejects_blank_required_fields() {
    let config = TestConfig::with_policy(false);
    let ctx = config.open_context().unwrap();
    let service = ChatService::new(&ctx).unwrap();

    for request in [
        CreateChatRequest {
            patient_id: String::new(),
            ..create_request("hi")
        },
        CreateChatRequest {
            doctor_id: " ".to_string(),
            ..create_request("hi")
        },
        create_request(""),
        CreateChatRequest {
            timestamp: String::new(),
            ..create_request("hi")
        },
    ] {
        assert_matches!(service.create_chat(request), Err(ServiceError::InvalidPayload(_)));
    }

    assert!(service.get_all_chats().unwrap().is_empty());
}

#[test]
fn get_all_applies_the_empty_result_policy() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = ChatService::new(&ctx).unwrap();

    assert_matches!(service.get_all_chats(), Err(ServiceError::NotFound(_)));

    let created = service.create_chat(create_request("hello")).unwrap();
    assert_eq!(service.get_all_chats().unwrap(), vec![created]);
}

#[test]
fn unknown_chat_id_reports_not_found() {
    let config = TestConfig::new();
    let ctx = config.open_context().unwrap();
    let service = ChatService::new(&ctx).unwrap();

    assert_matches!(service.get_chat("missing"), Err(ServiceError::NotFound(_)));
}
