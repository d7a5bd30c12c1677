use tracing::debug;

use shared_models::{ServiceError, ServiceResult};
use shared_store::{IdentifierGenerator, QueryPolicy, RecordStore, StoreContext, StoreError};
use shared_utils::validate;

use crate::models::{Chat, CreateChatRequest};

const CHATS_TREE: &str = "chats";

/// Chat messages are append-only: no update or delete operations exist.
pub struct ChatService {
    store: RecordStore<Chat>,
    ids: IdentifierGenerator,
    policy: QueryPolicy,
}

impl ChatService {
    pub fn new(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            store: ctx.open_store(CHATS_TREE)?,
            ids: ctx.ids(),
            policy: ctx.policy(),
        })
    }

    pub fn create_chat(&self, request: CreateChatRequest) -> ServiceResult<Chat> {
        debug!(
            "Creating chat message from patient {} to doctor {}",
            request.patient_id, request.doctor_id
        );
        validate::require("patient_id", &request.patient_id)?;
        validate::require("doctor_id", &request.doctor_id)?;
        validate::require("message", &request.message)?;
        validate::require("timestamp", &request.timestamp)?;

        let chat = Chat {
            id: self.ids.generate(),
            patient_id: request.patient_id,
            doctor_id: request.doctor_id,
            message: request.message,
            timestamp: request.timestamp,
        };
        self.store.insert(&chat.id, &chat)?;

        Ok(chat)
    }

    pub fn get_chat(&self, chat_id: &str) -> ServiceResult<Chat> {
        self.store
            .get(chat_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("chat {} not found", chat_id)))
    }

    pub fn get_all_chats(&self) -> ServiceResult<Vec<Chat>> {
        let chats = self.store.values()?;
        if chats.is_empty() && self.policy.empty_result_is_error {
            return Err(ServiceError::NotFound("no chat messages".to_string()));
        }
        Ok(chats)
    }
}
