use crate::types::DocumentId;
use bson::{Bson, Document as BsonDocument};

/// Field under which every stored document carries its identifier.
pub const ID_FIELD: &str = "_id";

/// A stored record: its identifier plus the bson payload (which also holds `_id`).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub data: BsonDocument,
}

impl Document {
    /// Wraps `data`, keeping an `_id` that is already an ObjectId and assigning a fresh one otherwise.
    #[must_use]
    pub fn new(mut data: BsonDocument) -> Self {
        let id = match data.get(ID_FIELD) {
            Some(Bson::ObjectId(oid)) => DocumentId(*oid),
            _ => {
                let id = DocumentId::new();
                data.insert(ID_FIELD, Bson::from(id));
                id
            }
        };
        Self { id, data }
    }
}
