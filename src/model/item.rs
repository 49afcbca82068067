use serde::{Deserialize, Serialize};

use crate::model::{DbField, Operation};

/// Descriptor for one generated object/table pair.
///
/// `query` is the discovery query the surrounding application runs to find
/// the columns; the engine itself never executes it. Fields keep insertion
/// order, and the first field acts as the primary key for the by-id, update
/// and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbItem {
    pub object_name: String,
    pub table_name: String,
    pub query: String,
    #[serde(default)]
    pub fields: Vec<DbField>,
    pub use_select_all: bool,
    pub use_select_by_id: bool,
    pub use_insert: bool,
    pub use_update: bool,
    pub use_delete: bool,
}

impl DbItem {
    pub fn new(object_name: &str, table_name: &str, query: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            table_name: table_name.to_string(),
            query: query.to_string(),
            ..Default::default()
        }
    }

    /// Enabled operations in emission order.
    pub fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|operation| self.uses(*operation))
            .collect()
    }

    pub fn uses(&self, operation: Operation) -> bool {
        match operation {
            Operation::SelectAll => self.use_select_all,
            Operation::SelectById => self.use_select_by_id,
            Operation::Insert => self.use_insert,
            Operation::Update => self.use_update,
            Operation::Delete => self.use_delete,
        }
    }

    /// The first field, used as the key for by-id, update and delete.
    pub fn primary_key(&self) -> Option<&DbField> {
        self.fields.first()
    }

    /// All fields after the key. These are the SET columns of an update.
    pub fn value_fields(&self) -> &[DbField] {
        if self.fields.is_empty() {
            &[]
        } else {
            &self.fields[1..]
        }
    }
}
