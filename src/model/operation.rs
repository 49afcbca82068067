/// One of the CRUD operations a descriptor can emit.
///
/// Variant order is the emission order: methods and requests are always
/// rendered as select all, select by id, insert, update, delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SelectAll,
    SelectById,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::SelectAll,
        Operation::SelectById,
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
    ];

    /// Suffix used in registered request names, e.g. `Customer_SelectAll`.
    pub fn request_suffix(&self) -> &'static str {
        match self {
            Operation::SelectAll => "SelectAll",
            Operation::SelectById => "SelectById",
            Operation::Insert => "Insert",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        }
    }
}
