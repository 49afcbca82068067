use convert_case::{Case, Casing};

use crate::model::Operation;

/// Derives the property and parameter identifiers for one raw column name.
///
/// Column names are treated as snake case whatever their letter case is, so
/// `USER_NAME`, `user_name` and `User_Name` all derive the same identifiers.
pub struct FieldNameGenerator {
    pub(crate) raw: String,
}

impl FieldNameGenerator {
    pub fn from_column_name(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    pub fn get_property_name(&self) -> String {
        self.raw.from_case(Case::Snake).to_case(Case::Pascal)
    }

    pub fn get_parameter_name(&self) -> String {
        self.raw.from_case(Case::Snake).to_case(Case::Camel)
    }

    /// Name of the ADO parameter bound to this column, e.g. `@UserName`.
    pub fn get_sql_parameter_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.get_property_name())
    }
}

/// Derives request, method, file and local-variable names for one descriptor.
pub struct ObjectNameGenerator {
    pub(crate) name: String,
}

impl ObjectNameGenerator {
    pub fn from_object_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Registered request name, e.g. `Customer_SelectAll`.
    pub fn get_request_name(&self, operation: Operation) -> String {
        format!("{}_{}", self.name, operation.request_suffix())
    }

    pub fn get_method_name(&self, operation: Operation) -> String {
        match operation {
            Operation::SelectAll => format!("GetAll{}s", self.name),
            Operation::SelectById => format!("Get{}ById", self.name),
            Operation::Insert => format!("Insert{}", self.name),
            Operation::Update => format!("Update{}", self.name),
            Operation::Delete => format!("Delete{}", self.name),
        }
    }

    pub fn get_object_file_name(&self) -> String {
        format!("{}.cs", self.name)
    }

    pub fn get_query_file_name(&self) -> String {
        format!("{}.xml", self.name)
    }

    /// File name of the data-access partial dedicated to this descriptor,
    /// e.g. `AppDb.Customer.cs`.
    pub fn get_db_layer_file_name(&self, db_layer_object_name: &str) -> String {
        format!("{}.{}.cs", db_layer_object_name, self.name)
    }

    /// Local variable name used in generated method bodies, e.g. `customer`.
    pub fn get_instance_name(&self) -> String {
        self.name.from_case(Case::Pascal).to_case(Case::Camel)
    }
}
