use serde::{Deserialize, Serialize};

use crate::name_generator::FieldNameGenerator;

/// One column mapped to a typed property.
///
/// `data_type` is the .NET type name the discovery query reported for the
/// column (`Int64`, `String`, `DateTime`, ...). It is rendered verbatim into
/// the generated code. The derived names are computed at construction and not
/// persisted; deserialization re-derives them from the raw column name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldDef")]
pub struct DbField {
    pub data_type: String,
    pub db_field_name: String,
    #[serde(skip_serializing)]
    pub property_name: String,
    #[serde(skip_serializing)]
    pub parameter_name: String,
}

#[derive(Deserialize)]
struct FieldDef {
    data_type: String,
    db_field_name: String,
}

impl DbField {
    pub fn new(data_type: &str, db_field_name: &str) -> Self {
        let namer = FieldNameGenerator::from_column_name(db_field_name);

        Self {
            data_type: data_type.to_string(),
            db_field_name: db_field_name.to_string(),
            property_name: namer.get_property_name(),
            parameter_name: namer.get_parameter_name(),
        }
    }
}

impl From<FieldDef> for DbField {
    fn from(def: FieldDef) -> Self {
        DbField::new(&def.data_type, &def.db_field_name)
    }
}
