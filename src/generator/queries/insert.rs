use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::generator::queries::xml_escape;
use crate::model::DbItem;

impl Generator {
    /// Insert covers every field, key included.
    pub(crate) fn gen_insert_sql(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let columns = item
            .fields
            .iter()
            .map(|field| field.db_field_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let values = item
            .fields
            .iter()
            .map(|field| format!("{}{}", self.parameter_prefix, field.property_name))
            .collect::<Vec<_>>()
            .join(", ");

        buf.line(&xml_escape(&format!(
            "INSERT INTO {} ({})",
            item.table_name, columns
        )));
        buf.line(&xml_escape(&format!("VALUES ({})", values)));
    }
}
