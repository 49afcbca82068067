use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::generator::queries::xml_escape;
use crate::model::DbItem;

impl Generator {
    /// Update sets every non-key field and filters on the key. Continuation
    /// SET columns land one level deeper than the statement keywords.
    pub(crate) fn gen_update_sql(&self, item: &DbItem, buf: &mut CodeBuffer) {
        buf.line(&xml_escape(&format!("UPDATE {}", item.table_name)));

        let assignments: Vec<String> = item
            .value_fields()
            .iter()
            .map(|field| {
                format!(
                    "{} = {}{}",
                    field.db_field_name, self.parameter_prefix, field.property_name
                )
            })
            .collect();

        for (position, assignment) in assignments.iter().enumerate() {
            let separator = if position + 1 < assignments.len() { "," } else { "" };
            if position == 0 {
                buf.line(&xml_escape(&format!("SET {}{}", assignment, separator)));
                buf.indent();
            } else {
                buf.line(&xml_escape(&format!("{}{}", assignment, separator)));
            }
        }
        if !assignments.is_empty() {
            buf.dedent();
        }

        buf.line(&xml_escape(&self.where_key_clause(item)));
    }
}
