use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::generator::queries::xml_escape;
use crate::model::DbItem;

impl Generator {
    pub(crate) fn gen_select_all_sql(&self, item: &DbItem, buf: &mut CodeBuffer) {
        buf.line(&xml_escape(&format!("SELECT {}", column_list(item))));
        buf.line(&xml_escape(&format!("FROM {}", item.table_name)));
    }

    pub(crate) fn gen_select_by_id_sql(&self, item: &DbItem, buf: &mut CodeBuffer) {
        buf.line(&xml_escape(&format!("SELECT {}", column_list(item))));
        buf.line(&xml_escape(&format!("FROM {}", item.table_name)));
        buf.line(&xml_escape(&self.where_key_clause(item)));
    }
}

fn column_list(item: &DbItem) -> String {
    item.fields
        .iter()
        .map(|field| field.db_field_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
