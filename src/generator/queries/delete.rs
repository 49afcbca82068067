use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::generator::queries::xml_escape;
use crate::model::DbItem;

impl Generator {
    pub(crate) fn gen_delete_sql(&self, item: &DbItem, buf: &mut CodeBuffer) {
        buf.line(&xml_escape(&format!("DELETE FROM {}", item.table_name)));
        buf.line(&xml_escape(&self.where_key_clause(item)));
    }
}
