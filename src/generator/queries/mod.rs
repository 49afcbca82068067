mod delete;
mod insert;
mod select;
mod update;

use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    /// Generates the query-definition document for one descriptor: one
    /// `Request` element per enabled operation wrapping its parameterized SQL.
    pub(crate) fn gen_query_document(&self, item: &DbItem) -> String {
        let mut buf = CodeBuffer::new(&self.settings.sql_indent);
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);

        buf.line("<?xml version=\"1.0\" encoding=\"utf-8\"?>");

        let operations = item.operations();
        if operations.is_empty() {
            buf.line("<Requests />");
            return buf.finish();
        }

        buf.line("<Requests>");
        buf.indent();

        for operation in operations {
            buf.line(&format!(
                "<Request Name=\"{}\">",
                xml_escape(&namer.get_request_name(operation))
            ));
            buf.indent();
            buf.line("<Query>");
            buf.indent();

            match operation {
                Operation::SelectAll => self.gen_select_all_sql(item, &mut buf),
                Operation::SelectById => self.gen_select_by_id_sql(item, &mut buf),
                Operation::Insert => self.gen_insert_sql(item, &mut buf),
                Operation::Update => self.gen_update_sql(item, &mut buf),
                Operation::Delete => self.gen_delete_sql(item, &mut buf),
            }

            buf.dedent();
            buf.line("</Query>");
            buf.dedent();
            buf.line("</Request>");
        }

        buf.dedent();
        buf.line("</Requests>");

        buf.finish()
    }

    /// `WHERE <key column> = <prefixed key parameter>` for the by-id, update
    /// and delete statements.
    pub(crate) fn where_key_clause(&self, item: &DbItem) -> String {
        let key = item
            .primary_key()
            .expect("descriptors are validated before emission");

        format!(
            "WHERE {} = {}{}",
            key.db_field_name, self.parameter_prefix, key.property_name
        )
    }
}

pub(crate) fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
