use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::model::DbItem;

impl Generator {
    /// Generates the data-object class for one descriptor: a plain class in
    /// the objects namespace with one auto-property per field, in field order.
    pub(crate) fn gen_object_class(&self, item: &DbItem) -> String {
        let mut buf = CodeBuffer::new(&self.settings.csharp_indent);

        buf.line("using System;");
        buf.blank();
        buf.line(&format!("namespace {}", self.objects_namespace));
        buf.line("{");
        buf.indent();
        buf.line(&format!("public class {}", item.object_name));
        buf.line("{");
        buf.indent();

        for field in &item.fields {
            buf.line(&format!(
                "public {} {} {{ get; set; }}",
                field.data_type, field.property_name
            ));
        }

        buf.dedent();
        buf.line("}");
        buf.dedent();
        buf.line("}");

        buf.finish()
    }
}
