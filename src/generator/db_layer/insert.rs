use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    /// Insert binds every field as a parameter, in field order. The body is
    /// identical in both modes.
    pub(crate) fn gen_insert_method(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);
        let object = &item.object_name;
        let instance = namer.get_instance_name();

        buf.line(&format!(
            "public void {}({} {})",
            namer.get_method_name(Operation::Insert),
            object,
            instance
        ));
        buf.line("{");
        buf.indent();
        self.gen_parameter_list_decl(buf);
        for field in &item.fields {
            let value = format!("{}.{}", instance, field.property_name);
            self.gen_parameter_add(buf, &field.property_name, &value);
        }
        buf.line(&format!(
            "_db.ExecuteNonQueryWithRequest(\"{}\", parameters);",
            namer.get_request_name(Operation::Insert)
        ));
        buf.dedent();
        buf.line("}");
    }
}
