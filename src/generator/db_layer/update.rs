use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    /// Update binds every field as a parameter; the SQL side uses the non-key
    /// fields in SET and the key in WHERE.
    pub(crate) fn gen_update_method(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);
        let object = &item.object_name;
        let instance = namer.get_instance_name();

        buf.line(&format!(
            "public void {}({} {})",
            namer.get_method_name(Operation::Update),
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
            namer.get_request_name(Operation::Update)
        ));
        buf.dedent();
        buf.line("}");
    }
}
