use crate::buffer::CodeBuffer;
use crate::generator::Generator;
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    /// Delete takes the key value alone.
    pub(crate) fn gen_delete_method(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);
        let key = item
            .primary_key()
            .expect("descriptors are validated before emission");

        buf.line(&format!(
            "public void {}({} {})",
            namer.get_method_name(Operation::Delete),
            key.data_type,
            key.parameter_name
        ));
        buf.line("{");
        buf.indent();
        self.gen_parameter_list_decl(buf);
        self.gen_parameter_add(buf, &key.property_name, &key.parameter_name);
        buf.line(&format!(
            "_db.ExecuteNonQueryWithRequest(\"{}\", parameters);",
            namer.get_request_name(Operation::Delete)
        ));
        buf.dedent();
        buf.line("}");
    }
}
