use crate::buffer::CodeBuffer;
use crate::generator::{DbLayerMode, Generator};
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    pub(crate) fn gen_select_all_method(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);
        let object = &item.object_name;
        let method = namer.get_method_name(Operation::SelectAll);
        let request = namer.get_request_name(Operation::SelectAll);
        let instance = namer.get_instance_name();

        buf.line(&format!("public List<{}> {}()", object, method));
        buf.line("{");
        buf.indent();
        buf.line(&format!("List<{0}> list = new List<{0}>();", object));

        match self.mode {
            DbLayerMode::Reflection => {
                buf.line(&format!(
                    "_db.FillObjectsWithRequest(\"{}\", null, list);",
                    request
                ));
            }
            DbLayerMode::Direct => {
                buf.line(&format!(
                    "using (DbDataReader reader = _db.ExecuteReaderWithRequest(\"{}\", null))",
                    request
                ));
                buf.line("{");
                buf.indent();
                buf.line("while (reader.Read())");
                buf.line("{");
                buf.indent();
                buf.line(&format!("{0} {1} = new {0}();", object, instance));
                self.gen_reader_assignments(item, &instance, buf);
                buf.line(&format!("list.Add({});", instance));
                buf.dedent();
                buf.line("}");
                buf.dedent();
                buf.line("}");
            }
        }

        buf.line("return list;");
        buf.dedent();
        buf.line("}");
    }

    pub(crate) fn gen_select_by_id_method(&self, item: &DbItem, buf: &mut CodeBuffer) {
        let namer = ObjectNameGenerator::from_object_name(&item.object_name);
        let object = &item.object_name;
        let method = namer.get_method_name(Operation::SelectById);
        let request = namer.get_request_name(Operation::SelectById);
        let instance = namer.get_instance_name();
        let key = item
            .primary_key()
            .expect("descriptors are validated before emission");

        buf.line(&format!(
            "public {} {}({} {})",
            object, method, key.data_type, key.parameter_name
        ));
        buf.line("{");
        buf.indent();

        match self.mode {
            DbLayerMode::Reflection => {
                buf.line(&format!("List<{0}> list = new List<{0}>();", object));
                self.gen_parameter_list_decl(buf);
                self.gen_parameter_add(buf, &key.property_name, &key.parameter_name);
                buf.line(&format!(
                    "_db.FillObjectsWithRequest(\"{}\", parameters, list);",
                    request
                ));
                buf.line("return list.Count > 0 ? list[0] : null;");
            }
            DbLayerMode::Direct => {
                buf.line(&format!("{} {} = null;", object, instance));
                self.gen_parameter_list_decl(buf);
                self.gen_parameter_add(buf, &key.property_name, &key.parameter_name);
                buf.line(&format!(
                    "using (DbDataReader reader = _db.ExecuteReaderWithRequest(\"{}\", parameters))",
                    request
                ));
                buf.line("{");
                buf.indent();
                buf.line("if (reader.Read())");
                buf.line("{");
                buf.indent();
                buf.line(&format!("{} = new {}();", instance, object));
                self.gen_reader_assignments(item, &instance, buf);
                buf.dedent();
                buf.line("}");
                buf.dedent();
                buf.line("}");
                buf.line(&format!("return {};", instance));
            }
        }

        buf.dedent();
        buf.line("}");
    }
}
