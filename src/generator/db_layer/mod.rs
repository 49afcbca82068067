mod delete;
mod insert;
mod select;
mod update;

use crate::buffer::CodeBuffer;
use crate::generator::{DbLayerMode, Generator};
use crate::model::{DbItem, Operation};
use crate::name_generator::ObjectNameGenerator;

impl Generator {
    /// Generates the data-access home file: the partial class owning the
    /// `DbManager` and registering every descriptor's query file.
    pub(crate) fn gen_db_layer_home(&self) -> String {
        let mut buf = CodeBuffer::new(&self.settings.csharp_indent);
        let class = &self.db_layer_object_name;

        buf.line("using System;");
        buf.line("using DotNetToolBox.Database;");
        buf.blank();
        buf.line(&format!("namespace {}", self.db_layer_namespace));
        buf.line("{");
        buf.indent();
        buf.line(&format!("public partial class {} : IDisposable", class));
        buf.line("{");
        buf.indent();

        buf.line("private DbManager _db;");
        buf.blank();
        buf.line(&format!(
            "public {}(string connectionString, string provider)",
            class
        ));
        buf.line("{");
        buf.indent();
        buf.line("_db = new DbManager(connectionString, provider);");
        buf.line("RegisterRequests();");
        buf.dedent();
        buf.line("}");

        for method in ["Open", "Close", "Dispose"] {
            buf.blank();
            buf.line(&format!("public void {}()", method));
            buf.line("{");
            buf.indent();
            buf.line(&format!("_db.{}();", method));
            buf.dedent();
            buf.line("}");
        }

        buf.blank();
        buf.line("private void RegisterRequests()");
        buf.line("{");
        buf.indent();
        for item in &self.items {
            let namer = ObjectNameGenerator::from_object_name(&item.object_name);
            buf.line(&format!(
                "_db.AddRequestsFromFile(@\"Queries\\{}\");",
                namer.get_query_file_name()
            ));
        }
        buf.dedent();
        buf.line("}");

        buf.dedent();
        buf.line("}");
        buf.dedent();
        buf.line("}");

        buf.finish()
    }

    /// Generates the data-access partial dedicated to one descriptor, with
    /// one method per enabled operation in fixed operation order.
    pub(crate) fn gen_db_layer_item(&self, item: &DbItem) -> String {
        let mut buf = CodeBuffer::new(&self.settings.csharp_indent);

        buf.line("using System;");
        buf.line("using System.Collections.Generic;");
        if self.mode == DbLayerMode::Direct {
            buf.line("using System.Data.Common;");
        }
        buf.line("using DotNetToolBox.Database;");
        buf.line(&format!("using {};", self.objects_namespace));
        buf.blank();
        buf.line(&format!("namespace {}", self.db_layer_namespace));
        buf.line("{");
        buf.indent();
        buf.line(&format!(
            "public partial class {}",
            self.db_layer_object_name
        ));
        buf.line("{");
        buf.indent();

        for (position, operation) in item.operations().into_iter().enumerate() {
            if position > 0 {
                buf.blank();
            }
            match operation {
                Operation::SelectAll => self.gen_select_all_method(item, &mut buf),
                Operation::SelectById => self.gen_select_by_id_method(item, &mut buf),
                Operation::Insert => self.gen_insert_method(item, &mut buf),
                Operation::Update => self.gen_update_method(item, &mut buf),
                Operation::Delete => self.gen_delete_method(item, &mut buf),
            }
        }

        buf.dedent();
        buf.line("}");
        buf.dedent();
        buf.line("}");

        buf.finish()
    }

    /// Declares the ADO parameter list local used by parameterized methods.
    pub(crate) fn gen_parameter_list_decl(&self, buf: &mut CodeBuffer) {
        buf.line("List<DbManagerParameter> parameters = new List<DbManagerParameter>();");
    }

    pub(crate) fn gen_parameter_add(
        &self,
        buf: &mut CodeBuffer,
        property_name: &str,
        value_expr: &str,
    ) {
        buf.line(&format!(
            "parameters.Add(new DbManagerParameter(\"{}{}\", {}));",
            self.parameter_prefix, property_name, value_expr
        ));
    }

    /// One `instance.Property = (Type)reader["COLUMN"];` line per field.
    pub(crate) fn gen_reader_assignments(
        &self,
        item: &DbItem,
        instance: &str,
        buf: &mut CodeBuffer,
    ) {
        for field in &item.fields {
            buf.line(&format!(
                "{}.{} = ({})reader[\"{}\"];",
                instance, field.property_name, field.data_type, field.db_field_name
            ));
        }
    }
}
