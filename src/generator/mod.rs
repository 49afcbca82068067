mod db_layer;
mod object;
mod queries;

use std::fs;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};

use crate::model::DbItem;
use crate::name_generator::ObjectNameGenerator;
use crate::settings::CodeGenerationSettings;

/// How generated select methods materialize rows.
///
/// `Reflection` delegates mapping to the runtime, `Direct` renders an
/// explicit data-reader loop with one assignment per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbLayerMode {
    #[default]
    Reflection,
    Direct,
}

#[derive(Debug, Display, Error, From)]
pub enum CodeGenError {
    #[display("object `{_0}` has no fields, run discovery before generating")]
    NoFields(#[error(not(source))] String),
    #[display("update for object `{_0}` requires at least one non-key field")]
    UpdateNeedsValueField(#[error(not(source))] String),
    #[display("`{file}` contains characters not representable in code page {code_page}")]
    Encoding { file: String, code_page: u32 },
    #[from]
    Io(std::io::Error),
}

/// Renders all artifacts for a descriptor list into the output directory:
/// object classes, the data-access layer and the query definitions.
pub struct Generator {
    pub(crate) items: Vec<DbItem>,
    pub(crate) settings: CodeGenerationSettings,
    pub(crate) objects_namespace: String,
    pub(crate) db_layer_namespace: String,
    pub(crate) db_layer_object_name: String,
    pub(crate) parameter_prefix: String,
    pub(crate) mode: DbLayerMode,
    pub(crate) output_path: PathBuf,
}

impl Generator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        items: Vec<DbItem>,
        settings: CodeGenerationSettings,
        objects_namespace: &str,
        db_layer_namespace: &str,
        db_layer_object_name: &str,
        parameter_prefix: &str,
        mode: DbLayerMode,
        output_path: &Path,
    ) -> Self {
        Self {
            items,
            settings,
            objects_namespace: objects_namespace.to_string(),
            db_layer_namespace: db_layer_namespace.to_string(),
            db_layer_object_name: db_layer_object_name.to_string(),
            parameter_prefix: parameter_prefix.to_string(),
            mode,
            output_path: output_path.to_path_buf(),
        }
    }

    pub fn generate(&self) -> Result<(), CodeGenError> {
        self.validate_items()?;

        tracing::info!(
            "generating code for {} objects into {}",
            self.items.len(),
            self.output_path.display()
        );

        self.generate_objects()?;
        self.generate_db_layer_home()?;
        self.generate_db_layer_items()?;
        self.generate_queries()?;

        Ok(())
    }

    fn validate_items(&self) -> Result<(), CodeGenError> {
        for item in &self.items {
            if item.fields.is_empty() {
                return Err(CodeGenError::NoFields(item.object_name.clone()));
            }
            if item.use_update && item.value_fields().is_empty() {
                return Err(CodeGenError::UpdateNeedsValueField(item.object_name.clone()));
            }
        }
        Ok(())
    }

    fn generate_objects(&self) -> Result<(), CodeGenError> {
        let objects_dir = self.output_path.join("Objects");
        fs::create_dir_all(&objects_dir)?;

        for item in &self.items {
            let namer = ObjectNameGenerator::from_object_name(&item.object_name);
            let class = self.gen_object_class(item);
            self.write_csharp(&objects_dir.join(namer.get_object_file_name()), &class)?;
        }

        Ok(())
    }

    fn generate_db_layer_home(&self) -> Result<(), CodeGenError> {
        let db_layer_dir = self.output_path.join("DbLayer");
        fs::create_dir_all(&db_layer_dir)?;

        let home = self.gen_db_layer_home();
        let file_name = format!("{}.cs", self.db_layer_object_name);
        self.write_csharp(&db_layer_dir.join(file_name), &home)
    }

    fn generate_db_layer_items(&self) -> Result<(), CodeGenError> {
        let db_layer_dir = self.output_path.join("DbLayer");
        fs::create_dir_all(&db_layer_dir)?;

        for item in &self.items {
            let namer = ObjectNameGenerator::from_object_name(&item.object_name);
            let partial = self.gen_db_layer_item(item);
            let file_name = namer.get_db_layer_file_name(&self.db_layer_object_name);
            self.write_csharp(&db_layer_dir.join(file_name), &partial)?;
        }

        Ok(())
    }

    fn generate_queries(&self) -> Result<(), CodeGenError> {
        let queries_dir = self.output_path.join("Queries");
        fs::create_dir_all(&queries_dir)?;

        for item in &self.items {
            let namer = ObjectNameGenerator::from_object_name(&item.object_name);
            let document = self.gen_query_document(item);
            self.write_xml(&queries_dir.join(namer.get_query_file_name()), &document)?;
        }

        Ok(())
    }

    /// Writes a C# artifact with the configured encoding.
    fn write_csharp(&self, path: &Path, text: &str) -> Result<(), CodeGenError> {
        let (bytes, _, had_errors) = self.settings.encoding().encode(text);
        if had_errors {
            return Err(CodeGenError::Encoding {
                file: path.display().to_string(),
                code_page: self.settings.code_page(),
            });
        }

        fs::write(path, &bytes)?;
        tracing::debug!("generated {}", path.display());
        Ok(())
    }

    /// Query definitions are always UTF-8, as their XML declaration states.
    fn write_xml(&self, path: &Path, text: &str) -> Result<(), CodeGenError> {
        fs::write(path, text.as_bytes())?;
        tracing::debug!("generated {}", path.display());
        Ok(())
    }
}
