mod db_layer;

use std::path::Path;

use dbmanager_codegen::prelude::*;

pub fn default_settings() -> CodeGenerationSettings {
    CodeGenerationSettings::new(
        65001,
        Indent::new(IndentStyle::Spaces, 4),
        Indent::new(IndentStyle::Spaces, 2),
    )
    .unwrap()
}

pub fn customer_item() -> DbItem {
    let mut item = DbItem::new("Customer", "CUSTOMERS", "SELECT * FROM CUSTOMERS");
    item.fields.push(DbField::new("Int64", "ID"));
    item.fields.push(DbField::new("String", "USER_NAME"));
    item.fields.push(DbField::new("DateTime", "CREATED_DATE"));
    item.use_select_all = true;
    item.use_select_by_id = true;
    item.use_insert = true;
    item.use_update = true;
    item.use_delete = true;
    item
}

pub fn order_item() -> DbItem {
    let mut item = DbItem::new("Order", "ORDERS", "SELECT * FROM ORDERS");
    item.fields.push(DbField::new("Int64", "ID"));
    item.fields.push(DbField::new("Decimal", "AMOUNT"));
    item.use_select_all = true;
    item.use_insert = true;
    item
}

pub fn generator_for(items: Vec<DbItem>, mode: DbLayerMode, output_path: &Path) -> Generator {
    Generator::new(
        items,
        default_settings(),
        "Sample.Objects",
        "Sample.Data",
        "AppDb",
        "@",
        mode,
        output_path,
    )
}
