use crate::errors::Result;
use crate::render::DocumentNames;
use crate::tabular::TabularDocument;
use serde_json::{Map, Value};

/// Render a document as a flattened JSON collection
///
/// Every row contributes one single-key object per column, so a document of
/// R rows and C columns renders as R*C one-key records in a single array
/// under the collection name. Serialization is compact.
///
/// # Arguments
/// * `doc` - Parsed tabular document
/// * `names` - Collection name to render under
///
/// # Returns
/// Compact JSON string
pub fn render_json(doc: &TabularDocument, names: &DocumentNames) -> Result<String> {
    let mut records = Vec::with_capacity(doc.row_count() * doc.column_count());
    for row in doc.rows() {
        for (column, value) in doc.header().iter().zip(row) {
            let mut record = Map::new();
            record.insert(column.clone(), Value::String(value.clone()));
            records.push(Value::Object(record));
        }
    }

    let mut root = Map::new();
    root.insert(names.collection.clone(), Value::Array(records));

    Ok(serde_json::to_string(&Value::Object(root))?)
}
