/// Collection and element names used by the renderers
///
/// The defaults reproduce the periodic-table output the converter has always
/// written; callers may override any of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentNames {
    /// Key of the JSON array holding the flattened records
    pub collection: String,

    /// Name of the XML root element
    pub root_element: String,

    /// Name of the XML per-row element
    pub row_element: String,
}

impl Default for DocumentNames {
    fn default() -> Self {
        Self {
            collection: "ChemicalElements".to_string(),
            root_element: "PeriodicElements".to_string(),
            row_element: "PeriodicElement".to_string(),
        }
    }
}

impl DocumentNames {
    /// Override the JSON collection key
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}
