use crate::render::DocumentNames;
use crate::tabular::TabularDocument;

/// Prologue emitted before the root element
pub const XML_PROLOGUE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n";

/// Render a document in the fixed XML form
///
/// The output is the prologue line, the root open tag on its own line, one
/// line per row, and the root close tag with no trailing newline. Field
/// element names come from the header. Field values are written verbatim
/// with no escaping.
///
/// # Arguments
/// * `doc` - Parsed tabular document
/// * `names` - Root and row element names
///
/// # Returns
/// XML string representation of the document
pub fn render_xml(doc: &TabularDocument, names: &DocumentNames) -> String {
    let mut output = String::new();
    output.push_str(XML_PROLOGUE);
    output.push_str(&format!("<{}>\n", names.root_element));

    for row in doc.rows() {
        output.push_str(&format!("<{}>", names.row_element));
        for (column, value) in doc.header().iter().zip(row) {
            output.push_str(&format!("<{0}>{1}</{0}>", column, value));
        }
        output.push_str(&format!("</{}>\n", names.row_element));
    }

    output.push_str(&format!("</{}>", names.root_element));
    output
}
