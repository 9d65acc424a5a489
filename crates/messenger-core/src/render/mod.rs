pub mod json_render;
pub mod names;
pub mod xml_render;

pub use json_render::render_json;
pub use names::DocumentNames;
pub use xml_render::{render_xml, XML_PROLOGUE};
