//! Conversion from `tiled` property values.

use rpd_tiled_core::view::{Property, PropertyValue};

/// Convert a `tiled` property value, recursing into class members.
pub fn convert_value(value: &tiled::PropertyValue) -> PropertyValue {
    match value {
        tiled::PropertyValue::BoolValue(b) => PropertyValue::Bool(*b),
        tiled::PropertyValue::IntValue(i) => PropertyValue::Int(*i),
        tiled::PropertyValue::FloatValue(f) => PropertyValue::Float(*f),
        tiled::PropertyValue::StringValue(s) => PropertyValue::String(s.clone()),
        tiled::PropertyValue::FileValue(s) => PropertyValue::File(s.clone()),
        tiled::PropertyValue::ObjectValue(id) => PropertyValue::Object(*id),
        tiled::PropertyValue::ColorValue(color) => PropertyValue::Color {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
        },
        tiled::PropertyValue::ClassValue {
            property_type,
            properties,
        } => PropertyValue::Class {
            property_type: property_type.clone(),
            properties: convert_properties(properties),
        },
    }
}

/// Convert a property map, sorted by name.
///
/// `tiled` stores properties in a hash map; sorting keeps exports stable.
pub fn convert_properties(properties: &tiled::Properties) -> Vec<Property> {
    let mut converted: Vec<Property> = properties
        .iter()
        .map(|(name, value)| Property::new(name.as_str(), convert_value(value)))
        .collect();
    converted.sort_by(|a, b| a.name.cmp(&b.name));
    converted
}
