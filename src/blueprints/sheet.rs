//! Sheet and field blueprint types
//!
//! A sheet blueprint declares the tabular schema the platform builds the
//! import UI from. These types serialize to the exact JSON shape the
//! platform's workbook-creation endpoint expects.

use serde::{Deserialize, Serialize};

/// Field data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Free-form string
    String,
    /// Numeric value
    Number,
    /// Calendar date
    Date,
    /// Boolean flag
    Boolean,
    /// One value out of a fixed option set
    Enum,
    /// Multiple values out of a fixed option set
    EnumList,
}

/// One selectable option of an enum or enum-list field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumOption {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
}

impl EnumOption {
    /// Create an option from a value and label pair
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Extra configuration for enum-typed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Selectable options
    pub options: Vec<EnumOption>,
}

/// One column of a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBlueprint {
    /// Stable field key records are addressed by
    pub key: String,

    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display label
    pub label: String,

    /// Optional helper text shown in the import UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Enum option set, required for enum and enum-list fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
}

impl FieldBlueprint {
    /// Create a field with the given key, type and label
    pub fn new(key: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field_type,
            label: label.into(),
            description: None,
            config: None,
        }
    }

    /// Set the helper text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the enum option set
    pub fn with_options(mut self, options: Vec<EnumOption>) -> Self {
        self.config = Some(FieldConfig { options });
        self
    }
}

/// Declarative schema for one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetBlueprint {
    /// Display name
    pub name: String,

    /// URL-safe slug, what record hooks are keyed on
    pub slug: String,

    /// Column definitions in display order
    pub fields: Vec<FieldBlueprint>,
}

impl SheetBlueprint {
    /// Create a sheet blueprint
    pub fn new(name: impl Into<String>, slug: impl Into<String>, fields: Vec<FieldBlueprint>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_serialization() {
        assert_eq!(
            serde_json::to_string(&FieldType::EnumList).unwrap(),
            "\"enum-list\""
        );
        assert_eq!(serde_json::to_string(&FieldType::String).unwrap(), "\"string\"");
    }

    #[test]
    fn test_field_blueprint_wire_shape() {
        let field = FieldBlueprint::new("gender", FieldType::Enum, "Gender").with_options(vec![
            EnumOption::new("male", "Male"),
            EnumOption::new("female", "Female"),
        ]);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["key"], "gender");
        assert_eq!(json["type"], "enum");
        assert_eq!(json["config"]["options"][0]["value"], "male");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_sheet_blueprint_field_order() {
        let sheet = SheetBlueprint::new(
            "Sheet",
            "sheet",
            vec![
                FieldBlueprint::new("name", FieldType::String, "Name"),
                FieldBlueprint::new("email", FieldType::String, "Email"),
            ],
        );

        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["fields"][0]["key"], "name");
        assert_eq!(json["fields"][1]["key"], "email");
    }
}
