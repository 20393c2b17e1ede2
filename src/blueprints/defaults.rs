//! Default blueprint definitions
//!
//! The stock workbook this listener configures a space with: one example
//! sheet with a representative field mix and a single submit action.

use super::action::ActionBlueprint;
use super::sheet::{EnumOption, FieldBlueprint, FieldType, SheetBlueprint};
use super::workbook::{SpaceBlueprint, WorkbookBlueprint};

/// The example sheet with one field of each supported schema shape
pub fn example_sheet() -> SheetBlueprint {
    SheetBlueprint::new(
        "Example Sheet",
        "example-sheet",
        vec![
            FieldBlueprint::new("name", FieldType::String, "Name"),
            FieldBlueprint::new("email", FieldType::String, "Email"),
            FieldBlueprint::new("phone", FieldType::String, "Phone"),
            FieldBlueprint::new("dob", FieldType::Date, "Date of Birth"),
            FieldBlueprint::new("age", FieldType::Number, "Age"),
            FieldBlueprint::new("gender", FieldType::Enum, "Gender").with_options(vec![
                EnumOption::new("male", "Male"),
                EnumOption::new("female", "Female"),
            ]),
            FieldBlueprint::new("favorite-colors", FieldType::EnumList, "Favorite Colors")
                .with_description("Select your favorite colors. You can select multiple colors.")
                .with_options(vec![
                    EnumOption::new("red", "Red"),
                    EnumOption::new("blue", "Blue"),
                    EnumOption::new("green", "Green"),
                    EnumOption::new("yellow", "Yellow"),
                ]),
        ],
    )
}

/// The submit action offered on the default workbook
pub fn submit_action() -> ActionBlueprint {
    ActionBlueprint::foreground("submit", "Submit")
        .with_description("Submits the workbook to the configured webhook")
}

/// The default workbook: one example sheet, one submit action
pub fn default_workbook() -> WorkbookBlueprint {
    WorkbookBlueprint::new("Workbook", vec![example_sheet()], vec![submit_action()])
}

/// The default space blueprint, applied when a space is first configured
pub fn default_space() -> SpaceBlueprint {
    SpaceBlueprint::new("Sheetflow Space")
}
