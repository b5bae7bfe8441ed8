//! User intents raised from the location list

use placemap_domain::LocationId;

/// What a click on a list row asks for
///
/// The row body selects (pans the map), the edit button loads the location
/// into the form, and the delete button removes it after confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Select(LocationId),
    Edit(LocationId),
    Delete(LocationId),
}
