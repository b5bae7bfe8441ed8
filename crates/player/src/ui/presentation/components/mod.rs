//! Directory page components

mod location_form;
mod location_list;
mod map_panel;

pub use location_form::LocationForm;
pub use location_list::LocationList;
pub use map_panel::MapPanel;
