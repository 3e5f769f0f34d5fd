pub mod derive;
pub mod script;
pub mod table;
