pub mod palette;
pub mod part;
pub mod session_list;
pub mod text;
