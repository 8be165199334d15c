pub mod crud;
pub mod list;

pub use self::crud::{create, new_form, show};
pub use self::list::{api_list, list, ListQuery};
