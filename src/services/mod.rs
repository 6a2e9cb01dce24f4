pub mod cache;
pub mod dialog;
pub mod slug;
pub mod submit;
pub mod tag_list;
pub mod validation;
