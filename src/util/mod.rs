pub mod iso2;
pub mod slug;
