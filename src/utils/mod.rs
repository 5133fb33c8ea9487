pub mod formatting;
pub mod slug;
