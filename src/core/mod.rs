pub mod content_type;
pub mod due_date;
pub mod suggestion;
