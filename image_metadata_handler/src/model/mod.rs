pub mod image_record;
pub mod key;
pub mod lookup;
pub mod notification;
pub mod number;
pub mod object_metadata;
pub mod response;
