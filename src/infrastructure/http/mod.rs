mod response;

pub use response::{ensure_success, first_non_empty, map_send_error};
