//! Cookie session contents. The session carries only the authenticated
//! user's id and display name; everything else lives in the database.

pub const USER_ID: &str = "user_id";
pub const USER_NAME: &str = "user_name";
