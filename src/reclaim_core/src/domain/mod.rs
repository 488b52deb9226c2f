pub mod account;
pub mod delivery_outcome;
pub mod email;
pub mod operation_result;
pub mod password;
pub mod password_reset_request;
pub mod reset_link;
pub mod reset_token;
pub mod template_model;
