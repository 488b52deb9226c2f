mod forgot_password;
mod helpers;
mod reset_password;
mod shutdown;
