pub mod redirect;
pub mod signin;
