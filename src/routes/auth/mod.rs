pub mod signin;
pub mod signup;
pub mod social_login;
