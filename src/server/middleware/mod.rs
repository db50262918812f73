pub mod auth;
pub mod redirect;
pub mod session;

#[cfg(test)]
mod test;
