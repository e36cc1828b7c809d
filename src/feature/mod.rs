pub mod commands;
pub mod dispatch;
pub mod image;
pub mod interaction;
pub mod model;
pub mod platform;
pub mod presence;
pub mod profile;
pub mod ready;
pub mod reply;

#[cfg(test)]
mod testing;
