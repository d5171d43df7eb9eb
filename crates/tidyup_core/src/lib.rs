pub mod angle;
pub mod animation;
pub mod body;
pub mod config;
pub mod controller;
pub mod input;
pub mod interaction;
pub mod level;
pub mod movement;
pub mod orbit;
pub mod proximity;
pub mod respawn;

#[cfg(test)]
pub(crate) mod testing;
