//! Terminal frontend: a welcome screen that collects the player name and AI
//! difficulty, and a table screen that forwards check/bet/fold intents to the
//! session. Contains no game logic.

pub mod app;
pub mod controller;
pub mod ui;
