pub mod loading;
pub mod saving;
