pub mod scaffold;
pub mod verify;
