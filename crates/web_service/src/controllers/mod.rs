pub mod room_controller;
pub mod session_controller;
pub mod system_controller;
