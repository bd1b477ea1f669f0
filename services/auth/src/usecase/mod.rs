pub mod authcode;
pub mod role_gate;
