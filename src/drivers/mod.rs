pub mod udp;
pub mod wifi;
