//! Platform adapters implementing [`DeviceSource`](super::DeviceSource).

mod winit;

pub use self::winit::WinitDeviceSource;
