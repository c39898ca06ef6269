//! UART link for desktop builds.
//!
//! There is no BLE stack wired into the desktop build, so every connection
//! attempt fails immediately. The failure still travels through the event
//! channel so registered callbacks see the same sequence a real adapter
//! would produce.

use pulse_core::uart::{UartEvent, UartLink};
use pulse_core::UartError;
use std::sync::mpsc::Sender;

#[derive(Debug, Default)]
pub struct DesktopUartLink;

impl UartLink for DesktopUartLink {
    fn connect_first_available(&mut self, events: Sender<UartEvent>) -> Result<(), UartError> {
        log::debug!(target: "bt", "scanning for UART peripherals");
        // Receiver lives in the session; a send error means it is gone.
        let _ = events.send(UartEvent::ConnectFailed);
        Err(UartError::NoAdapter)
    }

    fn disconnect(&mut self) {}

    fn send(&mut self, data: &[u8]) -> Result<(), UartError> {
        log::debug!(target: "bt", "dropping {} bytes, not connected", data.len());
        Err(UartError::NotConnected)
    }

    fn device_info(&self) -> String {
        "no adapter".to_string()
    }
}
