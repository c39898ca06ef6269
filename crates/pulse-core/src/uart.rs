//! Bluetooth LE UART link.
//!
//! Transports deliver [`UartEvent`]s over an mpsc channel from whatever thread
//! their stack calls back on; [`UartSession`] drains them on the host thread
//! and fans them out to registered [`UartCallback`]s. Nothing here touches the
//! render core.

use crate::error::UartError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Nordic UART Service.
pub const NUS_SERVICE_UUID: &str = "6e400001-b5a3-f393-e0a9-e50e24dcca9e";
/// Characteristic the peer writes to (we transmit on it).
pub const NUS_TX_CHAR_UUID: &str = "6e400002-b5a3-f393-e0a9-e50e24dcca9e";
/// Characteristic the peer notifies on (we receive on it).
pub const NUS_RX_CHAR_UUID: &str = "6e400003-b5a3-f393-e0a9-e50e24dcca9e";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UartEvent {
    DeviceFound { name: String },
    Connected,
    ConnectFailed,
    Disconnected,
    Received(Vec<u8>),
    DeviceInfoAvailable,
}

pub trait UartCallback {
    fn on_device_found(&mut self, _name: &str, _info: &str) {}
    fn on_connected(&mut self, _info: &str) {}
    fn on_connect_failed(&mut self, _info: &str) {}
    fn on_disconnected(&mut self, _info: &str) {}
    fn on_receive(&mut self, _info: &str, _data: &[u8]) {}
    fn on_device_info_available(&mut self, _info: &str) {}
}

/// Route one event to the matching callback method.
pub fn dispatch_event(callback: &mut dyn UartCallback, event: &UartEvent, info: &str) {
    match event {
        UartEvent::DeviceFound { name } => callback.on_device_found(name, info),
        UartEvent::Connected => callback.on_connected(info),
        UartEvent::ConnectFailed => callback.on_connect_failed(info),
        UartEvent::Disconnected => callback.on_disconnected(info),
        UartEvent::Received(data) => callback.on_receive(info, data),
        UartEvent::DeviceInfoAvailable => callback.on_device_info_available(info),
    }
}

/// A BLE UART transport.
pub trait UartLink {
    /// Scan for the first peripheral advertising the UART service and
    /// connect to it. Progress is reported on `events`.
    fn connect_first_available(&mut self, events: Sender<UartEvent>) -> Result<(), UartError>;
    fn disconnect(&mut self);
    fn send(&mut self, data: &[u8]) -> Result<(), UartError>;
    /// Human-readable description of the current peer.
    fn device_info(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallbackId(u32);

/// Logs every link event, received payloads as lossy UTF-8.
#[derive(Debug, Default)]
pub struct UartLogger;

impl UartCallback for UartLogger {
    fn on_device_found(&mut self, name: &str, info: &str) {
        log::debug!(target: "bt", "Device Found: {name} ({info})");
    }
    fn on_connected(&mut self, info: &str) {
        log::debug!(target: "bt", "Connected to: {info}");
    }
    fn on_connect_failed(&mut self, info: &str) {
        log::debug!(target: "bt", "Error connecting to device! {info}");
    }
    fn on_disconnected(&mut self, info: &str) {
        log::debug!(target: "bt", "Disconnected: {info}");
    }
    fn on_receive(&mut self, _info: &str, data: &[u8]) {
        log::debug!(target: "bt", "Received: {}", String::from_utf8_lossy(data));
    }
    fn on_device_info_available(&mut self, info: &str) {
        log::debug!(target: "bt", "{info}");
    }
}

/// Owns a link plus the callbacks listening to it.
pub struct UartSession<L: UartLink> {
    link: L,
    callbacks: Vec<(CallbackId, Box<dyn UartCallback>)>,
    next_id: u32,
    tx: Sender<UartEvent>,
    rx: Receiver<UartEvent>,
}

impl<L: UartLink> UartSession<L> {
    pub fn new(link: L) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            link,
            callbacks: Vec::new(),
            next_id: 0,
            tx,
            rx,
        }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn register_callback(&mut self, callback: Box<dyn UartCallback>) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub fn unregister_callback(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    pub fn connect_first_available(&mut self) -> Result<(), UartError> {
        self.link.connect_first_available(self.tx.clone())
    }

    pub fn disconnect(&mut self) {
        self.link.disconnect();
    }

    pub fn send(&mut self, data: &[u8]) -> Result<(), UartError> {
        self.link.send(data)
    }

    /// Deliver every queued event to every callback. Returns how many events
    /// were drained.
    pub fn pump(&mut self) -> usize {
        let mut drained = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    drained += 1;
                    let info = self.link.device_info();
                    for (_, cb) in self.callbacks.iter_mut() {
                        dispatch_event(cb.as_mut(), &event, &info);
                    }
                }
                // The session holds a sender itself, so the channel never
                // disconnects while we are alive.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        drained
    }
}
